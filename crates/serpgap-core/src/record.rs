use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of tracked competitor sites. The export format carries exactly
/// four competitor columns alongside the own-site column.
pub const COMPETITOR_COUNT: usize = 4;

/// A ranking position, 1 = best. The upstream export writes `0` for
/// "not ranking"; that sentinel is decoded to `None` at the ingest
/// boundary, so a `Rank` is always a real position.
pub type Rank = NonZeroU32;

/// Ranking positions for one keyword across the tracked sites, in roster
/// order: own site first, then the four competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankingSet {
    pub own: Option<Rank>,
    pub competitors: [Option<Rank>; COMPETITOR_COUNT],
}

/// Landing-page URLs parallel to [`RankingSet`]. The export writes `-` or
/// an empty cell for unranked sites; those decode to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSet {
    pub own: Option<String>,
    pub competitors: [Option<String>; COMPETITOR_COUNT],
}

/// One row of competitive keyword data, immutable once parsed.
///
/// Numeric fields arrive through the parse-or-zero coercion in
/// `serpgap-ingest`: a missing or unparseable cell is `0`, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// The search term. Non-empty.
    pub keyword: String,
    /// Free-text intent label, e.g. `"Commercial"` or `"Informational"`.
    pub intent: String,
    /// Monthly search volume.
    pub volume: u64,
    /// Keyword difficulty, 0–100, higher = harder to rank.
    pub difficulty: f64,
    /// Cost per click.
    pub cpc: Decimal,
    /// Advertiser competition intensity, 0–1.
    pub competition_density: f64,
    pub rankings: RankingSet,
    pub pages: PageSet,
    /// Total search-result count reported for the keyword.
    pub results: u64,
}

impl KeywordRecord {
    /// The four competitor ranks in roster order. Fixed ordering keeps
    /// downstream sorts reproducible.
    #[must_use]
    pub fn competitor_ranks(&self) -> [Option<Rank>; COMPETITOR_COUNT] {
        self.rankings.competitors
    }

    /// The own-site rank, if the site ranks at all.
    #[must_use]
    pub fn own_rank(&self) -> Option<Rank> {
        self.rankings.own
    }
}
