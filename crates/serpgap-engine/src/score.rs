//! Opportunity scoring.

use serde::Serialize;
use serpgap_core::KeywordRecord;

use crate::classify::better_competitors;

/// Weight added per competitor that outranks the own site.
const COMPETITOR_WEIGHT: f64 = 2.5;

/// A record paired with its transient opportunity score. The score is a
/// relative-ranking number for one classification call; it is never
/// persisted or compared across input sets.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredKeyword<'a> {
    pub record: &'a KeywordRecord,
    pub score: f64,
}

/// Compute the opportunity score for one record.
///
/// Four additive terms, each monotone on its own:
/// - volume, scaled down and capped at 10;
/// - inverse difficulty;
/// - own-position drag, only once the own site ranks past the top ten
///   (an unranked own site contributes nothing here; the competitor term
///   carries that case);
/// - 2.5 per competitor that outranks the own site.
///
/// The result is unbounded above.
#[must_use]
pub fn opportunity_score(record: &KeywordRecord) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let volume_score = (record.volume as f64 / 100.0).min(10.0);
    let difficulty_score = (100.0 - record.difficulty) / 10.0;
    let ranking_score = match record.own_rank() {
        Some(rank) if rank.get() > 10 => (f64::from(rank.get()) - 10.0) / 10.0,
        _ => 0.0,
    };
    #[allow(clippy::cast_precision_loss)]
    let competitor_score = better_competitors(record) as f64 * COMPETITOR_WEIGHT;

    volume_score + difficulty_score + ranking_score + competitor_score
}
