//! Built-in sample dataset.
//!
//! A small keyword table for the `--sample` CLI flag and for tests. The
//! rows are chosen to exercise every strategic category, including the
//! edge cases (unranked own site, unranked competitors, overlapping
//! category predicates).

use rust_decimal::Decimal;
use serpgap_core::{KeywordRecord, PageSet, Rank, RankingSet, SiteConfig, SiteRoster};

const SITE_DOMAINS: [&str; 5] = [
    "lumenmetrics.io",
    "rankscope.com",
    "searchlight.app",
    "marketpulse.io",
    "optifunnel.com",
];

/// The roster matching [`sample_records`]: own site first, then the four
/// competitors in column order.
#[must_use]
pub fn sample_roster() -> SiteRoster {
    let site = |name: &str, domain: &str| SiteConfig {
        name: name.to_string(),
        domain: Some(domain.to_string()),
        notes: None,
    };

    SiteRoster {
        own: site("Lumen Metrics", SITE_DOMAINS[0]),
        competitors: vec![
            site("RankScope", SITE_DOMAINS[1]),
            site("Searchlight", SITE_DOMAINS[2]),
            site("MarketPulse", SITE_DOMAINS[3]),
            site("OptiFunnel", SITE_DOMAINS[4]),
        ],
    }
}

/// In-memory sample keyword table. Deterministic: every call returns the
/// same rows in the same order.
#[must_use]
pub fn sample_records() -> Vec<KeywordRecord> {
    vec![
        // Own site dominates a high-volume term.
        record("marketing analytics dashboard", "Commercial", 320, 48.0, 412, 0.72, [2, 0, 14, 0, 0], 2_400_000),
        // Unranked own site, two competitors ranking: critical gap and a
        // strategic priority at the same time.
        record("competitor analysis tool", "Commercial", 150, 50.0, 389, 0.64, [0, 4, 7, 0, 0], 1_850_000),
        // One competitor ahead of a decent own position.
        record("seo audit tool", "Commercial", 60, 30.0, 276, 0.55, [5, 3, 0, 8, 12], 980_000),
        // Every site unranked except the volume is there for the taking.
        record("ad roi calculator", "Informational", 70, 25.0, 134, 0.31, [0, 0, 0, 0, 0], 410_000),
        // Own site buried past page two on an easy term.
        record("landing page builder", "Commercial", 90, 35.0, 522, 0.81, [24, 30, 0, 0, 41], 3_100_000),
        // Two competitors ahead while the own site sits past 30; the gap
        // outranks the quick-win read of the same row.
        record("backlink checker", "Commercial", 60, 38.0, 298, 0.58, [35, 12, 28, 40, 0], 760_000),
        // Mid-table everywhere: no category claims it.
        record("b2b lead generation", "Commercial", 400, 60.0, 615, 0.88, [15, 20, 30, 0, 0], 5_200_000),
        // Heavy head term where three competitors beat a weak own position.
        record("email automation software", "Commercial", 5000, 62.0, 710, 0.92, [18, 2, 5, 9, 0], 12_400_000),
        // Nobody ranks, volume clears the priority floor, difficulty does
        // not clear the quick-win ceiling.
        record("crm for small business", "Commercial", 150, 55.0, 480, 0.77, [0, 0, 0, 0, 0], 2_900_000),
        // Equal-signal pair: same volume, difficulty, and rankings, so
        // derived orderings must keep these two in input order.
        record("social media scheduler", "Transactional", 110, 33.0, 205, 0.47, [12, 6, 0, 0, 0], 1_150_000),
        record("social media calendar", "Transactional", 110, 33.0, 205, 0.44, [12, 6, 0, 0, 0], 1_020_000),
        // Top-ten own rank with three empty competitor slots but volume
        // under the advantage floor.
        record("keyword rank tracker", "Informational", 30, 22.0, 158, 0.29, [9, 1, 0, 0, 0], 240_000),
    ]
}

fn record(
    keyword: &str,
    intent: &str,
    volume: u64,
    difficulty: f64,
    cpc_cents: i64,
    competition_density: f64,
    ranks: [u32; 5],
    results: u64,
) -> KeywordRecord {
    let rankings = RankingSet {
        own: Rank::new(ranks[0]),
        competitors: [
            Rank::new(ranks[1]),
            Rank::new(ranks[2]),
            Rank::new(ranks[3]),
            Rank::new(ranks[4]),
        ],
    };

    let slug = keyword.replace(' ', "-");
    let page = |idx: usize, rank: Option<Rank>| rank.map(|_| format!("https://{}/{slug}", SITE_DOMAINS[idx]));

    let pages = PageSet {
        own: page(0, rankings.own),
        competitors: [
            page(1, rankings.competitors[0]),
            page(2, rankings.competitors[1]),
            page(3, rankings.competitors[2]),
            page(4, rankings.competitors[3]),
        ],
    };

    KeywordRecord {
        keyword: keyword.to_string(),
        intent: intent.to_string(),
        volume,
        difficulty,
        cpc: Decimal::new(cpc_cents, 2),
        competition_density,
        rankings,
        pages,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_deterministic() {
        assert_eq!(sample_records(), sample_records());
    }

    #[test]
    fn sample_roster_matches_column_order() {
        let roster = sample_roster();
        assert_eq!(
            roster.site_names(),
            vec!["Lumen Metrics", "RankScope", "Searchlight", "MarketPulse", "OptiFunnel"]
        );
    }

    #[test]
    fn ranked_sites_carry_pages() {
        for record in sample_records() {
            assert_eq!(record.rankings.own.is_some(), record.pages.own.is_some());
            for (rank, page) in record.rankings.competitors.iter().zip(&record.pages.competitors) {
                assert_eq!(rank.is_some(), page.is_some(), "keyword {}", record.keyword);
            }
        }
    }
}
