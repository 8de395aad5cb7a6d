//! End-to-end classification checks over the built-in sample dataset.

use serpgap_engine::{
    badge, better_competitors, competitive_advantages, competitor_gaps, intent_breakdown,
    quick_wins, strategic_priorities, top_opportunities, worse_competitors, Badge,
    DashboardSummary,
};
use serpgap_ingest::sample_records;

#[test]
fn competitor_counts_stay_within_slot_bounds() {
    for record in sample_records() {
        assert!(better_competitors(&record) <= 4, "keyword {}", record.keyword);
        assert!(worse_competitors(&record) <= 4, "keyword {}", record.keyword);
    }
}

#[test]
fn unranked_own_site_counts_every_competitor_as_worse() {
    for record in sample_records() {
        if record.own_rank().is_none() {
            assert_eq!(worse_competitors(&record), 4, "keyword {}", record.keyword);
        }
    }
}

#[test]
fn sample_badges_land_where_expected() {
    let records = sample_records();
    let badge_of = |keyword: &str| {
        let record = records
            .iter()
            .find(|r| r.keyword == keyword)
            .unwrap_or_else(|| panic!("missing sample keyword {keyword}"));
        badge(record)
    };

    assert_eq!(badge_of("marketing analytics dashboard"), Some(Badge::Advantage));
    assert_eq!(badge_of("seo audit tool"), Some(Badge::Advantage));
    assert_eq!(badge_of("keyword rank tracker"), Some(Badge::Advantage));
    assert_eq!(badge_of("competitor analysis tool"), Some(Badge::CriticalGap));
    assert_eq!(badge_of("backlink checker"), Some(Badge::CriticalGap));
    assert_eq!(badge_of("email automation software"), Some(Badge::CriticalGap));
    assert_eq!(badge_of("ad roi calculator"), Some(Badge::QuickWin));
    assert_eq!(badge_of("landing page builder"), Some(Badge::QuickWin));
    assert_eq!(badge_of("social media scheduler"), Some(Badge::Opportunity));
    assert_eq!(badge_of("social media calendar"), Some(Badge::Opportunity));
    assert_eq!(badge_of("b2b lead generation"), None);
    assert_eq!(badge_of("crm for small business"), None);
}

#[test]
fn top_opportunities_only_contains_outranked_keywords() {
    let records = sample_records();
    for scored in top_opportunities(&records, records.len()) {
        assert!(
            better_competitors(scored.record) >= 1,
            "keyword {}",
            scored.record.keyword
        );
    }
}

#[test]
fn top_opportunities_is_sorted_and_stable() {
    let records = sample_records();
    let top = top_opportunities(&records, records.len());
    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // The two equal-signal rows keep their input order.
    let scheduler = top
        .iter()
        .position(|s| s.record.keyword == "social media scheduler")
        .expect("scheduler in top opportunities");
    let calendar = top
        .iter()
        .position(|s| s.record.keyword == "social media calendar")
        .expect("calendar in top opportunities");
    assert!((top[scheduler].score - top[calendar].score).abs() < f64::EPSILON);
    assert!(scheduler < calendar);
}

#[test]
fn competitor_gaps_is_the_exact_predicate_subset_in_input_order() {
    let records = sample_records();
    let gaps = competitor_gaps(&records);

    let expected: Vec<&str> = records
        .iter()
        .filter(|r| better_competitors(r) >= 2)
        .map(|r| r.keyword.as_str())
        .collect();
    let actual: Vec<&str> = gaps.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(actual, expected);
    assert!(!expected.is_empty());
}

#[test]
fn volume_sorted_views_are_non_increasing() {
    let records = sample_records();
    for view in [
        competitive_advantages(&records),
        quick_wins(&records),
        strategic_priorities(&records),
    ] {
        for pair in view.windows(2) {
            assert!(pair[0].volume >= pair[1].volume);
        }
    }
}

#[test]
fn advantage_view_applies_the_volume_floor_the_badge_skips() {
    let records = sample_records();
    let advantages = competitive_advantages(&records);
    assert!(advantages.iter().all(|r| r.volume >= 40));

    // Badged as an advantage, below the view's volume floor.
    let tracker = records
        .iter()
        .find(|r| r.keyword == "keyword rank tracker")
        .expect("tracker row");
    assert_eq!(badge(tracker), Some(Badge::Advantage));
    assert!(!advantages.iter().any(|r| r.keyword == tracker.keyword));
}

#[test]
fn strategic_priorities_require_an_absent_own_rank() {
    let records = sample_records();
    for record in strategic_priorities(&records) {
        assert!(record.own_rank().is_none());
        assert!(record.volume >= 100);
    }
}

#[test]
fn classification_twice_yields_identical_output() {
    let records = sample_records();

    let first: Vec<(String, f64)> = top_opportunities(&records, 5)
        .iter()
        .map(|s| (s.record.keyword.clone(), s.score))
        .collect();
    let second: Vec<(String, f64)> = top_opportunities(&records, 5)
        .iter()
        .map(|s| (s.record.keyword.clone(), s.score))
        .collect();
    assert_eq!(first, second);

    assert_eq!(competitor_gaps(&records), competitor_gaps(&records));
    assert_eq!(quick_wins(&records), quick_wins(&records));
    assert_eq!(intent_breakdown(&records), intent_breakdown(&records));
}

#[test]
fn dashboard_summary_matches_the_underlying_views() {
    let records = sample_records();
    let summary = DashboardSummary::from_records(&records, 10);

    assert_eq!(summary.record_count, records.len());
    assert_eq!(summary.competitor_gaps.count, competitor_gaps(&records).len());
    assert_eq!(
        summary.quick_wins.total_volume,
        quick_wins(&records).iter().map(|r| r.volume).sum::<u64>()
    );
}
