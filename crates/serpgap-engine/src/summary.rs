//! Aggregation shapes for the dashboard views.
//!
//! Thin adapters over [`crate::classify`]: counts and summed volumes per
//! strategic category, plus a per-intent breakdown. No classification rule
//! lives here.

use std::collections::HashMap;

use serde::Serialize;
use serpgap_core::KeywordRecord;

use crate::classify::{
    competitive_advantages, competitor_gaps, quick_wins, strategic_priorities, top_opportunities,
};

/// Count and summed monthly volume for one strategic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub count: usize,
    pub total_volume: u64,
}

fn summarize<'a, I>(records: I) -> CategorySummary
where
    I: IntoIterator<Item = &'a KeywordRecord>,
{
    let mut count = 0;
    let mut total_volume = 0;
    for record in records {
        count += 1;
        total_volume += record.volume;
    }
    CategorySummary {
        count,
        total_volume,
    }
}

/// One summary per strategic category, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub record_count: usize,
    pub top_opportunities: CategorySummary,
    pub competitor_gaps: CategorySummary,
    pub competitive_advantages: CategorySummary,
    pub quick_wins: CategorySummary,
    pub strategic_priorities: CategorySummary,
}

impl DashboardSummary {
    /// Classify `records` and aggregate every category. `top_limit` caps
    /// the opportunities view the same way the table does.
    #[must_use]
    pub fn from_records(records: &[KeywordRecord], top_limit: usize) -> Self {
        Self {
            record_count: records.len(),
            top_opportunities: summarize(
                top_opportunities(records, top_limit)
                    .iter()
                    .map(|scored| scored.record),
            ),
            competitor_gaps: summarize(competitor_gaps(records)),
            competitive_advantages: summarize(competitive_advantages(records)),
            quick_wins: summarize(quick_wins(records)),
            strategic_priorities: summarize(strategic_priorities(records)),
        }
    }
}

/// Count and summed volume for one intent label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentSummary {
    pub intent: String,
    pub count: usize,
    pub total_volume: u64,
}

/// Group records by their free-text intent label.
///
/// Ordered by summed volume descending, ties broken by intent name so the
/// output is deterministic.
#[must_use]
pub fn intent_breakdown(records: &[KeywordRecord]) -> Vec<IntentSummary> {
    let mut by_intent: HashMap<&str, (usize, u64)> = HashMap::new();
    for record in records {
        let entry = by_intent.entry(record.intent.as_str()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += record.volume;
    }

    let mut out: Vec<IntentSummary> = by_intent
        .into_iter()
        .map(|(intent, (count, total_volume))| IntentSummary {
            intent: intent.to_string(),
            count,
            total_volume,
        })
        .collect();
    out.sort_by(|a, b| {
        b.total_volume
            .cmp(&a.total_volume)
            .then_with(|| a.intent.cmp(&b.intent))
    });
    out
}
