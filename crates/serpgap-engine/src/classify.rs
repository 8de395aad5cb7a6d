//! Strategic classification of keyword records.
//!
//! Every function here is pure and total: no mutation of the input, no
//! errors, identical output for identical input. The sorted views use
//! stable sorts, so records with equal keys keep their input order.

use std::fmt;

use serde::Serialize;
use serpgap_core::KeywordRecord;

use crate::score::{opportunity_score, ScoredKeyword};

const GAP_MIN_BETTER: usize = 2;
const ADVANTAGE_MAX_OWN_RANK: u32 = 10;
const ADVANTAGE_MIN_WORSE: usize = 3;
const ADVANTAGE_MIN_VOLUME: u64 = 40;
const QUICK_WIN_MIN_VOLUME: u64 = 50;
const QUICK_WIN_MAX_DIFFICULTY: f64 = 40.0;
const QUICK_WIN_PUSH_RANK: u32 = 20;
const PRIORITY_MIN_VOLUME: u64 = 100;

/// Count competitors that outrank the own site for this keyword.
///
/// An unranked competitor never counts. When the own site is unranked,
/// every ranking competitor counts.
#[must_use]
pub fn better_competitors(record: &KeywordRecord) -> usize {
    let own = record.own_rank();
    record
        .competitor_ranks()
        .into_iter()
        .filter(|&rank| match (rank, own) {
            (Some(c), Some(s)) => c < s,
            (Some(_), None) => true,
            (None, _) => false,
        })
        .count()
}

/// Count competitors the own site outranks for this keyword.
///
/// An unranked competitor always counts. When the own site is unranked,
/// ranking competitors count here as well as in [`better_competitors`];
/// the advantage views additionally require a top-ten own rank, which
/// keeps that double-count out of them.
#[must_use]
pub fn worse_competitors(record: &KeywordRecord) -> usize {
    let own = record.own_rank();
    record
        .competitor_ranks()
        .into_iter()
        .filter(|&rank| match (rank, own) {
            (None, _) => true,
            (Some(c), Some(s)) => c > s,
            (Some(_), None) => true,
        })
        .count()
}

/// Own site ranks top-ten and most competitors sit below it.
fn holds_top_position(record: &KeywordRecord) -> bool {
    matches!(record.own_rank(), Some(rank) if rank.get() <= ADVANTAGE_MAX_OWN_RANK)
        && worse_competitors(record) >= ADVANTAGE_MIN_WORSE
}

/// Decent volume, low difficulty, and an own position that is absent or
/// buried past the second page.
fn is_quick_win(record: &KeywordRecord) -> bool {
    record.volume >= QUICK_WIN_MIN_VOLUME
        && record.difficulty <= QUICK_WIN_MAX_DIFFICULTY
        && record
            .own_rank()
            .is_none_or(|rank| rank.get() > QUICK_WIN_PUSH_RANK)
}

/// Keywords where at least one competitor outranks the own site, scored
/// and ordered best-first.
///
/// The sort is stable and descending by score: records with equal scores
/// keep their relative input order. At most `limit` records are returned.
#[must_use]
pub fn top_opportunities(records: &[KeywordRecord], limit: usize) -> Vec<ScoredKeyword<'_>> {
    let mut scored: Vec<ScoredKeyword<'_>> = records
        .iter()
        .filter(|r| better_competitors(r) >= 1)
        .map(|record| ScoredKeyword {
            record,
            score: opportunity_score(record),
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Keywords where two or more competitors outrank the own site. Input
/// order is preserved; callers slice as needed.
#[must_use]
pub fn competitor_gaps(records: &[KeywordRecord]) -> Vec<&KeywordRecord> {
    records
        .iter()
        .filter(|r| better_competitors(r) >= GAP_MIN_BETTER)
        .collect()
}

/// Keywords the own site already holds: top-ten own rank, at least three
/// competitors below, and volume worth defending. Ordered by volume,
/// largest first.
#[must_use]
pub fn competitive_advantages(records: &[KeywordRecord]) -> Vec<&KeywordRecord> {
    let mut out: Vec<&KeywordRecord> = records
        .iter()
        .filter(|r| holds_top_position(r) && r.volume >= ADVANTAGE_MIN_VOLUME)
        .collect();
    out.sort_by(|a, b| b.volume.cmp(&a.volume));
    out
}

/// Low-difficulty keywords with real volume where the own site has no
/// position worth keeping. Ordered by volume, largest first.
#[must_use]
pub fn quick_wins(records: &[KeywordRecord]) -> Vec<&KeywordRecord> {
    let mut out: Vec<&KeywordRecord> = records.iter().filter(|r| is_quick_win(r)).collect();
    out.sort_by(|a, b| b.volume.cmp(&a.volume));
    out
}

/// High-volume keywords the own site does not rank for at all. Ordered by
/// volume, largest first.
#[must_use]
pub fn strategic_priorities(records: &[KeywordRecord]) -> Vec<&KeywordRecord> {
    let mut out: Vec<&KeywordRecord> = records
        .iter()
        .filter(|r| r.volume >= PRIORITY_MIN_VOLUME && r.own_rank().is_none())
        .collect();
    out.sort_by(|a, b| b.volume.cmp(&a.volume));
    out
}

/// Single-label classification for table display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Advantage,
    CriticalGap,
    QuickWin,
    Opportunity,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Advantage => write!(f, "Advantage"),
            Badge::CriticalGap => write!(f, "Critical Gap"),
            Badge::QuickWin => write!(f, "Quick Win"),
            Badge::Opportunity => write!(f, "Opportunity"),
        }
    }
}

/// Assign at most one badge to a record.
///
/// The categories overlap, so the checks run in a fixed priority order and
/// the first match wins: Advantage, then Critical Gap, then Quick Win,
/// then Opportunity. The Advantage badge carries no volume floor; that
/// floor applies only to the [`competitive_advantages`] view.
#[must_use]
pub fn badge(record: &KeywordRecord) -> Option<Badge> {
    if holds_top_position(record) {
        return Some(Badge::Advantage);
    }
    if better_competitors(record) >= GAP_MIN_BETTER {
        return Some(Badge::CriticalGap);
    }
    if is_quick_win(record) {
        return Some(Badge::QuickWin);
    }
    if better_competitors(record) >= 1 {
        return Some(Badge::Opportunity);
    }
    None
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
