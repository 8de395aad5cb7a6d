//! Competitive keyword-gap classification and scoring.
//!
//! Pure, stateless functions over slices of [`serpgap_core::KeywordRecord`]:
//! each call filters or ranks the input into one strategic view (top
//! opportunities, competitor gaps, competitive advantages, quick wins,
//! strategic priorities) or assigns a single display badge per record. The
//! aggregation shapes the CLI renders live in [`summary`]. Every predicate
//! and the score formula have exactly one definition here, so table badges
//! and category filters cannot drift apart.

pub mod classify;
pub mod score;
pub mod summary;

pub use classify::{
    badge, better_competitors, competitive_advantages, competitor_gaps, quick_wins,
    strategic_priorities, top_opportunities, worse_competitors, Badge,
};
pub use score::{opportunity_score, ScoredKeyword};
pub use summary::{intent_breakdown, CategorySummary, DashboardSummary, IntentSummary};
