//! Scoring pipeline for user-timing budgets
//!
//! This module contains the pure logic of the crate, separated from trace
//! loading and report rendering:
//!
//! ```text
//! RawEvent[] ──► user_timing ──► interval_builder ──► budget_scorer
//!                (filter+sort)   (begin/end pairs)    (rows + score)
//! ```
//!
//! Nothing here performs I/O or can fail. Independent runs share no state
//! and may be evaluated from different threads.

pub mod budget_scorer;
pub mod interval_builder;
pub mod user_timing;

pub use budget_scorer::{score_intervals, BudgetEvaluation, MetricRow};
pub use interval_builder::{build_intervals, NamedInterval};
pub use user_timing::{is_user_timing, select_user_timings};

use crate::budget::BudgetTable;
use crate::trace_data::RawEvent;

/// Run the whole pipeline over a finished capture.
#[must_use]
pub fn evaluate(events: &[RawEvent], budgets: &BudgetTable) -> BudgetEvaluation {
    let intervals = build_intervals(select_user_timings(events));
    score_intervals(&intervals, budgets)
}
