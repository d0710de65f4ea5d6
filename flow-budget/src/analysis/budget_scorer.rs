//! Budget scoring for reconstructed intervals.
//!
//! Intervals are grouped by name. Each group's worst duration is compared
//! with its budget and the overrun, normalised by the budget, becomes the
//! group's penalty. Penalties are weighted by each budget's share of the
//! total budget of all observed names and subtracted from a perfect score
//! of 1.
//!
//! ```text
//! overrun          = max(max_duration - budget, 0)
//! penalty          = overrun / budget
//! weighted_penalty = penalty * budget / total_relevant_budget
//! score            = max(1 - sum(weighted_penalty), 0)
//! ```
//!
//! Every division is guarded: a zero budget gives a zero penalty and a zero
//! total leaves penalties unweighted.

// Averages divide by a usize count; budgets are compared against an exact 0
#![allow(clippy::cast_precision_loss, clippy::float_cmp)]

use crate::analysis::interval_builder::NamedInterval;
use crate::budget::BudgetTable;
use serde::Serialize;
use std::collections::HashMap;

/// Scoring result for one measure name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    pub name: String,

    /// Number of intervals with this name, incomplete ones included.
    pub count: usize,

    /// Intervals whose begin was never seen. Counted, but not measured.
    pub incomplete: usize,

    /// Worst complete duration. `NaN` when every interval is incomplete.
    #[serde(rename = "maxDuration")]
    pub max_duration_millis: f64,

    #[serde(rename = "avgDuration")]
    pub avg_duration_millis: f64,

    /// `None` when the name is unbudgeted.
    #[serde(rename = "budget")]
    pub budget_millis: Option<f64>,

    #[serde(rename = "overrun")]
    pub overrun_millis: f64,

    pub penalty: f64,

    pub weighted_penalty: f64,
}

impl MetricRow {
    #[must_use]
    pub fn is_within_budget(&self) -> bool {
        self.overrun_millis <= 0.0
    }
}

/// Output of a full scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEvaluation {
    /// One row per distinct name, in order of first appearance.
    pub rows: Vec<MetricRow>,
    pub score: f64,
    /// Sum of the budgets of all observed names (unbudgeted names add 0).
    pub total_relevant_budget: f64,
    pub count_budget_overruns: usize,
}

impl BudgetEvaluation {
    /// Rows that did not overrun their budget.
    #[must_use]
    pub fn within_budget_count(&self) -> usize {
        self.rows.len() - self.count_budget_overruns
    }

    /// Human readable one-liner, e.g.
    /// `2/3 metrics are within their budgets (Score: 0.75)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}/{} metrics are within their budgets (Score: {:.2})",
            self.within_budget_count(),
            self.rows.len(),
            self.score
        )
    }
}

/// Durations collected for one name.
#[derive(Debug, Default)]
struct DurationGroup<'a> {
    name: &'a str,
    complete: Vec<f64>,
    incomplete: usize,
}

/// Group intervals by name, preserving first-seen order.
fn group_by_name(intervals: &[NamedInterval]) -> Vec<DurationGroup<'_>> {
    let mut groups: Vec<DurationGroup<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for interval in intervals {
        let position = *positions.entry(interval.name.as_str()).or_insert_with(|| {
            groups.push(DurationGroup { name: &interval.name, ..DurationGroup::default() });
            groups.len() - 1
        });
        let group = &mut groups[position];
        if interval.is_complete() {
            group.complete.push(interval.duration_millis);
        } else {
            group.incomplete += 1;
        }
    }

    groups
}

fn max_duration(durations: &[f64]) -> f64 {
    if durations.is_empty() {
        return f64::NAN;
    }
    durations.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn avg_duration(durations: &[f64]) -> f64 {
    if durations.is_empty() {
        return f64::NAN;
    }
    durations.iter().sum::<f64>() / durations.len() as f64
}

fn score_group(group: &DurationGroup<'_>, budget: Option<f64>, total_relevant_budget: f64) -> MetricRow {
    let max_duration_millis = max_duration(&group.complete);
    let avg_duration_millis = avg_duration(&group.complete);

    let overrun_millis = match budget {
        Some(budget) if !max_duration_millis.is_nan() => (max_duration_millis - budget).max(0.0),
        _ => 0.0,
    };

    let penalty = match budget {
        Some(budget) if budget != 0.0 => overrun_millis / budget,
        _ => 0.0,
    };

    let weighted_penalty = match budget {
        Some(budget) if total_relevant_budget != 0.0 => penalty * (budget / total_relevant_budget),
        _ => penalty,
    };

    MetricRow {
        name: group.name.to_string(),
        count: group.complete.len() + group.incomplete,
        incomplete: group.incomplete,
        max_duration_millis,
        avg_duration_millis,
        budget_millis: budget,
        overrun_millis,
        penalty,
        weighted_penalty,
    }
}

/// Score intervals against a budget table. Pure and total: empty input
/// yields no rows and a score of 1.
#[must_use]
pub fn score_intervals(intervals: &[NamedInterval], budgets: &BudgetTable) -> BudgetEvaluation {
    let groups = group_by_name(intervals);

    let total_relevant_budget: f64 =
        groups.iter().map(|g| budgets.get(g.name).unwrap_or(0.0)).sum();

    let rows: Vec<MetricRow> = groups
        .iter()
        .map(|g| score_group(g, budgets.get(g.name), total_relevant_budget))
        .collect();

    let count_budget_overruns = rows.iter().filter(|r| !r.is_within_budget()).count();

    // Floor only, the ceiling is left alone.
    let penalty_sum: f64 = rows.iter().map(|r| r.weighted_penalty).sum();
    let score = (1.0 - penalty_sum).max(0.0);

    BudgetEvaluation { rows, score, total_relevant_budget, count_budget_overruns }
}
