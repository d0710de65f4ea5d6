//! Audit report: the structured result handed to renderers.
//!
//! Mirrors the shape of a Lighthouse numeric audit with a table of details,
//! so the JSON can be dropped into existing tooling unchanged.

use crate::analysis::{BudgetEvaluation, MetricRow};
use crate::domain::ReportError;
use serde::Serialize;
use std::io::Write;

pub const AUDIT_ID: &str = "user-flow-metrics";
pub const PASS_TITLE: &str = "User flow budgets were met.";
pub const FAIL_TITLE: &str = "User flow budgets were overrun.";

/// How a renderer should treat a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Text,
    Numeric,
    Ms,
}

/// One column of the details table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHeading {
    /// Key of the `MetricRow` JSON field shown in this column
    pub key: &'static str,
    pub item_type: ItemType,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_unit: Option<&'static str>,
}

const fn heading(key: &'static str, item_type: ItemType, text: &'static str) -> TableHeading {
    TableHeading { key, item_type, text, granularity: None, display_unit: None }
}

pub const HEADINGS: [TableHeading; 7] = [
    heading("name", ItemType::Text, "Name of time interval"),
    heading("count", ItemType::Numeric, "Samples"),
    TableHeading {
        granularity: Some(0.01),
        ..heading("maxDuration", ItemType::Ms, "Max duration")
    },
    TableHeading {
        granularity: Some(0.01),
        ..heading("avgDuration", ItemType::Ms, "Average duration")
    },
    heading("budget", ItemType::Ms, "Budget"),
    TableHeading {
        granularity: Some(1.0),
        display_unit: Some("ms"),
        ..heading("overrun", ItemType::Ms, "Over budget")
    },
    TableHeading {
        granularity: Some(0.001),
        ..heading("weightedPenalty", ItemType::Numeric, "Penalty")
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDetails {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub headings: &'static [TableHeading],
    pub items: Vec<MetricRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub id: &'static str,
    pub title: &'static str,
    pub score: f64,
    pub score_display_mode: &'static str,
    /// The summary line, e.g. `1/2 metrics are within their budgets (Score: 0.50)`
    pub display_value: String,
    pub details: TableDetails,
}

impl AuditReport {
    #[must_use]
    pub fn from_evaluation(evaluation: &BudgetEvaluation) -> Self {
        let title = if evaluation.count_budget_overruns == 0 { PASS_TITLE } else { FAIL_TITLE };
        Self {
            id: AUDIT_ID,
            title,
            score: evaluation.score,
            score_display_mode: "numeric",
            display_value: evaluation.summary(),
            details: TableDetails { kind: "table", headings: &HEADINGS, items: evaluation.rows.clone() },
        }
    }

    /// Write the report as pretty JSON. `NaN` durations and missing budgets
    /// come out as `null`.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
