//! Plain-text rendering of an audit report for terminals and CI logs.

// Granularity exponents are tiny
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use super::audit::{AuditReport, ItemType, TableHeading, HEADINGS};
use crate::analysis::MetricRow;

const MISSING: &str = "-";
const COLUMN_GAP: &str = "  ";

/// Decimal places implied by a heading's granularity (0.01 → 2, 1 → 0).
fn decimals(granularity: f64) -> usize {
    (-granularity.log10()).round().max(0.0) as usize
}

fn format_number(value: f64, heading: &TableHeading) -> String {
    if value.is_nan() {
        return MISSING.to_string();
    }
    let number = match heading.granularity {
        Some(granularity) => format!("{value:.prec$}", prec = decimals(granularity)),
        None => format!("{value}"),
    };
    match heading.item_type {
        ItemType::Ms => format!("{number} ms"),
        ItemType::Text | ItemType::Numeric => number,
    }
}

fn format_cell(row: &MetricRow, heading: &TableHeading) -> String {
    match heading.key {
        "name" => row.name.clone(),
        "count" => row.count.to_string(),
        "maxDuration" => format_number(row.max_duration_millis, heading),
        "avgDuration" => format_number(row.avg_duration_millis, heading),
        "budget" => row.budget_millis.map_or_else(|| MISSING.to_string(), |b| format_number(b, heading)),
        "overrun" => format_number(row.overrun_millis, heading),
        "weightedPenalty" => format_number(row.weighted_penalty, heading),
        _ => MISSING.to_string(),
    }
}

/// Render the title, the details table and the summary line.
///
/// ```text
/// User flow budgets were overrun.
/// Name of time interval  Samples  Max duration  Average duration  Budget  Over budget  Penalty
/// checkout                     2      312.40 ms         280.10 ms  250 ms        62 ms    0.249
/// 0/1 metrics are within their budgets (Score: 0.75)
/// ```
#[must_use]
pub fn render_table(report: &AuditReport) -> String {
    let cells: Vec<Vec<String>> = report
        .details
        .items
        .iter()
        .map(|row| HEADINGS.iter().map(|h| format_cell(row, h)).collect())
        .collect();

    let widths: Vec<usize> = HEADINGS
        .iter()
        .enumerate()
        .map(|(col, h)| {
            cells.iter().map(|r| r[col].chars().count()).fold(h.text.chars().count(), usize::max)
        })
        .collect();

    let header: Vec<String> =
        HEADINGS.iter().zip(&widths).map(|(h, &w)| align(h.text, w, h.item_type)).collect();

    let mut lines =
        vec![report.title.to_string(), header.join(COLUMN_GAP).trim_end().to_string()];
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(HEADINGS.iter().zip(&widths))
            .map(|(cell, (h, &w))| align(cell, w, h.item_type))
            .collect();
        lines.push(line.join(COLUMN_GAP).trim_end().to_string());
    }
    lines.push(report.display_value.clone());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn align(text: &str, width: usize, item_type: ItemType) -> String {
    match item_type {
        ItemType::Text => format!("{text:<width$}"),
        ItemType::Numeric | ItemType::Ms => format!("{text:>width$}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{score_intervals, NamedInterval};
    use crate::budget::BudgetTable;

    fn interval(name: &str, start: f64, duration_millis: f64) -> NamedInterval {
        NamedInterval {
            name: name.to_string(),
            start_time_millis: start,
            end_time_millis: start + duration_millis,
            duration_millis,
        }
    }

    #[test]
    fn test_decimals_from_granularity() {
        assert_eq!(decimals(0.01), 2);
        assert_eq!(decimals(0.001), 3);
        assert_eq!(decimals(1.0), 0);
    }

    #[test]
    fn test_render_contains_rows_and_summary() {
        let budgets = BudgetTable::new().with_budget("checkout", 250.0);
        let evaluation = score_intervals(
            &[interval("checkout", 0.0, 312.4), interval("search", 0.0, 12.345)],
            &budgets,
        );
        let text = render_table(&AuditReport::from_evaluation(&evaluation));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "User flow budgets were overrun.");
        assert!(lines[1].starts_with("Name of time interval"));
        assert!(lines[2].starts_with("checkout"));
        assert!(lines[2].contains("312.40 ms"));
        assert!(lines[2].contains("250 ms"));
        assert!(lines[2].contains("62 ms"));
        assert!(lines[3].starts_with("search"));
        // 12.345 is stored as 12.34499...
        assert!(lines[3].contains("12.34 ms"));
        assert_eq!(lines[4], evaluation.summary());
    }

    #[test]
    fn test_missing_values_render_as_dash() {
        let orphan = NamedInterval {
            name: "task".to_string(),
            start_time_millis: f64::NAN,
            end_time_millis: 1.0,
            duration_millis: f64::NAN,
        };
        let evaluation = score_intervals(&[orphan], &BudgetTable::new());
        let text = render_table(&AuditReport::from_evaluation(&evaluation));
        let row = text.lines().nth(2).unwrap();

        assert!(row.starts_with("task"));
        assert!(row.contains(" - "));
    }

    #[test]
    fn test_empty_report_has_header_and_summary_only() {
        let evaluation = score_intervals(&[], &BudgetTable::new());
        let text = render_table(&AuditReport::from_evaluation(&evaluation));
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("0/0 metrics are within their budgets (Score: 1.00)\n"));
    }
}
