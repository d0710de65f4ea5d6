//! Structured error types for flow-budget
//!
//! Using thiserror for automatic Display implementation and error chaining.
//! Only the collaborators around the scoring core can fail: reading a trace,
//! loading a budget file and writing a report. The core itself is total.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace file {path}: {source}")]
    ReadFailed { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse trace data: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Failed to read budgets file {path}: {source}")]
    ReadFailed { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse budgets: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Invalid budget for \"{name}\": {value} (must be a finite, non-negative number of milliseconds)")]
    InvalidBudget { name: String, value: f64 },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_budget_display() {
        let err = BudgetError::InvalidBudget { name: "checkout".to_string(), value: -5.0 };
        assert!(err.to_string().contains("\"checkout\""));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_trace_read_error_mentions_path() {
        let err = TraceError::ReadFailed {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
