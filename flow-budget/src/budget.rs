//! Budget configuration
//!
//! A budgets file is a flat JSON object mapping measure names to their
//! maximum allowed duration in milliseconds:
//!
//! ```json
//! { "checkout": 250, "search-results": 800 }
//! ```
//!
//! A name missing from the table is unbudgeted, which is not the same as a
//! budget of `0`. The table is passed explicitly into scoring.

use crate::domain::BudgetError;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Environment variable the CLI falls back to for the budgets file path.
pub const BUDGETS_ENV_VAR: &str = "USER_FLOW_BUDGETS";

/// Per-name duration budgets in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BudgetTable {
    budgets: HashMap<String, f64>,
}

impl BudgetTable {
    /// An empty table: every measure is unbudgeted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a budgets file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BudgetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| BudgetError::ReadFailed { path: path.to_path_buf(), source })?;
        let table = Self::from_json_str(&content)?;
        info!("Loaded {} budgets from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse and validate budgets JSON held in memory.
    ///
    /// Negative and non-finite budgets are rejected here so the scorer
    /// never has to see them.
    pub fn from_json_str(content: &str) -> Result<Self, BudgetError> {
        let table: BudgetTable = serde_json::from_str(content)?;
        if let Some((name, &value)) =
            table.budgets.iter().find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(BudgetError::InvalidBudget { name: name.clone(), value });
        }
        Ok(table)
    }

    /// Set a budget (builder style).
    #[must_use]
    pub fn with_budget(mut self, name: impl Into<String>, millis: f64) -> Self {
        self.budgets.insert(name.into(), millis);
        self
    }

    /// Budget for `name`, or `None` when unbudgeted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.budgets.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

impl FromIterator<(String, f64)> for BudgetTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self { budgets: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_object() {
        let table = BudgetTable::from_json_str(r#"{"checkout": 250, "search": 0.5}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("checkout"), Some(250.0));
        assert_eq!(table.get("search"), Some(0.5));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_zero_budget_is_kept_distinct_from_missing() {
        let table = BudgetTable::from_json_str(r#"{"instant": 0}"#).unwrap();
        assert_eq!(table.get("instant"), Some(0.0));
    }

    #[test]
    fn test_negative_budget_is_rejected() {
        let err = BudgetTable::from_json_str(r#"{"checkout": -1}"#).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidBudget { ref name, .. } if name == "checkout"));
    }

    #[test]
    fn test_non_numeric_budget_is_a_parse_error() {
        let err = BudgetTable::from_json_str(r#"{"checkout": "fast"}"#).unwrap_err();
        assert!(matches!(err, BudgetError::ParseFailed(_)));
    }

    #[test]
    fn test_builder_and_collect() {
        let built = BudgetTable::new().with_budget("a", 1.0).with_budget("b", 2.0);
        let collected: BudgetTable =
            vec![("a".to_string(), 1.0), ("b".to_string(), 2.0)].into_iter().collect();
        assert_eq!(built, collected);
        assert!(BudgetTable::new().is_empty());
    }
}
