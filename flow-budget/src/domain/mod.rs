//! Domain model for flow-budget
//!
//! This module contains core domain types and errors that provide:
//! - Compile-time safety via newtype pattern
//! - Structured error handling for the collaborators around the scoring core

pub mod errors;
pub mod types;

pub use types::Timestamp;

pub use errors::{BudgetError, ReportError, TraceError};
