//! Report generation
//!
//! Turns a [`BudgetEvaluation`](crate::analysis::BudgetEvaluation) into
//! something a person or a tool can read:
//! - [`AuditReport`]: Lighthouse-style audit JSON with a details table
//! - [`render_table`]: aligned plain text for the terminal

pub mod audit;
pub mod table;

pub use audit::{AuditReport, ItemType, TableHeading, HEADINGS};
pub use table::render_table;
