//! Command-line interface for flow-budget
//!
//! This module contains CLI argument parsing and configuration

pub mod args;

pub use args::Args;
