//! # flow-budget - User-Timing Budget Scoring for Recorded Browser Sessions
//!
//! flow-budget scores a recorded page load or user flow against per-measure
//! performance budgets. Developers instrument their pages with
//! `performance.measure()` (or paired `performance.mark()` calls); the
//! browser records those as begin/end trace events. flow-budget rebuilds the
//! measured intervals from a finished trace, aggregates repeats of the same
//! measure, compares the worst one against its budget and folds the
//! overruns into a single score between 0 and 1.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────┐        ┌──────────────────┐
//! │  trace.json      │        │  budgets.json    │
//! │  (Chrome trace)  │        │  {name: ms}      │
//! └────────┬─────────┘        └────────┬─────────┘
//!          │ trace_data                │ budget
//!          ▼                           │
//! ┌─────────────────────────────────────────────────────────┐
//! │                   analysis (pure)                       │
//! │                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌─────────────┐  │
//! │  │ user_timing  │──▶│  interval_   │──▶│  budget_    │  │
//! │  │ filter+sort  │   │  builder     │   │  scorer     │◀─┼── BudgetTable
//! │  └──────────────┘   └──────────────┘   └──────┬──────┘  │
//! └───────────────────────────────────────────────┼─────────┘
//!                                                 ▼
//!                                  ┌──────────────────────────┐
//!                                  │ report (JSON / text)     │
//!                                  └──────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`trace_data`]: Parse Chrome Trace Event Format into [`trace_data::RawEvent`]s
//! - [`analysis`]: The scoring pipeline
//!   - `user_timing`: keep `blink.user_timing` events, drop renderer markers, order them
//!   - `interval_builder`: pair begin/end events into named intervals
//!   - `budget_scorer`: per-name statistics, penalties and the aggregate score
//! - [`budget`]: The budget table and its JSON loader
//! - [`report`]: Lighthouse-style audit JSON and a plain-text table
//! - [`cli`]: Command-line argument parsing
//! - [`domain`]: Timestamp newtype and error types
//!
//! ## Scoring
//!
//! For every measure name with a budget, the penalty is the relative overrun
//! of its worst occurrence. Penalties are weighted by each budget's share of
//! the summed budgets of all measures seen in the trace, and the score is
//! `max(1 - Σ weighted penalty, 0)`. Measures without a budget are reported
//! but never penalised.
//!
//! ## Typical Usage
//!
//! ```bash
//! flow-budget --budgets budgets.json trace.json
//! USER_FLOW_BUDGETS=budgets.json flow-budget --json trace.json
//! ```
//!
//! ```
//! use flow_budget::analysis::evaluate;
//! use flow_budget::budget::BudgetTable;
//! use flow_budget::trace_data::TraceData;
//!
//! let trace = TraceData::from_json_str(r#"{"traceEvents": [
//!     {"name": "task", "cat": "blink.user_timing", "ph": "b", "ts": 1000, "args": {}},
//!     {"name": "task", "cat": "blink.user_timing", "ph": "e", "ts": 3500, "args": {}}
//! ]}"#).unwrap();
//! let budgets = BudgetTable::new().with_budget("task", 2.0);
//!
//! let evaluation = evaluate(&trace.events, &budgets);
//! assert_eq!(evaluation.rows[0].max_duration_millis, 2.5);
//! assert_eq!(evaluation.score, 0.75);
//! ```

pub mod analysis;
pub mod budget;
pub mod cli;
pub mod domain;
pub mod report;
pub mod trace_data;
