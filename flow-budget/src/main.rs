//! # flow-budget - Main Entry Point
//!
//! Loads a budgets file once, then for every trace given on the command line:
//! parse → evaluate → render. Reports go to stdout, diagnostics to stderr.
//!
//! Set `RUST_LOG=debug` to see how many events survive each pipeline stage.

use anyhow::{Context, Result};
use clap::Parser;
use flow_budget::analysis::evaluate;
use flow_budget::budget::{BudgetTable, BUDGETS_ENV_VAR};
use flow_budget::cli::Args;
use flow_budget::report::{render_table, AuditReport};
use flow_budget::trace_data::TraceData;
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_BUDGET_FAILED: i32 = 3;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(code) => code,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    let msg = err.to_string().to_lowercase();
    if msg.starts_with("invalid argument") {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

/// A report tagged with the trace it came from (multi-trace JSON output).
#[derive(Serialize)]
struct TraceReport<'a> {
    trace: &'a Path,
    #[serde(flatten)]
    report: &'a AuditReport,
}

fn load_budgets(path: Option<&Path>) -> Result<BudgetTable> {
    match path {
        Some(path) => BudgetTable::from_file(path)
            .with_context(|| format!("Failed to load budgets from {}", path.display())),
        None => {
            info!("No budgets file (--budgets or {BUDGETS_ENV_VAR}); every measure is unbudgeted");
            Ok(BudgetTable::new())
        }
    }
}

fn evaluate_trace(path: &Path, budgets: &BudgetTable) -> Result<AuditReport> {
    let trace = TraceData::from_file(path)
        .with_context(|| format!("Failed to load trace {}", path.display()))?;
    let evaluation = evaluate(&trace.events, budgets);
    Ok(AuditReport::from_evaluation(&evaluation))
}

fn write_json(traces: &[PathBuf], reports: &[AuditReport]) -> Result<()> {
    let stdout = std::io::stdout().lock();
    if let [report] = reports {
        report.write_json(stdout).context("Failed to write report")?;
    } else {
        let tagged: Vec<TraceReport<'_>> = traces
            .iter()
            .zip(reports)
            .map(|(trace, report)| TraceReport { trace, report })
            .collect();
        serde_json::to_writer_pretty(stdout, &tagged).context("Failed to write reports")?;
    }
    println!();
    Ok(())
}

fn run() -> Result<i32> {
    let args = Args::parse();

    if let Some(min_score) = args.min_score {
        if !(0.0..=1.0).contains(&min_score) {
            anyhow::bail!("Invalid argument: --min-score must be between 0 and 1, got {min_score}");
        }
    }

    let budgets = load_budgets(args.budgets.as_deref())?;

    let reports = args
        .traces
        .iter()
        .map(|path| evaluate_trace(path, &budgets))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        write_json(&args.traces, &reports)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        for (path, report) in args.traces.iter().zip(&reports) {
            if !args.quiet {
                writeln!(stdout, "trace: {}", path.display())?;
            }
            write!(stdout, "{}", render_table(report))?;
        }
    }

    if let Some(min_score) = args.min_score {
        let failing: Vec<&PathBuf> = args
            .traces
            .iter()
            .zip(&reports)
            .filter(|(_, report)| report.score < min_score)
            .map(|(path, _)| path)
            .collect();
        if !failing.is_empty() {
            for path in &failing {
                eprintln!("budget gate failed: {} scored below {min_score}", path.display());
            }
            return Ok(EXIT_BUDGET_FAILED);
        }
    }

    Ok(EXIT_SUCCESS)
}
