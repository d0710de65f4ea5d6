//! CLI argument definitions

use crate::budget::BUDGETS_ENV_VAR;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "flow-budget",
    about = "Score recorded user flows against user-timing budgets",
    after_help = "\
EXAMPLES:
    flow-budget trace.json                          Report measures, no budgets
    flow-budget --budgets budgets.json trace.json   Score against budgets
    flow-budget --budgets b.json --min-score 0.9 *.json
                                                    Fail CI when any trace scores below 0.9"
)]
pub struct Args {
    /// Trace files to evaluate (Chrome trace JSON or a Lighthouse traces artifact)
    #[arg(value_name = "TRACE", required = true)]
    pub traces: Vec<PathBuf>,

    /// Budgets file: JSON object of measure name to milliseconds
    #[arg(short, long, value_name = "FILE", env = BUDGETS_ENV_VAR)]
    pub budgets: Option<PathBuf>,

    /// Print JSON audit reports instead of tables
    #[arg(long)]
    pub json: bool,

    /// Exit with a failure code when any trace scores below this value
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_options() {
        let args = Args::try_parse_from([
            "flow-budget",
            "--budgets",
            "b.json",
            "--json",
            "--min-score",
            "0.9",
            "-q",
            "a.json",
            "b.json",
        ])
        .unwrap();

        assert_eq!(args.traces, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(args.budgets, Some(PathBuf::from("b.json")));
        assert!(args.json);
        assert_eq!(args.min_score, Some(0.9));
        assert!(args.quiet);
    }

    #[test]
    fn test_budgets_flag_reads_environment_variable() {
        let command = <Args as clap::CommandFactory>::command();
        let budgets = command
            .get_arguments()
            .find(|arg| arg.get_id() == "budgets")
            .unwrap();
        assert_eq!(budgets.get_env(), Some(std::ffi::OsStr::new(BUDGETS_ENV_VAR)));
    }

    #[test]
    fn test_trace_is_required() {
        assert!(Args::try_parse_from(["flow-budget"]).is_err());
    }
}
