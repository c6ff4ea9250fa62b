//! Command-line argument parsing.

use clap::Parser;

/// Ladle - a terminal browser for searching recipes by ingredient
#[derive(Parser, Debug, Clone)]
#[command(name = "ladle")]
#[command(version)]
#[command(about = "Search recipes by ingredient, scroll for more, favorite the keepers", long_about = None)]
pub struct Args {
    /// Run this search immediately on startup (e.g. "+eggs,-onions,flour")
    pub query: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Resolve the effective log level from the parsed arguments.
///
/// Inputs:
/// - `args`: Parsed command line
///
/// Output:
/// - `"debug"` when `--verbose` is set, otherwise the `--log-level` value.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
