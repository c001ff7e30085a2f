//! Command implementations for the event analyzer CLI
//!
//! Contains the command execution logic and the helpers shared between
//! commands. Each command is implemented in its own module.

pub mod scan;
pub mod shared;

use crate::app::models::ScanStats;
use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the event analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
/// The `scan` command walks a directory tree, parses every candidate event
/// file, and prints the aggregated report.
pub async fn run(args: Args) -> Result<ScanStats> {
    match args.command {
        Some(Commands::Scan(scan_args)) => scan::run_scan(scan_args).await,
        None => Err(Error::configuration("no command specified")),
    }
}
