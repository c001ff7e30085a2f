//! Command-line argument definitions for the event file analyzer
//!
//! Defines the complete CLI interface using the clap derive API. Flags that
//! mirror configuration values are optional so that the layering in the
//! command layer can tell "explicitly set" apart from "use the config".

use crate::constants::MAX_PARALLEL_WORKERS;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the CIS event file analyzer
///
/// Scans directory trees of CIS export files, extracts shipment and event
/// records from each file, and reports per-event occurrence counts plus the
/// minimum file-creation-to-event time difference per shipment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ce-event-analyzer",
    version,
    about = "Analyze CIS event export files for shipment timing and event statistics",
    long_about = "Scans a directory tree of CIS event export files, parses the header, \
                  shipment and event records in each file, and reports per-event occurrence \
                  counts together with the minimum difference between file creation and \
                  event time for each shipment. Files that cannot be read or parsed are \
                  reported and skipped without aborting the scan."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Scan a directory tree of event files and report the results
    Scan(ScanArgs),
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Root directory to scan for event files
    ///
    /// Every file below this directory whose name contains a dot is treated
    /// as a candidate event file.
    #[arg(value_name = "PATH", help = "Root directory to scan for event files")]
    pub root: PathBuf,

    /// Event code whose records participate in minimum-diff tracking
    ///
    /// Defaults to the configured target event code (ICBK unless overridden
    /// in the configuration file).
    #[arg(
        short = 'e',
        long = "event-code",
        value_name = "CODE",
        help = "Event code to track for the minimum-diff report"
    )]
    pub event_code: Option<String>,

    /// Number of parallel workers
    ///
    /// Controls how many files are parsed concurrently. If not specified,
    /// uses the configured value.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of parallel workers for file parsing"
    )]
    pub workers: Option<usize>,

    /// Follow symbolic links while walking the scan root
    #[arg(long = "follow-links", help = "Follow symbolic links during the scan")]
    pub follow_links: bool,

    /// Perform a dry run without parsing any files
    ///
    /// Discovers candidate files and reports the count without opening them.
    /// Useful for previewing what a scan would cover.
    #[arg(long = "dry-run", help = "Discover files without parsing them")]
    pub dry_run: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for defaults. If not specified, looks for
    /// the per-user config at ~/.config/ce-event-analyzer/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the final report. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors and the report",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the scan report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the scan report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the scan report
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored summary
    Human,
    /// Semicolon-delimited report for spreadsheet import
    Delimited,
    /// JSON format for scripting
    Json,
}

impl ScanArgs {
    /// Validate the scan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(Error::configuration(format!(
                "Scan root does not exist: {}",
                self.root.display()
            )));
        }

        if !self.root.is_dir() {
            return Err(Error::configuration(format!(
                "Scan root is not a directory: {}",
                self.root.display()
            )));
        }

        if let Some(workers) = self.workers {
            if workers == 0 || workers > MAX_PARALLEL_WORKERS {
                return Err(Error::configuration(format!(
                    "Number of workers must be between 1 and {}",
                    MAX_PARALLEL_WORKERS
                )));
            }
        }

        if let Some(code) = &self.event_code {
            if code.trim().is_empty() {
                return Err(Error::configuration(
                    "Event code cannot be empty".to_string(),
                ));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if console progress output should be shown
    ///
    /// Suppressed in quiet mode and for machine-readable formats, which
    /// need a clean stdout.
    pub fn show_progress(&self) -> bool {
        !self.quiet && matches!(self.output_format, OutputFormat::Human)
    }
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            event_code: None,
            workers: None,
            follow_links: false,
            dry_run: false,
            config_file: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}
