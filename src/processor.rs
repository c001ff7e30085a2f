//! Main processing engine for event file scans.
//!
//! Orchestrates the complete scan workflow: candidate discovery, parallel
//! per-file parsing, and sequential aggregation in discovery order so that
//! results are deterministic regardless of task completion order.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task;
use tracing::{debug, warn};

use crate::app::models::{EventRecord, ScanStats};
use crate::app::services::aggregator::EventAggregator;
use crate::app::services::event_file_parser::parse_event_file;
use crate::app::services::file_scanner::FileScanner;
use crate::config::Config;
use crate::constants::PROGRESS_MIN_FILES;
use crate::{Error, Result};

/// Result of one complete scan run
#[derive(Debug)]
pub struct ScanOutcome {
    /// Bookkeeping counters for the run
    pub stats: ScanStats,
    /// Aggregated per-shipment and per-event results
    pub aggregator: EventAggregator,
}

/// Main processor for event directory scans
#[derive(Debug)]
pub struct ScanProcessor {
    root: PathBuf,
    config: Config,
    show_progress: bool,
}

impl ScanProcessor {
    /// Create a new scan processor for the given root directory
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self {
            root,
            config,
            show_progress: false,
        }
    }

    /// Enable or disable console progress output
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Main processing entry point
    pub async fn process(&self) -> Result<ScanOutcome> {
        let start_time = Instant::now();

        if self.show_progress {
            println!("{}", "Starting event file scan".bright_green().bold());
            println!("  {} {}", "Scan root:".bright_cyan(), self.root.display());
            println!(
                "  {} {}",
                "Target event:".bright_cyan(),
                self.config.scan.target_event_code.bright_white().bold()
            );
        }

        // Step 1: Discover candidate files
        if self.show_progress {
            println!("\n{}", "Discovering event files...".bright_yellow());
        }
        let scanner = FileScanner::new().with_follow_links(self.config.scan.follow_links);
        let files = scanner.scan(&self.root)?;

        if self.show_progress {
            println!(
                "  {} {} candidate files",
                "Found".bright_green(),
                files.len().to_string().bright_white().bold()
            );
        }

        let mut stats = ScanStats::new();
        stats.files_discovered = files.len();

        let mut aggregator = EventAggregator::new(&self.config.scan.target_event_code);

        if self.config.scan.dry_run {
            if self.show_progress {
                println!("\n{}", "Dry run - skipping file parsing".bright_green());
            }
            stats.elapsed = start_time.elapsed();
            return Ok(ScanOutcome { stats, aggregator });
        }

        if files.is_empty() {
            stats.elapsed = start_time.elapsed();
            return Ok(ScanOutcome { stats, aggregator });
        }

        // Step 2: Parse files with bounded parallelism
        if self.show_progress {
            println!("\n{}", "Parsing files...".bright_yellow());
        }
        let results = self.parse_files(&files).await?;

        // Step 3: Fold results in discovery order so minimum-diff ties and
        // log output are stable across runs
        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(record) => {
                    aggregator.check_consistency(&record);
                    aggregator.observe(&record);
                    stats.files_parsed += 1;
                }
                Err(Error::UnreadableFile { message, .. }) => {
                    warn!("Unreadable file {}: {}", path.display(), message);
                    stats.files_unreadable += 1;
                }
                Err(error) if error.is_per_file() => {
                    warn!("Malformed file {}: {}", path.display(), error);
                    stats.files_malformed += 1;
                }
                Err(error) => return Err(error),
            }
        }

        stats.elapsed = start_time.elapsed();
        debug!(
            "Scan complete: {} parsed, {} failed in {:.2}s",
            stats.files_parsed,
            stats.files_failed(),
            stats.elapsed.as_secs_f64()
        );

        Ok(ScanOutcome { stats, aggregator })
    }

    /// Parse all candidate files concurrently, returning per-file results
    /// in discovery order.
    async fn parse_files(&self, files: &[PathBuf]) -> Result<Vec<Result<EventRecord>>> {
        let workers = self.config.performance.workers.min(files.len()).max(1);
        debug!("Parsing {} files with {} workers", files.len(), workers);

        let progress = if self.show_progress && files.len() >= PROGRESS_MIN_FILES {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message("Parsing event files");
            Some(pb)
        } else {
            None
        };

        let semaphore = Arc::new(Semaphore::new(workers));

        let collected = stream::iter(files.iter().cloned().enumerate())
            .map(|(index, path)| {
                let semaphore = semaphore.clone();
                let progress = progress.clone();
                async move {
                    let _permit = semaphore.acquire().await.map_err(|e| {
                        Error::processing_interrupted(format!("worker pool closed: {}", e))
                    })?;

                    let parse_path = path.clone();
                    let result = task::spawn_blocking(move || parse_event_file(&parse_path))
                        .await
                        .map_err(|e| {
                            Error::processing_interrupted(format!(
                                "parse task for {} aborted: {}",
                                path.display(),
                                e
                            ))
                        })?;

                    if let Some(pb) = &progress {
                        pb.inc(1);
                    }

                    Ok::<_, Error>((index, result))
                }
            })
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        if let Some(pb) = progress {
            pb.finish_with_message("All event files parsed");
        }

        let mut indexed = Vec::with_capacity(collected.len());
        for item in collected {
            indexed.push(item?);
        }
        indexed.sort_by_key(|(index, _)| *index);

        Ok(indexed.into_iter().map(|(_, result)| result).collect())
    }
}
