//! Configuration management and validation.
//!
//! Provides the layered configuration for scan runs: built-in defaults,
//! optionally overlaid by a TOML file (an explicit `--config` path or the
//! per-user default location), finally overridden by CLI flags in the
//! command layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{MAX_PARALLEL_WORKERS, default_workers};
use crate::{Error, Result};

/// Settings for the scan itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Event code whose records participate in minimum-diff tracking
    pub target_event_code: String,

    /// Follow symbolic links while walking the scan root
    pub follow_links: bool,

    /// Discover candidates and report counts without parsing
    pub dry_run: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            target_event_code: crate::constants::DEFAULT_TARGET_EVENT_CODE.to_string(),
            follow_links: false,
            dry_run: false,
        }
    }
}

/// Settings for parallel file parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSettings {
    /// Number of files parsed concurrently
    pub workers: usize,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

/// Settings for diagnostic output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Complete configuration for one scan run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan behavior
    pub scan: ScanSettings,

    /// Parallelism tuning
    pub performance: PerformanceSettings,

    /// Diagnostic output
    pub logging: LoggingSettings,
}

/// Default per-user configuration file location.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| Error::configuration("cannot determine user configuration directory"))?;
    Ok(base.join("ce-event-analyzer").join("config.toml"))
}

impl Config {
    /// Load configuration, preferring an explicit file over the default
    /// per-user location, over built-in defaults.
    ///
    /// An explicit path must be readable; the default location is optional
    /// and silently skipped when absent.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Ok(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("no configuration file found, using built-in defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        debug!("loading configuration from {}", path.display());

        let text = fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&text)?;
        Ok(config)
    }

    /// Check the configuration for values a scan cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.performance.workers == 0 || self.performance.workers > MAX_PARALLEL_WORKERS {
            return Err(Error::configuration(format!(
                "workers must be between 1 and {}, got {}",
                MAX_PARALLEL_WORKERS, self.performance.workers
            )));
        }

        if self.scan.target_event_code.trim().is_empty() {
            return Err(Error::configuration("target event code must not be empty"));
        }

        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}', expected one of error, warn, info, debug, trace",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Set the target event code
    pub fn with_target_event_code(mut self, code: impl Into<String>) -> Self {
        self.scan.target_event_code = code.into();
        self
    }

    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.performance.workers = workers;
        self
    }

    /// Follow symbolic links during the walk
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.scan.follow_links = follow_links;
        self
    }

    /// Stop after discovery without parsing
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.scan.dry_run = dry_run;
        self
    }
}
