//! CE Event Analyzer Library
//!
//! A Rust library for scanning directory trees of CE event interchange files
//! and aggregating shipment event statistics.
//!
//! This library provides tools for:
//! - Discovering candidate event files beneath a root directory
//! - Parsing the fixed CE record format (header, shipment, event records)
//! - Normalizing embedded date stamps with silent sentinel recovery
//! - Tracking the minimum day-difference between file creation and a target
//!   event per shipment identifier
//! - Rendering delimited, human, and JSON reports

pub mod config;
pub mod constants;
pub mod processor;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod event_file_parser;
        pub mod file_scanner;
        pub mod report;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{EventRecord, ScanStats};
pub use app::services::aggregator::EventAggregator;
pub use config::Config;

/// Result type alias for the CE event analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CE event file processing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source file could not be read; the file is skipped, not fatal
    #[error("unreadable file '{path}': {message}")]
    UnreadableFile { path: String, message: String },

    /// A required record line or field is missing from a file
    #[error("malformed record in '{path}': {message}")]
    MalformedRecord { path: String, message: String },

    /// The path carries no embedded creation stamp
    #[error("malformed path '{path}': {message}")]
    MalformedPath { path: String, message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Processing interrupted
    #[error("processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unreadable-file error
    pub fn unreadable_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnreadableFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-record error
    pub fn malformed_record(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-path error
    pub fn malformed_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for errors that fail a single input file rather than the run
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::UnreadableFile { .. } | Self::MalformedRecord { .. } | Self::MalformedPath { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("failed to parse config file: {}", error),
        }
    }
}
