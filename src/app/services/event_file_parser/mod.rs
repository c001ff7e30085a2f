//! CE interchange file parser
//!
//! Distills a pipe-delimited CE event file into a single [`EventRecord`]:
//! the shipment identifier, the event code and event time, the header
//! creation time, and the file creation time recovered from the path stamp.
//!
//! # Architecture
//!
//! The parser is split into focused modules:
//! - `classifier`: line classification and record assembly
//! - `dates`: date stamp normalization and day arithmetic
//! - `fields`: positional access to delimited record fields
//! - `path_stamp`: creation date recovery from file paths
//! - `parser`: the file reading entry point
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use ce_event_analyzer::app::services::event_file_parser::parse_event_file;
//!
//! # fn main() -> ce_event_analyzer::Result<()> {
//! let record = parse_event_file(Path::new("ce_event.cis.20240105.dat"))?;
//! println!("shipment {} diff {} days", record.stt, record.diff_days());
//! # Ok(())
//! # }
//! ```
//!
//! [`EventRecord`]: crate::app::models::EventRecord

pub mod classifier;
pub mod dates;
pub mod fields;
pub mod parser;
pub mod path_stamp;

#[cfg(test)]
pub mod tests;

// Re-export main types for convenience
pub use classifier::{ClassifiedLines, build_record, classify};
pub use parser::parse_event_file;
