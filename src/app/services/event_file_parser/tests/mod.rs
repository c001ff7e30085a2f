//! Test fixtures shared across the event file parser tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;


/// Well formed file content carrying one record of each kind
pub fn create_test_event_content() -> String {
    [
        "CEHEADER02_PRJX|20240105083000|EXPORTER|1",
        "CESHP___04_7001|REF-7001|2|NORM",
        "CEEVTSHP04_EV1|ICBK|HAM|DE|A|B|C|D|20240101120000|0",
    ]
    .join("\n")
}

/// Helper to create a stamped event file inside a scratch directory
pub fn create_event_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
