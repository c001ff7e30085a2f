//! Integration tests for the scan pipeline with synthetic event file trees
//!
//! These tests build complete directory trees of CIS-style export files and
//! drive the scan end to end, verifying aggregation results and the rendered
//! reports against known inputs.

use ce_event_analyzer::app::services::report;
use ce_event_analyzer::processor::ScanProcessor;
use ce_event_analyzer::Config;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a complete event file with the given record values
///
/// The file name must carry the `ce_event.cis.<stamp>.` marker so the
/// parser can recover the file creation date from the path.
fn write_event_file(
    dir: &Path,
    name: &str,
    stt: i64,
    event_code: &str,
    header_stamp: &str,
    event_stamp: &str,
) -> PathBuf {
    let content = [
        format!("CEHEADER02_PRJ1|{}|EXPORTER|1", header_stamp),
        format!("CESHP___04_{}|REF-{}|2|NORM", stt, stt),
        format!(
            "CEEVTSHP04_EV1|{}|HAM|DE|A|B|C|D|{}|0",
            event_code, event_stamp
        ),
    ]
    .join("\n");

    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Test scanning a nested tree with mixed event codes
///
/// Purpose: Validate the complete discovery, parsing, and aggregation flow
/// Benefit: Ensures per-event counts and shipment tracking line up with the
/// actual tree content
#[tokio::test]
async fn test_end_to_end_scan_counts_events() {
    let temp_dir = TempDir::new().unwrap();
    let batch_a = temp_dir.path().join("2024").join("batch-a");
    let batch_b = temp_dir.path().join("2024").join("batch-b");
    fs::create_dir_all(&batch_a).unwrap();
    fs::create_dir_all(&batch_b).unwrap();

    write_event_file(
        &batch_a,
        "ce_event.cis.20240105.1012.dat",
        1012,
        "ICBK",
        "20240105083000",
        "20240101120000",
    );
    write_event_file(
        &batch_b,
        "ce_event.cis.20240105.1013.dat",
        1013,
        "XYZ",
        "20240105083000",
        "20240103120000",
    );

    let processor = ScanProcessor::new(temp_dir.path().to_path_buf(), Config::default());
    let outcome = processor.process().await.unwrap();

    println!(
        "Scanned {} files, parsed {}",
        outcome.stats.files_discovered, outcome.stats.files_parsed
    );

    assert_eq!(outcome.stats.files_parsed, 2);
    assert_eq!(outcome.stats.files_failed(), 0);

    assert_eq!(outcome.aggregator.event_counts().get("ICBK"), Some(&1));
    assert_eq!(outcome.aggregator.event_counts().get("XYZ"), Some(&1));
    assert_eq!(outcome.aggregator.distinct_stt_count(), 2);

    // Only the ICBK shipment participates in minimum-diff tracking
    let tracked = outcome.aggregator.min_diff_records();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].stt, 1012);
    assert_eq!(tracked[0].diff_days(), 4);
}

/// Test that the smallest diff wins and ties keep the first record seen
///
/// Purpose: Validate minimum-diff tracking across several files for one shipment
/// Benefit: Ensures the retained record is deterministic in discovery order
#[tokio::test]
async fn test_minimum_diff_tracking_across_files() {
    let temp_dir = TempDir::new().unwrap();

    // Three records for shipment 2000: diffs 5, 3 and 3 days. File names
    // sort a < b < c, which fixes the discovery order.
    write_event_file(
        temp_dir.path(),
        "a.ce_event.cis.20240115.dat",
        2000,
        "ICBK",
        "20240115083000",
        "20240110120000",
    );
    write_event_file(
        temp_dir.path(),
        "b.ce_event.cis.20240110.dat",
        2000,
        "ICBK",
        "20240110083000",
        "20240107120000",
    );
    write_event_file(
        temp_dir.path(),
        "c.ce_event.cis.20240120.dat",
        2000,
        "ICBK",
        "20240120083000",
        "20240117120000",
    );

    let processor = ScanProcessor::new(temp_dir.path().to_path_buf(), Config::default());
    let outcome = processor.process().await.unwrap();

    assert_eq!(outcome.stats.files_parsed, 3);
    assert_eq!(outcome.aggregator.event_counts().get("ICBK"), Some(&3));

    let tracked = outcome.aggregator.min_diff_records();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].diff_days(), 3);

    // The first 3-day record wins the tie, not the later one
    assert_eq!(
        tracked[0].file_creation_time,
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    );
    assert_eq!(
        tracked[0].event_time,
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    );
}

/// Test that per-file failures never abort a scan
///
/// Purpose: Validate failure tolerance for unreadable and malformed files
/// Benefit: Ensures one bad export cannot take down a whole directory scan
#[tokio::test]
async fn test_scan_survives_bad_files() {
    let temp_dir = TempDir::new().unwrap();

    write_event_file(
        temp_dir.path(),
        "ce_event.cis.20240105.3001.dat",
        3001,
        "ICBK",
        "20240105083000",
        "20240101120000",
    );

    // Name without a dot: not a candidate, silently ignored
    fs::write(temp_dir.path().join("README"), "not an event file").unwrap();

    // Candidate without a creation stamp in the path
    fs::write(temp_dir.path().join("stray.dat"), "CEHEADER02_X|20240101|x").unwrap();

    // Candidate that cannot be decoded as text
    fs::write(
        temp_dir.path().join("ce_event.cis.20240105.bad.dat"),
        [0xC3u8, 0x28, 0xA0],
    )
    .unwrap();

    let processor = ScanProcessor::new(temp_dir.path().to_path_buf(), Config::default());
    let outcome = processor.process().await.unwrap();

    println!(
        "Discovered {} candidates ({} parsed, {} malformed, {} unreadable)",
        outcome.stats.files_discovered,
        outcome.stats.files_parsed,
        outcome.stats.files_malformed,
        outcome.stats.files_unreadable
    );

    assert_eq!(outcome.stats.files_discovered, 3);
    assert_eq!(outcome.stats.files_parsed, 1);
    assert_eq!(outcome.stats.files_malformed, 1);
    assert_eq!(outcome.stats.files_unreadable, 1);

    // Failed files contribute nothing to the aggregates
    assert_eq!(outcome.aggregator.distinct_stt_count(), 1);
    assert_eq!(outcome.aggregator.event_counts().len(), 1);
}

/// Test creation date mismatch detection between path stamp and header
///
/// Purpose: Validate the consistency check on a file whose name disagrees
/// with its header record
/// Benefit: Ensures mismatches are tallied and reported without failing files
#[tokio::test]
async fn test_consistency_mismatch_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();

    // Path stamp says 2024-01-02, header record says 2024-01-01
    write_event_file(
        temp_dir.path(),
        "ce_event.cis.20240102.4001.dat",
        4001,
        "ICBK",
        "20240101083000",
        "20240101120000",
    );

    let processor = ScanProcessor::new(temp_dir.path().to_path_buf(), Config::default());
    let outcome = processor.process().await.unwrap();

    assert_eq!(outcome.stats.files_parsed, 1);
    assert_eq!(outcome.aggregator.consistency_mismatches(), 1);

    // The record still participates in every aggregate
    assert_eq!(outcome.aggregator.event_counts().get("ICBK"), Some(&1));
    assert_eq!(outcome.aggregator.min_diff_records().len(), 1);
}

/// Test the dry run mode stops after discovery
#[tokio::test]
async fn test_dry_run_discovers_without_parsing() {
    let temp_dir = TempDir::new().unwrap();
    write_event_file(
        temp_dir.path(),
        "ce_event.cis.20240105.5001.dat",
        5001,
        "ICBK",
        "20240105083000",
        "20240101120000",
    );

    let config = Config::default().with_dry_run(true);
    let processor = ScanProcessor::new(temp_dir.path().to_path_buf(), config);
    let outcome = processor.process().await.unwrap();

    assert_eq!(outcome.stats.files_discovered, 1);
    assert_eq!(outcome.stats.files_parsed, 0);
    assert!(outcome.aggregator.event_counts().is_empty());
}

/// Test the delimited report rendered from a real scan
///
/// Purpose: Validate the full report layout byte for byte
/// Benefit: Guards the import format downstream spreadsheets rely on
#[tokio::test]
async fn test_delimited_report_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write_event_file(
        temp_dir.path(),
        "ce_event.cis.20240105.1012.dat",
        1012,
        "ICBK",
        "20240105083000",
        "20240101120000",
    );

    let processor = ScanProcessor::new(temp_dir.path().to_path_buf(), Config::default());
    let outcome = processor.process().await.unwrap();

    let rendered = report::render_delimited(&outcome.aggregator, outcome.stats.files_discovered);

    assert_eq!(
        rendered,
        "Files discovered: 1\n\
         STT;File creation;Event date;Diff days;\n\
         1012;5.1.2024;1.1.2024;4;\n\
         \n\
         Event;Count;\n\
         ICBK;1;\n\
         \n\
         STTs analysed: 1\n"
    );
}

/// Test the JSON report rendered from a real scan
#[tokio::test]
async fn test_json_report_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write_event_file(
        temp_dir.path(),
        "ce_event.cis.20240105.1012.dat",
        1012,
        "ICBK",
        "20240105083000",
        "20240101120000",
    );

    let processor = ScanProcessor::new(temp_dir.path().to_path_buf(), Config::default());
    let outcome = processor.process().await.unwrap();

    let rendered = report::render_json(&outcome.aggregator, &outcome.stats);
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["files_discovered"], 1);
    assert_eq!(value["files_parsed"], 1);
    assert_eq!(value["target_event_code"], "ICBK");
    assert_eq!(value["min_diff_by_stt"][0]["stt"], 1012);
    assert_eq!(value["min_diff_by_stt"][0]["diff_days"], 4);
    assert_eq!(value["event_counts"]["ICBK"], 1);
    assert_eq!(value["distinct_stts"], 1);
}
