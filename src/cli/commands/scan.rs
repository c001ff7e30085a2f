//! Scan command implementation for the event analyzer CLI
//!
//! Walks the requested directory tree, parses every candidate event file,
//! and prints the aggregated report in the requested output format.

use super::shared::{load_configuration, setup_logging};
use crate::app::models::ScanStats;
use crate::app::services::report;
use crate::cli::args::{OutputFormat, ScanArgs};
use crate::processor::{ScanOutcome, ScanProcessor};
use crate::Result;
use tracing::{debug, info};

/// Scan command runner
///
/// Orchestrates the complete workflow:
/// 1. Validate arguments and load the layered configuration
/// 2. Set up logging
/// 3. Run the scan processor over the directory tree
/// 4. Render the report in the requested format
pub async fn run_scan(args: ScanArgs) -> Result<ScanStats> {
    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_configuration(&args)?;

    // Set up logging
    setup_logging(&args, &config)?;

    info!("Starting event file scan of {}", args.root.display());
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let processor =
        ScanProcessor::new(args.root.clone(), config).with_progress(args.show_progress());

    let outcome = processor.process().await?;

    println!("{}", render_report(&args.output_format, &outcome));

    Ok(outcome.stats)
}

/// Render the scan report in the requested format
fn render_report(format: &OutputFormat, outcome: &ScanOutcome) -> String {
    match format {
        OutputFormat::Human => report::render_human(&outcome.aggregator, &outcome.stats),
        OutputFormat::Delimited => {
            report::render_delimited(&outcome.aggregator, outcome.stats.files_discovered)
        }
        OutputFormat::Json => report::render_json(&outcome.aggregator, &outcome.stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::EventRecord;
    use crate::app::services::aggregator::EventAggregator;
    use chrono::NaiveDate;

    fn create_test_outcome() -> ScanOutcome {
        let mut aggregator = EventAggregator::new("ICBK");
        let record = EventRecord::new(
            7001,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "ICBK".to_string(),
        );
        aggregator.observe(&record);

        let mut stats = ScanStats::new();
        stats.files_discovered = 1;
        stats.files_parsed = 1;

        ScanOutcome { stats, aggregator }
    }

    #[test]
    fn test_render_report_delimited() {
        let outcome = create_test_outcome();

        let rendered = render_report(&OutputFormat::Delimited, &outcome);

        assert!(rendered.contains("STT;File creation;Event date;Diff days;"));
        assert!(rendered.contains("7001;5.1.2024;1.1.2024;4;"));
        assert!(rendered.contains("STTs analysed: 1"));
    }

    #[test]
    fn test_render_report_human() {
        let outcome = create_test_outcome();

        let rendered = render_report(&OutputFormat::Human, &outcome);

        assert!(rendered.contains("Scan Summary"));
        assert!(rendered.contains("7001"));
    }

    #[test]
    fn test_render_report_json() {
        let outcome = create_test_outcome();

        let rendered = render_report(&OutputFormat::Json, &outcome);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["files_discovered"], 1);
        assert_eq!(value["min_diff_by_stt"][0]["stt"], 7001);
    }
}
