//! Report rendering for completed scans
//!
//! Pure string builders over the final aggregate state. The delimited
//! format is the contract consumed by downstream tooling, the human format
//! frames the same tables for terminals, and the JSON format serializes
//! the full aggregate.

use colored::Colorize;
use serde_json::json;

use crate::app::models::ScanStats;
use crate::app::services::aggregator::EventAggregator;
use crate::app::services::event_file_parser::dates::format_short;

/// Render the semicolon-delimited report.
///
/// Four sections: the discovered file count, the per identifier minimum
/// diff table, the event code counts, and the distinct identifier total.
/// Rows are sorted so repeated runs over the same tree compare cleanly.
pub fn render_delimited(aggregator: &EventAggregator, files_discovered: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Files discovered: {}\n", files_discovered));

    out.push_str("STT;File creation;Event date;Diff days;\n");
    for record in aggregator.min_diff_records() {
        out.push_str(&format!(
            "{};{};{};{};\n",
            record.stt,
            format_short(record.file_creation_time),
            format_short(record.event_time),
            record.diff_days()
        ));
    }

    out.push('\n');
    out.push_str("Event;Count;\n");
    for (code, count) in sorted_event_counts(aggregator) {
        out.push_str(&format!("{};{};\n", code, count));
    }

    out.push('\n');
    out.push_str(&format!(
        "STTs analysed: {}\n",
        aggregator.distinct_stt_count()
    ));

    out
}

/// Render the human-readable report with colored framing.
pub fn render_human(aggregator: &EventAggregator, stats: &ScanStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "Scan Summary".bright_green().bold()));
    out.push_str(&format!(
        "  {} {}\n",
        "Files discovered:".bright_cyan(),
        stats.files_discovered.to_string().bright_white().bold()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Files parsed:".bright_cyan(),
        stats.files_parsed.to_string().bright_white()
    ));
    if stats.files_failed() > 0 {
        out.push_str(&format!(
            "  {} {} ({} unreadable, {} malformed)\n",
            "Files failed:".bright_red(),
            stats.files_failed().to_string().bright_red().bold(),
            stats.files_unreadable,
            stats.files_malformed
        ));
    }
    if aggregator.consistency_mismatches() > 0 {
        out.push_str(&format!(
            "  {} {}\n",
            "Creation date mismatches:".bright_cyan(),
            aggregator
                .consistency_mismatches()
                .to_string()
                .bright_white()
        ));
    }
    out.push_str(&format!(
        "  {} {:.2}s\n",
        "Time elapsed:".bright_cyan(),
        stats.elapsed.as_secs_f64()
    ));

    out.push_str(&format!(
        "\n{} {}\n",
        "Minimum diff per STT, target event".bright_yellow(),
        aggregator.target_event_code().bright_white().bold()
    ));
    let records = aggregator.min_diff_records();
    if records.is_empty() {
        out.push_str("  (no records matched the target event code)\n");
    }
    for record in records {
        out.push_str(&format!(
            "  {} file {}, event {}, diff {} days\n",
            format!("{}:", record.stt).bright_white().bold(),
            format_short(record.file_creation_time),
            format_short(record.event_time),
            record.diff_days()
        ));
    }

    out.push_str(&format!("\n{}\n", "Event occurrences".bright_yellow()));
    for (code, count) in sorted_event_counts(aggregator) {
        out.push_str(&format!(
            "  {} {}\n",
            format!("{}:", code).bright_cyan(),
            count
        ));
    }

    out.push_str(&format!(
        "\n{} {}\n",
        "STTs analysed:".bright_green(),
        aggregator
            .distinct_stt_count()
            .to_string()
            .bright_white()
            .bold()
    ));

    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(aggregator: &EventAggregator, stats: &ScanStats) -> String {
    let min_diff: Vec<_> = aggregator
        .min_diff_records()
        .into_iter()
        .map(|record| {
            json!({
                "stt": record.stt,
                "file_creation": record.file_creation_time,
                "event_date": record.event_time,
                "diff_days": record.diff_days(),
            })
        })
        .collect();

    let payload = json!({
        "files_discovered": stats.files_discovered,
        "files_parsed": stats.files_parsed,
        "files_unreadable": stats.files_unreadable,
        "files_malformed": stats.files_malformed,
        "target_event_code": aggregator.target_event_code(),
        "min_diff_by_stt": min_diff,
        "event_counts": aggregator.event_counts(),
        "distinct_stts": aggregator.distinct_stt_count(),
        "consistency_mismatches": aggregator.consistency_mismatches(),
    });

    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
}

fn sorted_event_counts(aggregator: &EventAggregator) -> Vec<(&String, &usize)> {
    let mut counts: Vec<_> = aggregator.event_counts().iter().collect();
    counts.sort_by(|a, b| a.0.cmp(b.0));
    counts
}
