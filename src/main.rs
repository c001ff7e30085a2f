use ce_event_analyzer::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(ce_event_analyzer::Error::processing_interrupted(
                    "Scan interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("CE Event Analyzer - CIS Event Export File Analysis");
    println!("==================================================");
    println!();
    println!("Scan directory trees of CIS event export files and report per-event");
    println!("occurrence counts and per-shipment timing statistics.");
    println!();
    println!("USAGE:");
    println!("    ce-event-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    scan    Scan a directory tree of event files and report the results");
    println!("    help    Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Scan a directory with default settings:");
    println!("    ce-event-analyzer scan /data/cis-exports");
    println!();
    println!("    # Track a different event code with more workers:");
    println!("    ce-event-analyzer scan /data/cis-exports --event-code ICBK --workers 16");
    println!();
    println!("    # Machine-readable report:");
    println!("    ce-event-analyzer scan /data/cis-exports --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ce-event-analyzer <COMMAND> --help");
}
