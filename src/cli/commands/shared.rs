//! Shared components for CLI commands
//!
//! Logging setup and configuration layering used by the command
//! implementations.

use crate::cli::args::ScanArgs;
use crate::config::{self, Config};
use crate::Result;
use tracing::{debug, info};

/// Set up structured logging for a scan run
///
/// Verbosity flags take precedence over the configured log level; with no
/// flags the configuration decides. Diagnostics go to stderr so that
/// machine-readable report formats keep stdout to themselves.
pub fn setup_logging(args: &ScanArgs, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if args.quiet || args.verbose > 0 {
        args.get_log_level().to_string()
    } else {
        config.logging.level.clone()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ce_event_analyzer={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &ScanArgs) -> Result<Config> {
    info!("Loading configuration");

    // Determine config file path
    let default_config_path = if args.config_file.is_none() {
        config::default_config_path()
            .ok()
            .filter(|path| path.exists())
    } else {
        None
    };

    let config_file = args
        .config_file
        .as_deref()
        .or(default_config_path.as_deref());

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using built-in defaults");
    }

    let mut config = Config::load_layered(config_file)?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
///
/// Only explicitly set arguments override the file values; boolean flags
/// can enable but never disable a configured setting.
pub fn apply_cli_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(code) = &args.event_code {
        config.scan.target_event_code = code.clone();
    }

    if let Some(workers) = args.workers {
        config.performance.workers = workers;
    }

    if args.follow_links {
        config.scan.follow_links = true;
    }

    if args.dry_run {
        config.scan.dry_run = true;
    }

    if args.quiet || args.verbose > 0 {
        config.logging.level = args.get_log_level().to_string();
    }
}
