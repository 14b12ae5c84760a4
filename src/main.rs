//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `head_meta` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report output and the exit status policy
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use head_meta::initialization::init_logger_with;
use head_meta::output::write_stdout;
use head_meta::{inspect, Config, ItemFilter};

/// Exit status when `--fail-on` is triggered by the findings.
const EXIT_ISSUES_FOUND: i32 = 2;

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let filter = ItemFilter::parse(config.filter.as_deref().unwrap_or_default(), config.search)
        .context("Invalid --filter terms")?;

    match inspect(&config) {
        Ok(report) => {
            write_stdout(&report, &filter, config.format).context("Failed to write report")?;
            if config.fail_on.should_fail(report.worst_severity()) {
                process::exit(EXIT_ISSUES_FOUND);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("head_meta error: {:#}", e);
            process::exit(1);
        }
    }
}
