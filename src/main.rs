//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_analyzer` library that handles:
//! - Command-line argument parsing and validation
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use url_analyzer::initialization::init_logger_with;
use url_analyzer::{run_analyzer, Cli, Config};

/// Exit code when the URL given on the command line is not a valid URL.
const EXIT_INVALID_URL: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    if let Err(e) = config.validate() {
        eprintln!("url_analyzer error: {e}");
        process::exit(1);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_analyzer(config).await {
        Ok(report) if report.rejected_single_url() => process::exit(EXIT_INVALID_URL),
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("url_analyzer error: {:#}", e);
            process::exit(1);
        }
    }
}
