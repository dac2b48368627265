//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `endpointer` library that handles:
//! - Command-line argument parsing
//! - Logger and HTTP client initialization
//! - Mapping run outcomes to exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use endpointer::{init_client, init_logger_with, run_scan, Config, ScanError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    let mut stdout = std::io::stdout().lock();
    match run_scan(&config, &client, &mut stdout).await {
        Ok(_) => Ok(()),
        // Already reported on stdout; these end the run without an error status
        Err(ScanError::Usage) | Err(ScanError::Input(_)) => Ok(()),
        Err(e) => {
            eprintln!("endpointer error: {:#}", e);
            process::exit(1);
        }
    }
}
