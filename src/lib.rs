//! endpointer library: candidate parameter URLs from JavaScript declarations
//!
//! For every target URL in an input file, the JavaScript behind it is fetched,
//! the names declared with `var`, `let` or `const` are extracted, and one
//! candidate URL per name is printed in the form `<target>?<name>=`. The
//! candidates are meant for manual follow-up probing.
//!
//! # Example
//!
//! ```no_run
//! use endpointer::{init_client, run_scan, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: Some(PathBuf::from("urls.txt")),
//!     ..Default::default()
//! };
//! let client = init_client(&config)?;
//! let mut stdout = std::io::stdout();
//! let report = run_scan(&config, &client, &mut stdout).await?;
//! eprintln!("{} candidate URLs", report.candidates);
//! # Ok(())
//! # }
//! ```
//!
//! Targets are processed strictly one after another.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod generate;
pub mod initialization;
pub mod input;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, ScanError};
pub use extract::extract_variable_names;
pub use fetch::{fetch_js_content, FetchedDocument};
pub use generate::generate_test_urls;
pub use initialization::{init_client, init_logger_with};
pub use input::read_lines;
pub use run::{run_scan, ScanReport};

// Internal run module (contains the per-target loop)
mod run {
    use std::io::Write;
    use std::time::Instant;

    use log::{debug, info};

    use crate::app::log_run_statistics;
    use crate::config::{Config, FETCH_ERROR_PREFIX, PROGRESS_PREFIX, READ_ERROR_PREFIX, USAGE};
    use crate::error_handling::{InfoType, ProcessingStats, ScanError};
    use crate::extract::extract_variable_names;
    use crate::fetch::fetch_js_content;
    use crate::generate::generate_test_urls;
    use crate::input::read_lines;

    /// Results of a completed run.
    #[derive(Debug, Clone, Default)]
    pub struct ScanReport {
        /// Number of targets in the input (blank lines included)
        pub total_urls: usize,
        /// Number of targets whose body was fetched and scanned
        pub fetched: usize,
        /// Number of targets that failed to fetch
        pub failed: usize,
        /// Number of candidate URLs written
        pub candidates: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a scan over the targets named by `config.file`.
    ///
    /// Every user-facing line is written to `out`: the usage message, the
    /// file read error, one `Processing URL:` line per target, one
    /// `Error fetching JS content:` line per failed target, and the
    /// candidate URLs. A failed target never aborts the run.
    ///
    /// # Errors
    ///
    /// - `ScanError::Usage` unless exactly one file was configured (usage already written)
    /// - `ScanError::Input` if the target list could not be read (message already written)
    /// - `ScanError::Output` if writing to `out` fails
    pub async fn run_scan<W: Write>(
        config: &Config,
        client: &reqwest::Client,
        out: &mut W,
    ) -> Result<ScanReport, ScanError> {
        let path = match config.file.as_deref() {
            Some(path) if config.extra.is_empty() => path,
            _ => {
                writeln!(out, "{USAGE}")?;
                out.flush()?;
                return Err(ScanError::Usage);
            }
        };

        let urls = match read_lines(path).await {
            Ok(urls) => urls,
            Err(e) => {
                writeln!(out, "{READ_ERROR_PREFIX}{e}")?;
                out.flush()?;
                return Err(ScanError::Input(e));
            }
        };
        info!("Total URLs in file: {}", urls.len());

        let start_time = Instant::now();
        let mut stats = ProcessingStats::new();
        let mut report = ScanReport {
            total_urls: urls.len(),
            ..Default::default()
        };

        for url in &urls {
            writeln!(out, "{PROGRESS_PREFIX}{url}")?;

            let document = match fetch_js_content(client, url, config.reject_error_status).await {
                Ok(document) => document,
                Err(e) => {
                    writeln!(out, "{FETCH_ERROR_PREFIX}{e}")?;
                    stats.increment_error(e.error_type());
                    report.failed += 1;
                    continue;
                }
            };
            report.fetched += 1;
            if !document.status.is_success() {
                stats.increment_info(InfoType::NonSuccessStatus);
            }

            let variables = extract_variable_names(&document.body);
            debug!("Found {} unique variable(s) in {url}", variables.len());
            if variables.is_empty() {
                stats.increment_info(InfoType::NoIdentifiers);
            }

            for test_url in generate_test_urls(url, &variables) {
                writeln!(out, "{test_url}")?;
                report.candidates += 1;
            }
            // Results for one target are visible before the next fetch blocks
            out.flush()?;
        }

        report.elapsed_seconds = start_time.elapsed().as_secs_f64();
        log_run_statistics(&report, &stats);

        Ok(report)
    }
}
