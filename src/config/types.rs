//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration, parsed from the command line.
///
/// Logs are written to standard error; standard output only carries progress,
/// error and candidate URL lines.
///
/// # Examples
///
/// ```no_run
/// use endpointer::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: Some(PathBuf::from("urls.txt")),
///     timeout_seconds: Some(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "endpointer",
    version,
    about = "Extracts JavaScript variable names and prints candidate parameter URLs"
)]
pub struct Config {
    /// File with one JavaScript URL per line (`-` reads from stdin)
    pub file: Option<PathBuf>,

    /// Positionals beyond the first; any present selects the usage message
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value (client default when omitted)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Report non-2xx responses as fetch errors instead of scanning their bodies
    #[arg(long)]
    pub reject_error_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            extra: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: None,
            user_agent: None,
            reject_error_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.file.is_none());
        assert!(config.timeout_seconds.is_none());
        assert!(config.user_agent.is_none());
        assert!(!config.reject_error_status);
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn test_config_parse_file_only() {
        let config = Config::try_parse_from(["endpointer", "urls.txt"]).expect("should parse");
        assert_eq!(config.file, Some(PathBuf::from("urls.txt")));
        assert!(!config.reject_error_status);
        assert!(matches!(config.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_config_parse_without_file() {
        // Missing file is handled by the driver, not rejected by clap
        let config = Config::try_parse_from(["endpointer"]).expect("should parse");
        assert!(config.file.is_none());
    }

    #[test]
    fn test_config_parse_collects_extra_positionals() {
        // Extra arguments reach the driver, which answers with the usage line
        let config =
            Config::try_parse_from(["endpointer", "a.txt", "b.txt"]).expect("should parse");
        assert_eq!(config.file, Some(PathBuf::from("a.txt")));
        assert_eq!(config.extra, vec!["b.txt".to_string()]);
    }

    #[test]
    fn test_config_parse_rejects_zero_timeout() {
        let result = Config::try_parse_from(["endpointer", "a.txt", "--timeout-seconds", "0"]);
        assert!(result.is_err());

        let config = Config::try_parse_from(["endpointer", "a.txt", "--timeout-seconds", "1"])
            .expect("should parse");
        assert_eq!(config.timeout_seconds, Some(1));
    }
}
