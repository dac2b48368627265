//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to fetch a single target.
///
/// These are recovered locally: the driver reports them and moves on.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport, protocol or body-read failure.
    ///
    /// Displayed with its full source chain so the OS-level cause
    /// (refused connection, DNS failure) reaches the output.
    #[error("{}", error_chain(.0))]
    Request(#[from] ReqwestError),

    /// Non-2xx response, only produced when error statuses are rejected.
    #[error("HTTP status {status} for {url}")]
    Status {
        /// Target URL as given in the input.
        url: String,
        /// Status the server answered with.
        status: StatusCode,
    },
}

/// Joins `error` and each of its sources with `: `.
///
/// Causes whose text is already contained in the previous message are
/// skipped, since some layers repeat their source in their own `Display`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut last = message.clone();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !last.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        last = text;
        source = cause.source();
    }
    message
}

impl FetchError {
    /// Category used for the end-of-run statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchError::Request(e) => categorize_reqwest_error(e),
            FetchError::Status { .. } => ErrorType::HttpRequestStatusRejected,
        }
    }
}

/// Errors that end a scan before or while iterating targets.
#[derive(Error, Debug)]
pub enum ScanError {
    /// No URL file was supplied.
    #[error("no URL file supplied")]
    Usage,

    /// The target list could not be loaded.
    #[error("{0}")]
    Input(#[source] std::io::Error),

    /// Writing results to the output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Categories of per-target fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The target is not a usable URL (blank lines land here).
    HttpRequestBuilderError,
    /// Redirect loop or too many hops.
    HttpRequestRedirectError,
    /// The configured request timeout elapsed.
    HttpRequestTimeoutError,
    /// TCP/TLS connection or DNS resolution failed.
    HttpRequestConnectError,
    /// Request failed after connecting.
    HttpRequestRequestError,
    /// The response body could not be read.
    HttpRequestBodyError,
    /// The response body could not be decoded as text.
    HttpRequestDecodeError,
    /// Non-2xx status with `--reject-error-status`.
    HttpRequestStatusRejected,
    /// Anything reqwest does not classify further.
    HttpRequestOtherError,
}

impl ErrorType {
    /// Human-readable label for statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout",
            ErrorType::HttpRequestConnectError => "HTTP connection error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP body read error",
            ErrorType::HttpRequestDecodeError => "HTTP body decode error",
            ErrorType::HttpRequestStatusRejected => "Rejected non-2xx status",
            ErrorType::HttpRequestOtherError => "Other HTTP error",
        }
    }
}

/// Notable events that are not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A non-2xx body was scanned as if the fetch had succeeded.
    NonSuccessStatus,
    /// A fetched document contained no variable declarations.
    NoIdentifiers,
}

impl InfoType {
    /// Human-readable label for statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::NonSuccessStatus => "Non-2xx response scanned",
            InfoType::NoIdentifiers => "Document without declarations",
        }
    }
}
