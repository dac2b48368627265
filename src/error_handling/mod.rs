//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and the scan driver
//! - Categorization of `reqwest` failures
//! - Per-run statistics (fetch errors and informational events)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{error_chain, ErrorType, FetchError, InfoType, InitializationError, ScanError};
