//! Main application modules.
//!
//! Run summaries logged after the last target is processed.

pub mod statistics;

// Re-export public API
pub use statistics::log_run_statistics;
