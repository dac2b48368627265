//! Application configuration and constants.
//!
//! This module provides:
//! - Output text constants (usage line, progress and error prefixes)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
