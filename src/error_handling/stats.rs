//! Processing statistics tracking.
//!
//! Targets are processed one at a time, so the counters are plain integers
//! owned by the driver for the duration of a run.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType};

/// Per-run counters for fetch errors and informational events.
///
/// All types are initialized to zero on creation.
#[derive(Debug)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, usize>,
    info: HashMap<InfoType, usize>,
}

impl ProcessingStats {
    /// Creates a tracker with every category at zero.
    pub fn new() -> Self {
        ProcessingStats {
            errors: ErrorType::iter().map(|e| (e, 0)).collect(),
            info: InfoType::iter().map(|i| (i, 0)).collect(),
        }
    }

    /// Counts one fetch failure of the given category.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Counts one informational event.
    pub fn increment_info(&mut self, info_type: InfoType) {
        *self.info.entry(info_type).or_insert(0) += 1;
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(&info_type).copied().unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        self.info.values().sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
