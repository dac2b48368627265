//! Configuration constants.
//!
//! Every line the tool prints on standard output starts from one of these,
//! so tests and downstream scripts can rely on the exact wording.

/// Printed when no URL file argument is supplied.
pub const USAGE: &str = "Usage: endpointer <url_file.txt>";

/// Prefix of the line printed before each target is fetched.
pub const PROGRESS_PREFIX: &str = "Processing URL: ";

/// Prefix of the line printed when a target cannot be fetched.
pub const FETCH_ERROR_PREFIX: &str = "Error fetching JS content: ";

/// Prefix of the line printed when the target list cannot be loaded.
pub const READ_ERROR_PREFIX: &str = "Error reading file: ";

/// Input path that selects standard input instead of a file.
pub const STDIN_MARKER: &str = "-";
