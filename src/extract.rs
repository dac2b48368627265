//! Variable name extraction from JavaScript source.
//!
//! This is a lexical scan, not a parser: any `var`, `let` or `const`
//! keyword followed by whitespace and an identifier counts as a declaration,
//! including occurrences inside strings and comments.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Keyword, whitespace, then the declared identifier in group 2.
pub const DECLARATION_PATTERN: &str = r"\b(var|let|const)\s+([a-zA-Z_$][0-9a-zA-Z_$]*)";

static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DECLARATION_PATTERN).expect("declaration pattern is a valid regex")
});

/// Extracts declared variable names from `js_content`.
///
/// Names are returned in order of first appearance with duplicates removed.
/// Comparison is exact and case-sensitive.
pub fn extract_variable_names(js_content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut variables = Vec::new();

    for caps in DECLARATION_REGEX.captures_iter(js_content) {
        if let Some(name) = caps.get(2) {
            let name = name.as_str();
            if seen.insert(name) {
                variables.push(name.to_string());
            }
        }
    }

    variables
}
