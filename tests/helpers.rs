// Shared test helpers for input files and captured output.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Writes `lines` (newline-terminated) to `urls.txt` inside a fresh temp dir.
/// The returned `TempDir` must be kept alive for as long as the file is used.
#[allow(dead_code)] // Used by other test files
pub fn write_url_file(lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("urls.txt");
    let mut file = std::fs::File::create(&path).expect("Failed to create URL file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write URL file");
    }
    (dir, path)
}

/// Splits captured output into lines.
#[allow(dead_code)] // Used by other test files
pub fn output_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .expect("Output should be UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}
