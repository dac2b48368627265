//! Tests for the binary's exit status and stdout on early-exit paths.

mod helpers;

use helpers::write_url_file;
use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_endpointer"))
        .args(args)
        .output()
        .expect("Failed to run endpointer binary")
}

#[test]
fn test_no_arguments_prints_usage_and_exits_zero() {
    let output = run_binary(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: endpointer <url_file.txt>\n"
    );
}

#[test]
fn test_extra_argument_prints_usage_and_exits_zero() {
    let (_dir, path) = write_url_file(&["http://127.0.0.1:1/a.js"]);
    let path = path.to_str().expect("UTF-8 temp path");
    let output = run_binary(&[path, "extra"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: endpointer <url_file.txt>\n"
    );
}

#[test]
fn test_missing_file_reports_error_and_exits_zero() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.txt");
    let output = run_binary(&[path.to_str().expect("UTF-8 temp path")]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("Error reading file: "),
        "unexpected stdout: {stdout}"
    );
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_zero_timeout_is_rejected_by_cli() {
    let output = run_binary(&["urls.txt", "--timeout-seconds", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
