//! Tests for loading the target list from disk.

mod helpers;

use endpointer::read_lines;
use helpers::write_url_file;

#[tokio::test]
async fn test_read_lines_returns_every_line_in_order() {
    let urls = [
        "https://example.com/a.js",
        "https://example.com/b.js",
        "https://cdn.example.org/vendor/c.min.js",
    ];
    let (_dir, path) = write_url_file(&urls);

    let lines = read_lines(&path).await.expect("should read file");
    assert_eq!(lines, urls);
}

#[tokio::test]
async fn test_read_lines_keeps_blank_and_comment_like_lines() {
    // No comment syntax and no blank-line skipping
    let (_dir, path) = write_url_file(&["# not a comment", "", "https://example.com/a.js"]);

    let lines = read_lines(&path).await.expect("should read file");
    assert_eq!(lines, vec!["# not a comment", "", "https://example.com/a.js"]);
}

#[tokio::test]
async fn test_read_lines_does_not_trim_whitespace() {
    let (_dir, path) = write_url_file(&["  https://example.com/a.js\t"]);

    let lines = read_lines(&path).await.expect("should read file");
    assert_eq!(lines, vec!["  https://example.com/a.js\t"]);
}

#[tokio::test]
async fn test_read_lines_directory_is_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    assert!(read_lines(dir.path()).await.is_err());
}
