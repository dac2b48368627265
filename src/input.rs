//! Target list loading.
//!
//! Lines are returned exactly as written, minus the `\n` or `\r\n`
//! terminator. Blank lines are kept so that every line of the input maps to
//! one target. Invalid UTF-8 is replaced per line, so a bad byte only spoils
//! its own target.

use std::path::Path;

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::STDIN_MARKER;

/// Reads the target list from `path`, or from stdin when `path` is `-`.
///
/// The file handle lives only for the duration of this call.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or reading
/// fails mid-stream.
pub async fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let lines = if path.as_os_str() == STDIN_MARKER {
        debug!("Reading URLs from stdin");
        read_lines_from(BufReader::new(tokio::io::stdin())).await?
    } else {
        let file = tokio::fs::File::open(path).await?;
        read_lines_from(BufReader::new(file)).await?
    };
    debug!("Loaded {} target(s) from {}", lines.len(), path.display());
    Ok(lines)
}

/// Collects every line of `reader` in order.
pub async fn read_lines_from<R>(mut reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if let std::borrow::Cow::Owned(_) = line {
            warn!("Replaced invalid UTF-8 in input line {}", lines.len() + 1);
        }
        lines.push(line.into_owned());
    }
    Ok(lines)
}
