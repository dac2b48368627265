//! JavaScript content fetching.
//!
//! One GET per target with the shared client. The response body is read in
//! full and dropped before the next target starts.

use log::{debug, warn};
use reqwest::StatusCode;

use crate::error_handling::FetchError;

/// A target URL paired with the body it returned.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// The target URL exactly as it appeared in the input.
    pub url: String,
    /// Final response status (after redirects).
    pub status: StatusCode,
    /// Full response body decoded as text.
    pub body: String,
}

/// Fetches the JavaScript content behind `url`.
///
/// Non-2xx responses are scanned like any other body unless
/// `reject_error_status` is set, in which case they become
/// `FetchError::Status`.
///
/// # Errors
///
/// Returns `FetchError::Request` for invalid URLs, transport failures and
/// body read failures.
pub async fn fetch_js_content(
    client: &reqwest::Client,
    url: &str,
    reject_error_status: bool,
) -> Result<FetchedDocument, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        if reject_error_status {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        warn!("Scanning non-success response from {url}: {status}");
    }

    let body = response.text().await?;
    debug!("Fetched {} bytes from {url} ({status})", body.len());

    Ok(FetchedDocument {
        url: url.to_string(),
        status,
        body,
    })
}
