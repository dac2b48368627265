//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by every target of a run.
///
/// Without explicit options the client keeps reqwest's defaults: no request
/// timeout, no custom headers, and the default redirect policy (up to 10 hops).
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or
/// configured User-Agent is rejected by the builder.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new();
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(ref user_agent) = config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    Ok(builder.build()?)
}
