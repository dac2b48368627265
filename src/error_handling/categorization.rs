//! Error categorization.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Checks the most specific conditions first: a timeout is also a request
/// error, and a connect failure is also a request error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_categorize_builder_error_for_empty_url() {
        let client = reqwest::Client::new();
        let err = client
            .get("")
            .send()
            .await
            .expect_err("empty URL must not be sent");
        assert_eq!(
            categorize_reqwest_error(&err),
            ErrorType::HttpRequestBuilderError
        );
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 1 is reserved (tcpmux) and closed on test hosts
        let client = reqwest::Client::new();
        let err = client
            .get("http://127.0.0.1:1/app.js")
            .send()
            .await
            .expect_err("connection should be refused");
        assert_eq!(
            categorize_reqwest_error(&err),
            ErrorType::HttpRequestConnectError
        );
    }
}
