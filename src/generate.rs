//! Candidate URL generation.

/// Builds one candidate URL per variable name: `<base_url>?<name>=`.
///
/// The base URL is used verbatim, even if it already carries a query string,
/// and names are not percent-encoded.
pub fn generate_test_urls(base_url: &str, variables: &[String]) -> Vec<String> {
    variables
        .iter()
        .map(|variable| format!("{base_url}?{variable}="))
        .collect()
}
