//! Recipe directory query client.
//!
//! One page per request, no total count: the caller infers "end of results"
//! from an empty page. Queries are sanitized before they go on the wire; the
//! surviving characters are exactly the documented inclusion/exclusion syntax
//! (`+ingredient`, `-ingredient`, comma-separated).

use std::sync::LazyLock;
use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::state::Recipe;
use crate::util::{percent_encode, s};

/// Shared HTTP client; connection pooling is enabled by default in
/// `reqwest::Client`.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_default()
});

/// What: Sanitize raw user input into a directory query.
///
/// Inputs:
/// - `raw`: The input text as typed
///
/// Output:
/// - Trimmed string containing only `[a-zA-Z+,-]`; idempotent.
///
/// Details:
/// - Invalid characters are stripped, never rejected; there is no validation
///   error path.
#[must_use]
pub fn sanitize_query(raw: &str) -> String {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || matches!(c, '+' | ',' | '-'))
        .collect();
    stripped.trim().to_string()
}

/// Issues sanitized, paginated searches against the remote recipe directory.
#[derive(Clone, Debug)]
pub struct QueryClient {
    base_url: String,
}

impl QueryClient {
    /// Client for the directory at `base_url`.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        QueryClient { base_url }
    }

    /// What: Fetch one page of results for a query.
    ///
    /// Inputs:
    /// - `query`: Sanitized ingredient query (`i` parameter)
    /// - `page`: 1-based page cursor (`p` parameter)
    ///
    /// Output:
    /// - Recipes in API order; empty when the search is exhausted. Fails with
    ///   [`Error::Network`] on transport/non-2xx and [`Error::Parse`] on a
    ///   malformed body.
    pub async fn search(&self, query: &str, page: u32) -> Result<Vec<Recipe>> {
        let url = format!("{}?i={}&p={}", self.base_url, percent_encode(query), page);
        tracing::debug!(%url, page, "fetching recipe page");
        let resp = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(Error::from)?;
        if !resp.status().is_success() {
            return Err(Error::Network(format!(
                "{} returned {}",
                self.base_url,
                resp.status()
            )));
        }
        let body: Value = resp.json().await.map_err(|e| Error::Parse(e.to_string()))?;
        parse_results(&body)
    }
}

/// What: Extract recipes from a directory API response body.
///
/// Inputs:
/// - `body`: Parsed JSON response
///
/// Output:
/// - The `results` array mapped to normalized [`Recipe`]s; entries without an
///   `href` are skipped. A body without a `results` array is a parse error.
pub fn parse_results(body: &Value) -> Result<Vec<Recipe>> {
    let arr = body
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Parse("response has no results array".to_string()))?;
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        let href = s(item, "href");
        if href.is_empty() {
            continue;
        }
        out.push(Recipe::from_api(
            &s(item, "title"),
            &href,
            &s(item, "ingredients"),
            &s(item, "thumbnail"),
        ));
    }
    Ok(out)
}
