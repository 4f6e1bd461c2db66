//! arXiv query forwarding.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::source::FetchError;
use crate::utils::{xml_to_value, HttpClient};

/// Base URL for the arXiv API
pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// Client for the arXiv search API.
///
/// Builds a title search against the query endpoint, fetches the Atom
/// response, and returns the matching entries as generic JSON trees in
/// upstream relevance order.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    client: Arc<HttpClient>,
    base_url: String,
}

impl ArxivClient {
    /// Create a client against the public arXiv API
    pub fn new() -> Self {
        Self::with_base_url(ARXIV_API_URL)
    }

    /// Create a client against a custom endpoint (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: base_url.into(),
        }
    }

    /// Create with a custom HTTP client and endpoint
    pub fn with_client(client: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the search URL for a topic.
    ///
    /// The topic is matched against paper titles as a quoted phrase, sorted
    /// by relevance ascending, limited to `max_results`. The search
    /// expression is percent-encoded before interpolation.
    fn build_query_url(&self, topic: &str, max_results: usize) -> String {
        let search_query = format!("ti:\"{}\"", topic);
        format!(
            "{}?search_query={}&sortBy=relevance&sortOrder=ascending&max_results={}",
            self.base_url,
            urlencoding::encode(&search_query),
            max_results
        )
    }

    /// Fetch entries matching `topic`, at most `max_results` of them.
    ///
    /// Returns an empty list when the response has no feed container or the
    /// feed holds no entries. Any transport failure, non-success status, or
    /// unparseable body is a [`FetchError`].
    pub async fn fetch(&self, topic: &str, max_results: usize) -> Result<Vec<Value>, FetchError> {
        let url = self.build_query_url(topic, max_results);
        debug!(%url, "querying arXiv");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/atom+xml")
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to fetch arXiv results: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))?;

        let tree = xml_to_value(&body)?;
        Ok(Self::extract_entries(tree))
    }

    /// Pull the entry list out of a parsed feed tree.
    ///
    /// A feed with exactly one match carries a bare entry object rather than
    /// a sequence (schema-less XML conversion cannot tell the two apart); it
    /// is wrapped here so callers always see a list.
    fn extract_entries(mut tree: Value) -> Vec<Value> {
        let entry = tree
            .get_mut("feed")
            .and_then(|feed| feed.get_mut("entry"))
            .map(Value::take);

        match entry {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries,
            Some(single) => vec![single],
        }
    }
}

impl Default for ArxivClient {
    fn default() -> Self {
        Self::new()
    }
}
