//! arXiv upstream access.

mod arxiv;

pub use arxiv::{ArxivClient, ARXIV_API_URL};

/// Errors that can occur while fetching from the upstream API.
///
/// Every variant is surfaced to the caller as the same generic server
/// failure; the distinction exists for diagnostics only.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network or transport error
    #[error("network error: {0}")]
    Network(String),

    /// Upstream responded with a non-success status
    #[error("arXiv API returned status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body could not be parsed as XML
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<crate::utils::XmlTreeError> for FetchError {
    fn from(err: crate::utils::XmlTreeError) -> Self {
        FetchError::Parse(err.to_string())
    }
}
