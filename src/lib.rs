//! # arXiv Relay
//!
//! A small HTTP service that forwards topic searches to the arXiv API and
//! returns the matching entries as JSON.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Request and response types (QueryRequest, ResultSet)
//! - [`source`]: arXiv upstream client and fetch errors
//! - [`server`]: HTTP routes
//! - [`utils`]: HTTP client and XML tree conversion
//! - [`config`]: Configuration management

pub mod config;
pub mod models;
pub mod server;
pub mod source;
pub mod utils;

// Re-export commonly used types
pub use models::{QueryRequest, ResultSet};
pub use source::{ArxivClient, FetchError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
