//! Utility modules supporting the relay.
//!
//! - [`HttpClient`]: shared HTTP client with bounded timeouts
//! - [`xml_to_value`]: schema-less XML to JSON tree conversion
//! - [`XmlTreeError`]: errors produced during XML conversion

mod http;
mod xml;

pub use http::HttpClient;
pub use xml::{xml_to_value, XmlTreeError};
