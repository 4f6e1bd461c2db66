//! Request and response models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound search request.
///
/// `max_results` is passed straight through to the upstream page-size limit;
/// no range validation beyond JSON deserialization is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Topic searched against paper titles
    pub topic: String,

    /// Maximum number of results to return
    pub max_results: usize,
}

/// Entries matching a query, in upstream relevance order.
///
/// Each entry is the upstream record verbatim, as a generic JSON tree; no
/// fixed schema is enforced on its fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    /// Matching entries in document order
    pub results: Vec<Value>,
}

impl ResultSet {
    /// Create a result set from a list of entries
    pub fn new(results: Vec<Value>) -> Self {
        Self { results }
    }

    /// Create an empty result set
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_request_wire_format() {
        let request: QueryRequest =
            serde_json::from_value(json!({ "topic": "quantum", "maxResults": 2 })).unwrap();
        assert_eq!(request.topic, "quantum");
        assert_eq!(request.max_results, 2);
    }

    #[test]
    fn test_query_request_rejects_missing_fields() {
        let result: Result<QueryRequest, _> = serde_json::from_value(json!({ "topic": "q" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_set_serialization() {
        let set = ResultSet::new(vec![json!({ "id": "1" }), json!({ "id": "2" })]);
        let serialized = serde_json::to_value(&set).unwrap();
        assert_eq!(
            serialized,
            json!({ "results": [{ "id": "1" }, { "id": "2" }] })
        );
    }

    #[test]
    fn test_empty_result_set() {
        let set = ResultSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({ "results": [] })
        );
    }
}
