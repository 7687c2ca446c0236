//! Outbound search request payload.

use serde::Serialize;

/// A search request: free text entered by the user plus an optional brand
/// filter. Immutable per request; created at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Free-text query.
    pub query: String,
    /// Optional brand filter; omitted from the payload when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl SearchRequest {
    /// Create a request from free text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            brand: None,
        }
    }

    /// Set the brand filter.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Whether this request should be sent at all.
    ///
    /// Empty or whitespace-only input is silently ignored by callers; no
    /// network call is issued and no error is reported.
    pub fn is_searchable(&self) -> bool {
        !self.query.trim().is_empty()
    }
}
