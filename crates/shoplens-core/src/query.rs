//! Server-side interpretation of the free-text query.

use serde::{Deserialize, Deserializer, Serialize};

/// The remote service's structured understanding of the search text.
///
/// Produced at most once per stream; replaces any prior value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    /// Category label extracted from the query.
    pub product_category: String,
    /// Brand label, if the service extracted one. The wire sends an empty
    /// string when no brand was found; that is normalized to `None`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub brand: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
