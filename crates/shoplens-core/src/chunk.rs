//! Stream chunk classification.

use serde::Deserialize;

use crate::{InterpretedQuery, ProductResult, RawProduct};

/// One unit of the streamed response as it appears on the wire: a loose
/// record where at most one field is expected to be populated. Unknown
/// fields (such as run identifiers) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChunk {
    #[serde(default)]
    pub query: Option<InterpretedQuery>,
    #[serde(default)]
    pub available_brands: Option<Vec<String>>,
    #[serde(default)]
    pub products: Option<Vec<RawProduct>>,
}

impl RawChunk {
    /// Classify the record into a chunk carrying exactly one payload kind.
    ///
    /// The first populated field wins, in query/brands/products order; a
    /// record with none of them yields nothing and is ignored by callers.
    pub fn classify(self) -> Option<StreamChunk> {
        if let Some(query) = self.query {
            return Some(StreamChunk::Query(query));
        }
        if let Some(brands) = self.available_brands {
            return Some(StreamChunk::Brands(brands));
        }
        if let Some(products) = self.products {
            let products = products.into_iter().map(ProductResult::from_raw).collect();
            return Some(StreamChunk::Products(products));
        }
        None
    }
}

/// A decoded stream chunk with exactly one payload kind.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamChunk {
    /// The interpreted query.
    Query(InterpretedQuery),
    /// Brand facets for the interpreted category; delivered as a complete
    /// set, possibly empty.
    Brands(Vec<String>),
    /// The product batch; delivered complete, not incrementally appended.
    Products(Vec<ProductResult>),
}

impl StreamChunk {
    /// Payload kind name, for logging and section naming.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamChunk::Query(_) => "query",
            StreamChunk::Brands(_) => "brands",
            StreamChunk::Products(_) => "products",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(json: &str) -> Option<StreamChunk> {
        serde_json::from_str::<RawChunk>(json).unwrap().classify()
    }

    #[test]
    fn test_query_chunk() {
        let chunk = classify(r#"{"query":{"product_category":"shoes"}}"#).unwrap();
        assert_eq!(chunk.kind(), "query");
    }

    #[test]
    fn test_brands_chunk() {
        let chunk = classify(r#"{"available_brands":["Nike","Adidas"]}"#).unwrap();
        match chunk {
            StreamChunk::Brands(brands) => assert_eq!(brands, vec!["Nike", "Adidas"]),
            other => panic!("expected brands, got {:?}", other),
        }
    }

    #[test]
    fn test_products_chunk_normalizes_entries() {
        let chunk = classify(
            r#"{"products":[{"product_id":"1","product_name_en":"Shoe A","sale_price":1200}]}"#,
        )
        .unwrap();
        match chunk {
            StreamChunk::Products(products) => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].name, "Shoe A");
            }
            other => panic!("expected products, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_record_ignored() {
        assert_eq!(classify("{}"), None);
        assert_eq!(classify(r#"{"run_id":"abc"}"#), None);
    }

    #[test]
    fn test_query_wins_over_other_fields() {
        // A chunk must carry exactly one payload; if the wire ever violates
        // that, the first populated field in query/brands/products order wins.
        let chunk = classify(
            r#"{"query":{"product_category":"shoes"},"available_brands":["Nike"]}"#,
        )
        .unwrap();
        assert_eq!(chunk.kind(), "query");
    }
}
