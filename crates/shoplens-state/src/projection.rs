//! Projection of the chunk stream into UI-visible state.

use shoplens_core::{InterpretedQuery, ProductResult, SearchRequest, StreamChunk};

/// Ticket identifying one search generation.
///
/// A superseded network stream is not cancelled; its chunks are kept out of
/// visible state by refusing tickets older than the latest `begin_search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Sequence number of this search generation, for log correlation.
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// The three state slots derived from the chunk stream.
///
/// Each slot is overwritten whole when a chunk of its kind arrives; nothing
/// is merged or accumulated across chunks. All slots are owned exclusively
/// by this type and mutated only through its operations.
#[derive(Debug, Default)]
pub struct SearchProjection {
    interpreted: Option<InterpretedQuery>,
    brands: Vec<String>,
    products: Vec<ProductResult>,
    seq: u64,
}

impl SearchProjection {
    /// Create an empty projection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search: clear all three slots and return the ticket for
    /// this generation. Must be called before the first chunk of the new
    /// stream is dispatched, so superseded results never commingle.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.interpreted = None;
        self.brands.clear();
        self.products.clear();
        self.seq += 1;
        SearchTicket(self.seq)
    }

    /// Apply one chunk, overwriting exactly the slot matching its kind.
    ///
    /// Returns false without touching any state when the ticket is stale,
    /// i.e. a newer `begin_search` has happened since it was issued.
    pub fn apply_chunk(&mut self, ticket: SearchTicket, chunk: StreamChunk) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        match chunk {
            StreamChunk::Query(query) => self.interpreted = Some(query),
            StreamChunk::Brands(brands) => self.brands = brands,
            StreamChunk::Products(products) => self.products = products,
        }
        true
    }

    /// Build the follow-up request for a clicked brand facet: the
    /// previously interpreted category (empty string if none) combined with
    /// the given brand filter.
    pub fn brand_search(&self, brand: impl Into<String>) -> SearchRequest {
        let category = self
            .interpreted
            .as_ref()
            .map(|q| q.product_category.clone())
            .unwrap_or_default();
        SearchRequest::new(category).with_brand(brand)
    }

    /// The interpreted query, if one has arrived.
    pub fn interpreted(&self) -> Option<&InterpretedQuery> {
        self.interpreted.as_ref()
    }

    /// Brand facets for the current category, in arrival order.
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Products for the current search, in arrival order.
    pub fn products(&self) -> &[ProductResult] {
        &self.products
    }

    /// Whether the renderer must show an explicit no-results state: a query
    /// has been interpreted but the product list is empty.
    pub fn has_no_results(&self) -> bool {
        self.interpreted.is_some() && self.products.is_empty()
    }
}
