//! Product search page - streaming search workload.
//!
//! Streams the page shell immediately, then renders one section per chunk
//! as the remote stream delivers the interpreted query, the brand facets,
//! and the product batch. A stream that ends without products after an
//! interpreted query produces an explicit no-results section.

pub mod params;
pub mod sections;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use params::request_from_query_string;
