//! Core data model for the ShopLens streaming product search.
//!
//! This crate provides:
//! - `SearchRequest` - outbound search payload
//! - `InterpretedQuery` / `StreamChunk` - typed stream payloads
//! - `ProductResult` - normalized product entries
//! - `sanitize` - HTML escaping and rich-text sanitization

mod chunk;
mod product;
mod query;
mod request;
pub mod sanitize;

pub use chunk::*;
pub use product::*;
pub use query::*;
pub use request::*;
