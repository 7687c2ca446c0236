//! Structured logging for search requests.
//!
//! This crate provides:
//! - `SearchLogger` - search-scoped structured logging to stderr

mod logging;

pub use logging::*;
