//! Streaming consumer for the remote search response.
//!
//! This crate provides:
//! - `ChunkDecoder` - incremental frame decoder for the event stream
//! - `ChunkStream` - lazy `Stream` of decoded chunks in arrival order
//! - `StreamingSearchClient` - opens one streaming request per search
//! - `SectionSink` / `PageShell` - shell-first write side of the page

mod client;
mod decoder;
mod error;
mod shell;
mod sink;

pub use client::*;
pub use decoder::*;
pub use error::*;
pub use shell::*;
pub use sink::*;
