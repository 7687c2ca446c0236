//! Derived search state projected from the chunk stream.
//!
//! This crate provides:
//! - `SearchProjection` - the three UI-visible state slots
//! - `SearchTicket` - staleness guard for superseded searches

mod projection;

pub use projection::*;
