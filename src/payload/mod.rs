//! Payload Module
//!
//! Generation, deduplication and storage of interleaved payloads.

mod generator;
mod hash;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use generator::{Generated, PayloadGenerator};
pub use hash::{compute_input_hash, interleave, validate_lists, OUTPUT_SEPARATOR};
pub use store::{Payload, PayloadStore};
