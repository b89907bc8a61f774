//! Transform Module
//!
//! Per-string uppercase transformation with a durable result cache.

mod cache;

pub use cache::{uppercase, CachedTransformation, TransformCache};
