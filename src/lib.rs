//! Payload Cache - uppercases, interleaves and deduplicates string list payloads
//!
//! Per-string transformations and generated payloads are both persisted in
//! SQLite, so identical inputs are never recomputed.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod payload;
pub mod transform;

pub use api::AppState;
pub use config::Config;
pub use error::{AppError, Result};
