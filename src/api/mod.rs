//! API Module
//!
//! HTTP handlers and routing for the payload service REST API.
//!
//! # Endpoints
//! - `POST /payload` - Generate a payload from two string lists
//! - `GET /payload/:id` - Retrieve a payload's output
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
