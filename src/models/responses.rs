//! Response DTOs for the payload API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for payload creation (POST /payload)
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayloadResponse {
    /// Payload identifier
    pub id: String,
    /// Whether an existing payload was returned
    pub cached: bool,
}

impl CreatePayloadResponse {
    /// Creates a new CreatePayloadResponse
    pub fn new(id: impl Into<String>, cached: bool) -> Self {
        Self {
            id: id.into(),
            cached,
        }
    }
}

/// Response body for payload retrieval (GET /payload/:id)
#[derive(Debug, Clone, Serialize)]
pub struct GetPayloadResponse {
    /// The interleaved output string
    pub output: String,
}

impl GetPayloadResponse {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
}

impl HealthResponse {
    /// Creates a healthy HealthResponse
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
