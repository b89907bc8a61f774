//! Request DTOs for the payload API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for payload creation (POST /payload)
///
/// # Fields
/// - `list1`: First list of strings
/// - `list2`: Second list of strings, same length as `list1`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayloadRequest {
    /// First list of strings
    pub list1: Vec<String>,
    /// Second list of strings
    pub list2: Vec<String>,
}
