//! Shared error response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response structure for non-authentication failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bare `{"message": ...}` body returned by the authentication gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The body sent with every 401
    pub fn unauthorized() -> Self {
        Self::new(error_codes::UNAUTHORIZED_MESSAGE)
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const BAD_REQUEST: &str = "bad_request";
    pub const INTERNAL_ERROR: &str = "internal_error";

    /// Message carried by every 401 response
    pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";
}
