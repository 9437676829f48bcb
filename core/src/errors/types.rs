//! Error types for token handling and product storage

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token missing")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Errors raised by product repositories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Product store unavailable: {0}")]
    Unavailable(String),

    #[error("Product query failed: {0}")]
    Query(String),

    #[error("Malformed product record: {0}")]
    Decode(String),
}
