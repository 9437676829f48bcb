//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{RepositoryError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Whether the error must surface as a 401.
    ///
    /// Every token rejection counts, except a failure to sign one, which is
    /// a server fault.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            DomainError::Unauthorized => true,
            DomainError::Token(TokenError::TokenGenerationFailed) => false,
            DomainError::Token(_) => true,
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
