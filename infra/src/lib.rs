//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer of the product catalog,
//! providing the concrete MySQL-backed product store behind the core
//! `ProductRepository` trait.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use pc_core::errors::{DomainError, RepositoryError};

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlProductRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        let repository_error = match err {
            InfrastructureError::Database(
                e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)),
            ) => RepositoryError::Unavailable(e.to_string()),
            InfrastructureError::Database(
                e @ (sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)),
            ) => RepositoryError::Decode(e.to_string()),
            InfrastructureError::Database(e) => RepositoryError::Query(e.to_string()),
            InfrastructureError::Config(message) => RepositoryError::Unavailable(message),
        };
        DomainError::Repository(repository_error)
    }
}
