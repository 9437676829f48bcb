//! Shared configuration and common types for the product catalog server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - Error and success response bodies

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CookieConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig,
    JwtConfig, SameSitePolicy, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, MessageResponse};
pub use types::SuccessResponse;
