//! Token service module for session JWT management
//!
//! This module handles token-related operations:
//! - Signing a session token for an email subject
//! - Verifying signature and expiry of a presented token

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
