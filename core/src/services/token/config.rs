//! Configuration for the token service

use jsonwebtoken::Algorithm;
use pc_shared::config::auth::DEFAULT_JWT_SECRET;
use pc_shared::config::JwtConfig;

use crate::domain::entities::token::TOKEN_EXPIRY_DAYS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

impl TokenServiceConfig {
    /// HS256 configuration with the default 7 day lifetime
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: config.token_expiry,
        }
    }
}
