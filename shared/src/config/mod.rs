//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and session cookie attributes
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, CookieConfig, JwtConfig, SameSitePolicy};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Errors raised when a loaded configuration is unusable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ACCESS_TOKEN_SECRET must be set in {0}")]
    DefaultSecret(Environment),

    #[error("Invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self::from_lookup(environment, |key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(environment: Environment, get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment,
            server: ServerConfig::from_lookup(&get),
            database: DatabaseConfig::from_lookup(&get),
            auth: AuthConfig::from_lookup(environment, &get),
            cors: CorsConfig::from_lookup(&get),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Reject configurations that must not be served
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecret(self.environment));
        }
        if self.auth.jwt.token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                field: "JWT_EXPIRY_SECONDS".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.auth.jwt.token_expiry > auth::MAX_TOKEN_EXPIRY_SECONDS {
            return Err(ConfigError::Invalid {
                field: "JWT_EXPIRY_SECONDS".to_string(),
                message: format!("must not exceed {} seconds", auth::MAX_TOKEN_EXPIRY_SECONDS),
            });
        }
        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Invalid {
                field: "ALLOWED_ORIGINS".to_string(),
                message: "at least one origin is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |k| vars.get(k).map(|v| v.to_string())
    }

    #[test]
    fn test_default_config_is_valid_in_development() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_requires_secret() {
        let vars = HashMap::new();
        let config = AppConfig::from_lookup(Environment::Production, lookup(&vars));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DefaultSecret(Environment::Production))
        );

        let vars: HashMap<&str, &str> = [("ACCESS_TOKEN_SECRET", "prod-secret")].into();
        let config = AppConfig::from_lookup(Environment::Production, lookup(&vars));
        assert!(config.validate().is_ok());
        assert!(config.auth.cookie.secure);
    }

    #[test]
    fn test_non_positive_expiry_is_rejected() {
        let vars: HashMap<&str, &str> = [("JWT_EXPIRY_SECONDS", "0")].into();
        let config = AppConfig::from_lookup(Environment::Development, lookup(&vars));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_expiry_above_ten_years_is_rejected() {
        let vars: HashMap<&str, &str> = [("JWT_EXPIRY_SECONDS", "9000000000000000000")].into();
        let config = AppConfig::from_lookup(Environment::Development, lookup(&vars));
        assert_eq!(config.auth.jwt.token_expiry, 9_000_000_000_000_000_000);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "JWT_EXPIRY_SECONDS"
        ));

        let ten_years = auth::MAX_TOKEN_EXPIRY_SECONDS.to_string();
        let vars: HashMap<&str, &str> = [("JWT_EXPIRY_SECONDS", ten_years.as_str())].into();
        let config = AppConfig::from_lookup(Environment::Development, lookup(&vars));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_wires_every_section() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "5050"),
            ("DB_NAME", "catalog"),
            ("ALLOWED_ORIGINS", "https://shop.example.com"),
        ]
        .into();
        let config = AppConfig::from_lookup(Environment::Staging, lookup(&vars));
        assert_eq!(config.server.port, 5050);
        assert!(config.database.url.ends_with("/catalog"));
        assert_eq!(config.cors.allowed_origins, vec!["https://shop.example.com"]);
        assert_eq!(config.logging.level, "info");
    }
}
