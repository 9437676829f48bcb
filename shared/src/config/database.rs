//! Database configuration module

use serde::{Deserialize, Serialize};

/// Database configuration for the MySQL product store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://root@localhost:3306/product_store"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: default_idle_timeout(),
            max_lifetime: default_max_lifetime(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    ///
    /// `DATABASE_URL` wins; otherwise the URL is assembled from `DB_USER`,
    /// `DB_PASS`, `DB_HOST` and `DB_NAME`.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = get("DATABASE_URL").unwrap_or_else(|| {
            build_url(
                &get("DB_USER").unwrap_or_else(|| "root".to_string()),
                &get("DB_PASS").unwrap_or_default(),
                &get("DB_HOST").unwrap_or_else(|| "localhost:3306".to_string()),
                &get("DB_NAME").unwrap_or_else(|| "product_store".to_string()),
            )
        });
        let max_connections = get("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let connect_timeout = get("DATABASE_CONNECT_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            url,
            max_connections,
            connect_timeout,
            ..Default::default()
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

fn build_url(user: &str, pass: &str, host: &str, name: &str) -> String {
    if pass.is_empty() {
        format!("mysql://{}@{}/{}", user, host, name)
    } else {
        format!("mysql://{}:{}@{}/{}", user, pass, host, name)
    }
}

fn default_idle_timeout() -> u64 {
    600 // 10 minutes
}

fn default_max_lifetime() -> u64 {
    1800 // 30 minutes
}
