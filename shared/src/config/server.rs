//! Server configuration module

use serde::{Deserialize, Serialize};

/// Origins allowed to make credentialed requests when none are configured
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    /// Create from an arbitrary variable lookup
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = get("SERVER_HOST").unwrap_or(defaults.host);
        let port = get("PORT")
            .or_else(|| get("SERVER_PORT"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);
        let workers = get("SERVER_WORKERS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.workers);

        Self { host, port, workers }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,

    /// Allow credentials
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            allow_credentials: default_allow_credentials(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create from an arbitrary variable lookup
    ///
    /// `ALLOWED_ORIGINS` is a comma separated list; blank entries are skipped.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(origins) = get("ALLOWED_ORIGINS") {
            let parsed: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
            if !parsed.is_empty() {
                config.allowed_origins = parsed;
            }
        }
        if let Some(max_age) = get("CORS_MAX_AGE").and_then(|v| v.parse().ok()) {
            config.max_age = max_age;
        }

        config
    }
}

fn default_allow_credentials() -> bool {
    true
}

fn default_max_age() -> usize {
    3600
}
