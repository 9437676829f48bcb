//! Authentication configuration: JWT signing and the session cookie

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Placeholder secret used when none is configured
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Session token lifetime (7 days)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Longest accepted session token lifetime (10 years)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Name of the cookie carrying the session token
pub const DEFAULT_COOKIE_NAME: &str = "token";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HS256 secret for signing and verifying tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.token_expiry = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// SameSite attribute of the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Cookie path
    pub path: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// SameSite attribute
    pub same_site: SameSitePolicy,

    /// HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}

impl CookieConfig {
    /// Cookie attributes for the given environment.
    ///
    /// Production frontends live on another site, so the cookie must be
    /// `Secure; SameSite=None` to travel on credentialed cross-site requests.
    /// Everywhere else it is pinned to `SameSite=Strict` over plain HTTP.
    pub fn for_environment(env: Environment) -> Self {
        let production = env.is_production();
        Self {
            name: String::from(DEFAULT_COOKIE_NAME),
            path: String::from("/"),
            secure: production,
            same_site: if production {
                SameSitePolicy::None
            } else {
                SameSitePolicy::Strict
            },
            http_only: default_http_only(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env(env: Environment) -> Self {
        Self::from_lookup(env, |key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup<F>(env: Environment, get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = get("ACCESS_TOKEN_SECRET")
            .or_else(|| get("JWT_SECRET"))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());
        let token_expiry = get("JWT_EXPIRY_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECONDS);

        Self {
            jwt: JwtConfig {
                secret,
                token_expiry,
            },
            cookie: CookieConfig::for_environment(env),
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_http_only() -> bool {
    true
}
