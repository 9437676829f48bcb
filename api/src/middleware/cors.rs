//! CORS middleware configuration for the browser frontends.
//!
//! Only origins on the configured allow-list may call the API, and the session
//! cookie is only usable cross-origin because credentials are enabled.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use pc_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the allow-list in `config`.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(config.max_age);

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
