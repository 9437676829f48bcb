//! HTTP route handlers
//!
//! - `auth`: session token issuance and logout
//! - `products`: the authenticated product listing
//! - `system`: liveness endpoints

pub mod auth;
pub mod products;
pub mod system;

use std::sync::Arc;

use pc_core::repositories::ProductRepository;
use pc_core::services::{ProductService, TokenService};
use pc_shared::config::{CookieConfig, CorsConfig};

/// Application state shared by every worker
pub struct AppState<R: ProductRepository> {
    pub product_service: Arc<ProductService<R>>,
    pub token_service: Arc<TokenService>,
    pub cookie: CookieConfig,
    pub cors: CorsConfig,
}

impl<R: ProductRepository> AppState<R> {
    pub fn new(
        repository: Arc<R>,
        token_service: Arc<TokenService>,
        cookie: CookieConfig,
        cors: CorsConfig,
    ) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(repository)),
            token_service,
            cookie,
            cors,
        }
    }
}
