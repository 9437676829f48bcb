//! Shared fixtures for the HTTP integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{cookie::Cookie, dev::ServiceResponse, web};
use chrono::{TimeZone, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use pc_api::routes::AppState;
use pc_core::domain::entities::Product;
use pc_core::repositories::MockProductRepository;
use pc_core::services::{TokenService, TokenServiceConfig};
use pc_shared::config::{CookieConfig, CorsConfig, Environment};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::with_secret(TEST_SECRET)))
}

pub fn app_state(
    repository: MockProductRepository,
    environment: Environment,
) -> web::Data<AppState<MockProductRepository>> {
    web::Data::new(AppState::new(
        Arc::new(repository),
        token_service(),
        CookieConfig::for_environment(environment),
        CorsConfig::default(),
    ))
}

/// Four products created on distinct days, inserted out of order
pub fn catalog() -> Vec<Product> {
    let day = |d: u32| Utc.with_ymd_and_hms(2024, 3, d, 10, 0, 0).unwrap();
    vec![
        Product::new("Brass Desk Lamp", day(2)).with_attribute("price", 40),
        Product::new("Oak Chair", day(4)).with_attribute("price", 120),
        Product::new("desk organizer", day(1)).with_attribute("price", 15),
        Product::new("Floor Lamp 100% LED", day(3)).with_attribute("price", 80),
    ]
}

/// A valid session cookie signed with [`TEST_SECRET`]
pub fn session_cookie(email: &str) -> Cookie<'static> {
    let issued = token_service().issue(email).unwrap();
    Cookie::new("token", issued.token)
}

/// A token signed with `secret` whose expiry is `exp_offset` seconds from now
pub fn raw_token(secret: &str, exp_offset: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = serde_json::json!({
        "email": "someone@example.com",
        "iat": now - 3600,
        "exp": now + exp_offset,
    });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

/// The `token` cookie set by a response, if any
pub fn token_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "token")
        .map(|c| c.into_owned())
}

/// Product names of a `/products` JSON body, in order
pub fn names(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}
