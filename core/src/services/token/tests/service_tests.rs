//! Tests for session token issuance and verification

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};
use pc_shared::config::auth::DEFAULT_JWT_SECRET;
use pc_shared::config::JwtConfig;

fn service(secret: &str) -> TokenService {
    TokenService::new(TokenServiceConfig::with_secret(secret))
}

#[test]
fn test_issue_then_verify_roundtrip() {
    let service = service("test_secret");
    let issued = service.issue("x@y.com").unwrap();

    assert_eq!(issued.max_age_seconds, 7 * 24 * 60 * 60);
    assert_eq!(issued.claims.exp - issued.claims.iat, 7 * 24 * 60 * 60);

    let claims = service.verify(&issued.token).unwrap();
    assert_eq!(claims, issued.claims);
    assert_eq!(claims.email, "x@y.com");
}

#[test]
fn test_issue_requires_email() {
    let service = service("test_secret");
    assert!(matches!(service.issue(""), Err(DomainError::Validation { .. })));
    assert!(matches!(service.issue("   "), Err(DomainError::Validation { .. })));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let issued = service("secret_a").issue("x@y.com").unwrap();
    let err = service("secret_b").verify(&issued.token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidSignature)));
    assert!(err.is_unauthorized());
}

#[test]
fn test_expired_token_is_rejected() {
    let expired_issuer = TokenService::new(TokenServiceConfig {
        token_expiry_seconds: -120,
        ..TokenServiceConfig::with_secret("test_secret")
    });
    let issued = expired_issuer.issue("x@y.com").unwrap();

    let err = service("test_secret").verify(&issued.token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_token_just_past_expiry_gets_no_leeway() {
    let claims = Claims {
        email: "x@y.com".to_string(),
        iat: chrono::Utc::now().timestamp() - 100,
        exp: chrono::Utc::now().timestamp() - 5,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test_secret"),
    )
    .unwrap();

    let err = service("test_secret").verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_garbage_and_empty_tokens_are_rejected() {
    let service = service("test_secret");
    assert!(matches!(
        service.verify("not-a-jwt"),
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
    assert!(matches!(
        service.verify(""),
        Err(DomainError::Token(TokenError::MissingToken))
    ));
}

#[test]
fn test_token_without_exp_is_rejected() {
    #[derive(serde::Serialize)]
    struct NoExpiry {
        email: String,
        iat: i64,
    }
    let token = encode(
        &Header::default(),
        &NoExpiry {
            email: "x@y.com".to_string(),
            iat: 0,
        },
        &EncodingKey::from_secret(b"test_secret"),
    )
    .unwrap();

    let err = service("test_secret").verify(&token).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn test_config_from_jwt_config() {
    let jwt = pc_shared::config::JwtConfig::new("from-env").with_expiry_days(1);
    let config = TokenServiceConfig::from(&jwt);
    assert_eq!(config.jwt_secret, "from-env");
    assert_eq!(config.token_expiry_seconds, 86400);
    assert_eq!(TokenService::new(config).token_lifetime_seconds(), 86400);
}

#[test]
fn test_oversized_lifetime_fails_without_panicking() {
    let jwt = JwtConfig {
        token_expiry: 9_000_000_000_000_000_000,
        ..JwtConfig::new("test_secret")
    };
    let service = TokenService::new(TokenServiceConfig::from(&jwt));

    let err = service.issue("x@y.com").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenGenerationFailed)));
    assert!(!err.is_unauthorized());
}

#[test]
fn test_default_config_uses_shared_placeholder_secret() {
    let config = TokenServiceConfig::default();
    assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
    assert!(JwtConfig::new(config.jwt_secret).is_using_default_secret());
}
