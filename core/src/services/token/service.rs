//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service signing and verifying session tokens.
///
/// Tokens are self-contained: validity is decided by signature and expiry
/// alone, so the service holds no per-session state.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a session token for `email`
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The encoded token and its claims
    /// * `Err(DomainError::Validation)` - `email` is blank
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed or the lifetime overflows
    pub fn issue(&self, email: &str) -> Result<IssuedToken, DomainError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "email is required".to_string(),
            });
        }

        let claims = Claims::new(email, self.config.token_expiry_seconds).ok_or_else(|| {
            tracing::error!(
                lifetime = self.config.token_expiry_seconds,
                "Token lifetime overflows the expiry timestamp"
            );
            DomainError::Token(TokenError::TokenGenerationFailed)
        })?;
        let token = self.encode_jwt(&claims)?;
        tracing::debug!(email = %claims.email, exp = claims.exp, "Issued session token");

        Ok(IssuedToken {
            token,
            claims,
            max_age_seconds: self.config.token_expiry_seconds,
        })
    }

    /// Verifies a session token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is expired, wrongly signed, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        if token.is_empty() {
            return Err(DomainError::Token(TokenError::MissingToken));
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::InvalidTokenFormat,
                };
                tracing::warn!("Rejected session token: {}", e);
                DomainError::Token(error)
            })?;

        Ok(token_data.claims)
    }

    /// Lifetime of issued tokens in seconds
    pub fn token_lifetime_seconds(&self) -> i64 {
        self.config.token_expiry_seconds
    }

    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
