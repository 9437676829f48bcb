//! Cookie-based JWT authentication middleware.
//!
//! The session token travels in an HttpOnly cookie set by `POST /jwt`. The
//! middleware reads it, verifies it with the core [`TokenService`] and injects
//! an [`AuthContext`] into the request. Any failure short-circuits with a 401
//! and the wrapped handler never runs.
//!
//! The token service is taken from the middleware itself when configured with
//! [`JwtAuth::with_token_service`], otherwise from `web::Data<TokenService>` in
//! app data.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use pc_core::{
    domain::entities::Claims,
    errors::{DomainError, TokenError},
    services::TokenService,
};
use pc_shared::config::auth::DEFAULT_COOKIE_NAME;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::ApiError;

/// Authenticated session injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Email the token was issued for
    pub email: String,
    /// Issued-at (Unix seconds)
    pub issued_at: i64,
    /// Expiry (Unix seconds)
    pub expires_at: i64,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    cookie_name: String,
    token_service: Option<Arc<TokenService>>,
}

impl JwtAuth {
    /// Reads the default `token` cookie and the token service from app data
    pub fn new() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            token_service: None,
        }
    }

    /// Uses a specific token service instead of the one in app data
    pub fn with_token_service(mut self, token_service: Arc<TokenService>) -> Self {
        self.token_service = Some(token_service);
        self
    }

    /// Reads the token from another cookie
    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            cookie_name: Rc::from(self.cookie_name.as_str()),
            token_service: self.token_service.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    cookie_name: Rc<str>,
    token_service: Option<Arc<TokenService>>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let cookie_name = Rc::clone(&self.cookie_name);
        let token_service = self.token_service.clone().or_else(|| {
            req.app_data::<web::Data<TokenService>>()
                .map(|data| data.clone().into_inner())
        });

        Box::pin(async move {
            let verified = match token_service {
                Some(token_service) => authenticate(&req, &cookie_name, &token_service),
                None => {
                    log::error!("JWT verification not configured: no TokenService in app data");
                    Err(DomainError::Unauthorized)
                }
            };

            match verified {
                Ok(auth_context) => {
                    req.extensions_mut().insert(auth_context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    log::debug!("Rejected {} {}: {}", req.method(), req.path(), e);
                    let response = ApiError::Unauthorized.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Verifies the session cookie of `req`
fn authenticate(
    req: &ServiceRequest,
    cookie_name: &str,
    token_service: &TokenService,
) -> Result<AuthContext, DomainError> {
    let token = extract_cookie_token(req, cookie_name)
        .ok_or(DomainError::Token(TokenError::MissingToken))?;
    token_service.verify(&token).map(AuthContext::from)
}

/// Reads a non-empty token from the named cookie
fn extract_cookie_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    req.cookie(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Extractor for handlers behind [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized.into());

        ready(result)
    }
}
