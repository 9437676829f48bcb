use actix_web::{web, HttpResponse};
use validator::Validate;

use pc_core::repositories::ProductRepository;
use pc_shared::types::SuccessResponse;

use crate::dto::auth::IssueTokenRequest;
use crate::handlers::error::ApiError;
use crate::routes::AppState;

use super::cookies::session_cookie;

/// Handler for POST /jwt
///
/// Signs a session token for the given email and returns it in the
/// HttpOnly `token` cookie.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing body or invalid email
/// - 500 Internal Server Error: token signing failure
pub async fn issue_token<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<IssueTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: ProductRepository + 'static,
{
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(format!("Invalid request: {}", e)))?;

    let issued = state.token_service.issue(&request.email)?;
    log::info!("Issued session token for {}", issued.claims.email);

    let cookie = session_cookie(&state.cookie, issued.token, issued.max_age_seconds);
    Ok(HttpResponse::Ok().cookie(cookie).json(SuccessResponse::ok()))
}
