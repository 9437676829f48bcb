use actix_web::{web, HttpResponse};

use pc_core::repositories::ProductRepository;
use pc_shared::types::SuccessResponse;

use crate::routes::AppState;

use super::cookies::removal_cookie;

/// Handler for GET /logout
///
/// Clears the session cookie. Tokens are stateless, so nothing is revoked
/// server-side and the call always succeeds.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true
/// }
/// ```
pub async fn logout<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: ProductRepository + 'static,
{
    log::debug!("Clearing session cookie");
    HttpResponse::Ok()
        .cookie(removal_cookie(&state.cookie))
        .json(SuccessResponse::ok())
}
