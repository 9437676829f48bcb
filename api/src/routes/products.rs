use actix_web::{web, HttpResponse};

use pc_core::repositories::ProductRepository;

use crate::dto::ProductQuery;
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for GET /products
///
/// Requires the session cookie (enforced by `JwtAuth`).
///
/// # Query
///
/// - `search`: case-insensitive name substring; empty or missing lists everything
/// - `sort`: `recent` (default) for newest first, any other value for oldest first
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// [{ "_id": "...", "name": "Desk Lamp", "creation_date": "2024-03-01T10:00:00Z", "price": 25 }]
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, expired, or invalid token cookie
/// - 500 Internal Server Error: product store failure
pub async fn list_products<R>(
    state: web::Data<AppState<R>>,
    query: web::Query<ProductQuery>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    R: ProductRepository + 'static,
{
    log::debug!("Product listing requested by {}", auth.email);

    let products = state
        .product_service
        .list_products(query.search.as_deref(), query.sort.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(products))
}
