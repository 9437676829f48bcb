use actix_web::{http::header::ContentType, web, HttpResponse};

use pc_core::repositories::ProductRepository;

use crate::dto::HealthResponse;

use super::AppState;

/// Handler for GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("running server")
}

/// Handler for GET /health
///
/// Always 200; `database` reports whether the product store answered a ping.
pub async fn health_check<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: ProductRepository + 'static,
{
    let reachable = state.product_service.is_store_reachable().await;
    if !reachable {
        log::warn!("Health check: product store unreachable");
    }
    HttpResponse::Ok().json(HealthResponse::new(reachable))
}
