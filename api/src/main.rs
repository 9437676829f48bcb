use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use pc_api::{app::create_app, config, routes::AppState};
use pc_core::services::{TokenService, TokenServiceConfig};
use pc_infra::{DatabasePool, MySqlProductRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load().context("Invalid configuration")?;
    config::init_logger(&app_config.logging);

    info!(
        "Starting product catalog API ({} environment)",
        app_config.environment
    );
    if app_config.auth.jwt.is_using_default_secret() {
        log::warn!("ACCESS_TOKEN_SECRET is not set; using the development placeholder");
    }

    let database = DatabasePool::new(&app_config.database)
        .await
        .context("Failed to connect to the product store")?;
    info!("{}", database.get_statistics());

    let repository = Arc::new(MySqlProductRepository::from_database(&database));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&app_config.auth.jwt)));
    let app_state = web::Data::new(AppState::new(
        repository,
        token_service,
        app_config.auth.cookie.clone(),
        app_config.cors.clone(),
    ));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await;

    database.close().await;
    info!("Server stopped");

    result.context("HTTP server error")
}
