//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`].

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App,
};

use pc_core::repositories::ProductRepository;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{
    auth::{jwt::issue_token, logout::logout},
    products::list_products,
    system::{health_check, root},
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: ProductRepository + 'static,
{
    let cors = create_cors(&app_state.cors);
    let token_service = web::Data::from(app_state.token_service.clone());
    let auth = JwtAuth::new().cookie_name(app_state.cookie.name.clone());

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(cors)
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check::<R>))
        .service(
            web::resource("/products")
                .wrap(auth)
                .route(web::get().to(list_products::<R>)),
        )
        .route("/jwt", web::post().to(issue_token::<R>))
        .route("/logout", web::get().to(logout::<R>))
        .default_service(web::route().to(not_found))
}
