//! Integration tests for POST /jwt and GET /logout

mod common;

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    http::{header, StatusCode},
    test,
};
use pc_api::app::create_app;
use pc_core::repositories::MockProductRepository;
use pc_shared::config::Environment;

use common::{app_state, catalog, token_cookie};

#[actix_web::test]
async fn test_issue_token_sets_cookie() {
    let app = test::init_service(create_app(app_state(
        MockProductRepository::new(),
        Environment::Development,
    )))
    .await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(serde_json::json!({ "email": "x@y.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = token_cookie(&resp).expect("token cookie");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "success": true }));
}

#[actix_web::test]
async fn test_cookie_attributes_follow_environment() {
    let cases = [
        (Environment::Development, SameSite::Strict, false),
        (Environment::Staging, SameSite::Strict, false),
        (Environment::Production, SameSite::None, true),
    ];

    for (environment, same_site, secure) in cases {
        let app = test::init_service(create_app(app_state(MockProductRepository::new(), environment))).await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(serde_json::json!({ "email": "x@y.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let cookie = token_cookie(&resp).expect("token cookie");
        assert_eq!(cookie.same_site(), Some(same_site), "{}", environment);
        assert_eq!(cookie.secure().unwrap_or(false), secure, "{}", environment);
    }
}

#[actix_web::test]
async fn test_issue_token_set_cookie_header() {
    let app = test::init_service(create_app(app_state(
        MockProductRepository::new(),
        Environment::Production,
    )))
    .await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(serde_json::json!({ "email": "x@y.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    for attribute in ["HttpOnly", "Secure", "SameSite=None", "Path=/", "Max-Age=604800"] {
        assert!(set_cookie.contains(attribute), "missing {} in {}", attribute, set_cookie);
    }
}

#[actix_web::test]
async fn test_issue_token_rejects_invalid_bodies() {
    let app = test::init_service(create_app(app_state(
        MockProductRepository::new(),
        Environment::Development,
    )))
    .await;

    for body in [
        serde_json::json!({ "email": "not-an-email" }),
        serde_json::json!({ "email": "" }),
        serde_json::json!({}),
    ] {
        let req = test::TestRequest::post().uri("/jwt").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {}", body);
        assert!(token_cookie(&resp).is_none());
    }

    let req = test::TestRequest::post()
        .uri("/jwt")
        .insert_header(header::ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
}

#[actix_web::test]
async fn test_logout_clears_cookie() {
    let app = test::init_service(create_app(app_state(
        MockProductRepository::new(),
        Environment::Development,
    )))
    .await;

    // No session needed
    let req = test::TestRequest::get().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = token_cookie(&resp).expect("removal cookie");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "success": true }));
}

#[actix_web::test]
async fn test_login_list_logout_flow() {
    let app = test::init_service(create_app(app_state(
        MockProductRepository::with_products(catalog()),
        Environment::Development,
    )))
    .await;

    // Issue
    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(serde_json::json!({ "email": "x@y.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let session = token_cookie(&resp).expect("token cookie");

    // List with the issued cookie
    let req = test::TestRequest::get()
        .uri("/products")
        .cookie(Cookie::new("token", session.value().to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 4);

    // Logout replaces the cookie with an empty one
    let req = test::TestRequest::get()
        .uri("/logout")
        .cookie(Cookie::new("token", session.value().to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cleared = token_cookie(&resp).expect("removal cookie");

    let req = test::TestRequest::get()
        .uri("/products")
        .cookie(Cookie::new("token", cleared.value().to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
