//! Tests for `GET /api/token`

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::TestContext;
use ud_api::create_app;
use ud_core::services::TokenStore;

#[actix_web::test]
async fn test_issue_token_returns_printable_token() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/token").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().unwrap();
    // 100 random bytes, standard base64
    assert_eq!(token.len(), 136);
    assert!(ctx.tokens.validate(token).await.unwrap());
}

#[actix_web::test]
async fn test_second_token_replaces_first() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let first: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/token").to_request(),
    )
    .await;
    let second: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/token").to_request(),
    )
    .await;

    let first = first["token"].as_str().unwrap();
    let second = second["token"].as_str().unwrap();
    assert_ne!(first, second);
    assert!(!ctx.tokens.validate(first).await.unwrap());
    assert!(ctx.tokens.validate(second).await.unwrap());
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
