//! Tests for `POST /api/users`

mod common;

use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    http::{header, StatusCode},
    test,
};
use serde_json::{json, Value};

use common::{jpeg_bytes, registration_form, MultipartBody, TestContext, APP_URL};
use ud_api::create_app;
use ud_core::services::TokenStore;

async fn mint(ctx: &TestContext) -> String {
    ctx.tokens.mint().await.unwrap()
}

fn post_users(form: MultipartBody, token: Option<&str>) -> test::TestRequest {
    let (content_type, body) = form.finish();
    let mut req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body);
    if let Some(token) = token {
        req = req.insert_header((header::AUTHORIZATION, format!("Bearer {}", token)));
    }
    req
}

async fn read<B: MessageBody>(resp: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn test_missing_token_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = post_users(registration_form(1), None).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "Token is required."}));
    assert!(ctx.users.is_empty().await);
    assert_eq!(ctx.transformer.call_count(), 0);
    assert_eq!(ctx.private_files() + ctx.public_files(), 0);
}

#[actix_web::test]
async fn test_wrong_token_is_forbidden() {
    let ctx = TestContext::new();
    mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = post_users(registration_form(1), Some("not-the-token")).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token.");
    assert!(ctx.users.is_empty().await);
    assert_eq!(ctx.public_files(), 0);
}

#[actix_web::test]
async fn test_successful_registration() {
    let ctx = TestContext::new();
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = post_users(registration_form(7), Some(&token)).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let user = &body["user"];
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Registrant 7");
    assert_eq!(user["email"], "registrant7@example.com");
    assert_eq!(user["phone"], "+380100000007");
    assert_eq!(user["position_id"], 3);
    assert_eq!(user["position"], "Security");

    let photo_url = user["photo"].as_str().unwrap();
    let prefix = format!("{}/storage/photos/", APP_URL);
    assert!(photo_url.starts_with(&prefix), "{}", photo_url);
    assert!(photo_url.ends_with(".jpg"));

    assert_eq!(ctx.public_files(), 1);
    assert_eq!(ctx.private_files(), 0);
    assert_eq!(ctx.transformer.call_count(), 1);
    assert_eq!(ctx.transformer.calls()[0].1, 70);

    // Token is consumed
    assert!(!ctx.tokens.validate(&token).await.unwrap());

    // The stored user reads back identically
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/users/1").to_request()).await;
    let shown: Value = test::read_body_json(resp).await;
    assert_eq!(&shown["user"], user);

    // The photo is served from public storage
    let path = &photo_url[APP_URL.len()..];
    let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_token_admits_only_one_registration() {
    let ctx = TestContext::new();
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = post_users(registration_form(1), Some(&token)).to_request();
    let (status, _) = read(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::CREATED);

    let req = post_users(registration_form(2), Some(&token)).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token.");
    assert_eq!(ctx.users.len().await, 1);
}

#[actix_web::test]
async fn test_duplicate_email_fails_validation_and_keeps_token() {
    let ctx = TestContext::new();
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = post_users(registration_form(1), Some(&token)).to_request();
    let (status, _) = read(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::CREATED);

    let token = mint(&ctx).await;
    let form = MultipartBody::new()
        .text("name", "Another Person")
        .text("email", "registrant1@example.com")
        .text("phone", "+380100000001")
        .text("position_id", "1")
        .file("photo", "avatar.jpg", "image/jpeg", &jpeg_bytes(80, 80));
    let req = post_users(form, Some(&token)).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["email"], json!(["User with this email already exists."]));
    assert_eq!(body["errors"]["phone"], json!(["User with this phone already exists."]));
    assert_eq!(ctx.users.len().await, 1);
    assert_eq!(ctx.public_files(), 1);
    assert!(ctx.tokens.validate(&token).await.unwrap());
}

#[actix_web::test]
async fn test_every_field_is_reported() {
    let ctx = TestContext::new();
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let form = MultipartBody::new()
        .text("name", "A")
        .text("email", "not-an-email")
        .text("phone", "0501234567")
        .text("position_id", "99")
        .file("photo", "tiny.jpg", "image/jpeg", &jpeg_bytes(40, 40));
    let req = post_users(form, Some(&token)).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 5);
    assert_eq!(body["errors"]["name"], json!(["The name must be at least 2 characters."]));
    assert_eq!(body["errors"]["position_id"], json!(["The selected position id is invalid."]));
    assert_eq!(body["errors"]["photo"], json!(["The photo must be at least 70px by 70px."]));
    assert_eq!(ctx.transformer.call_count(), 0);
}

#[actix_web::test]
async fn test_non_multipart_body_reports_required_fields() {
    let ctx = TestContext::new();
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(json!({"name": "Ignored"}))
        .to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["name"], json!(["The name is required."]));
    assert_eq!(body["errors"]["photo"], json!(["The photo is required."]));
}

#[actix_web::test]
async fn test_optimization_failure_leaves_no_files() {
    let ctx = TestContext::new();
    ctx.transformer.set_failure(Some("Your monthly limit has been exceeded".to_string()));
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = post_users(registration_form(1), Some(&token)).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to upload and optimize photo.");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Your monthly limit has been exceeded"));
    assert!(ctx.users.is_empty().await);
    assert_eq!(ctx.private_files() + ctx.public_files(), 0);
    assert!(ctx.tokens.validate(&token).await.unwrap());
}

#[actix_web::test]
async fn test_persistence_failure_is_processing_error() {
    let ctx = TestContext::new();
    ctx.users
        .set_create_failure(Some("Deadlock found when trying to get lock".to_string()))
        .await;
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = post_users(registration_form(1), Some(&token)).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An error occurred while processing the request.");
    assert_eq!(body["error"], "Deadlock found when trying to get lock");
    assert_eq!(ctx.public_files(), 0);
    assert!(ctx.tokens.validate(&token).await.unwrap());
}

#[actix_web::test]
async fn test_oversized_body_is_rejected() {
    let ctx = TestContext::new();
    let token = mint(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let limit = ctx.state.max_payload_size;
    let form = MultipartBody::new().file("photo", "huge.jpg", "image/jpeg", &vec![0u8; limit + 1]);
    let req = post_users(form, Some(&token)).to_request();
    let (status, body) = read(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
    assert_eq!(ctx.public_files() + ctx.private_files(), 0);
}
