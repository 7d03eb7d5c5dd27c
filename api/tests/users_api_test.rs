//! Tests for `GET /api/users` and `GET /api/users/{id}`

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{TestContext, APP_URL};
use ud_api::create_app;

async fn get(ctx: &TestContext, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn test_second_page_of_seven() {
    let ctx = TestContext::new();
    ctx.seed_users(7).await;

    let (status, body) = get(&ctx, "/api/users?page=2&count=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["page"], 2);
    assert_eq!(body["count"], 5);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["total_users"], 7);
    assert_eq!(
        body["links"],
        json!({
            "next_url": null,
            "prev_url": format!("{}/api/users?page=1&count=5", APP_URL)
        })
    );

    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], 6);
    assert_eq!(users[1]["id"], 7);
}

#[actix_web::test]
async fn test_defaults_and_next_link() {
    let ctx = TestContext::new();
    ctx.seed_users(7).await;

    let (status, body) = get(&ctx, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["count"], 5);
    assert_eq!(body["users"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["links"]["next_url"],
        format!("{}/api/users?page=2&count=5", APP_URL)
    );
    assert_eq!(body["links"]["prev_url"], Value::Null);
}

#[actix_web::test]
async fn test_empty_directory_and_page_past_end() {
    let ctx = TestContext::new();

    let (status, body) = get(&ctx, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["total_users"], 0);
    assert_eq!(body["users"], json!([]));

    ctx.seed_users(3).await;
    let (status, body) = get(&ctx, "/api/users?page=9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"], json!([]));
}

#[actix_web::test]
async fn test_invalid_paging_parameters() {
    let ctx = TestContext::new();

    let (status, body) = get(&ctx, "/api/users?page=abc&count=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["page"], json!(["Page must be a number."]));
    assert_eq!(body["errors"]["count"], json!(["The count field must be at least 1."]));
}

#[actix_web::test]
async fn test_show_user_shape() {
    let ctx = TestContext::new();
    ctx.seed_users(2).await;

    let (status, body) = get(&ctx, "/api/users/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let user = &body["user"];
    assert_eq!(user["id"], 2);
    assert_eq!(user["name"], "Seeded User 2");
    assert_eq!(user["email"], "seeded2@example.com");
    assert_eq!(user["phone"], "+380500000002");
    assert_eq!(user["position_id"], 3);
    assert_eq!(user["position"], "Security");
    assert!(user["registration_timestamp"].as_i64().unwrap() > 0);
    assert_eq!(
        user["photo"],
        format!("{}/storage/images/default.jpg", APP_URL)
    );
}

#[actix_web::test]
async fn test_show_user_rejects_non_positive_ids() {
    let ctx = TestContext::new();

    for uri in ["/api/users/0", "/api/users/-5", "/api/users/abc"] {
        let (status, body) = get(&ctx, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["message"], "The user ID must be an integer.");
    }
}

#[actix_web::test]
async fn test_show_unknown_user() {
    let ctx = TestContext::new();
    ctx.seed_users(1).await;

    let (status, body) = get(&ctx, "/api/users/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "User not found"}));
}
