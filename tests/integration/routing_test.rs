//! Health check and fallback routing

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};

use std::time::Duration;

use postgate::backend::auth::sessions::TokenService;
use serde_json::json;

use crate::common::{create_test_user, TestApp, TEST_SECRET};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health", None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();

    let response = app.get("/nope", None).await;

    assert_api_error!(response, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/auth/me")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new();
    let user = create_test_user(&app, "late@x.com", "secret123").await;

    // Issued at the epoch with a one hour lifetime
    let expired = TokenService::new(TEST_SECRET, Duration::from_secs(3600))
        .issue_at(user.id, 0)
        .unwrap();

    let me = app.get("/auth/me", Some(&expired.token)).await;
    assert_api_error!(me, StatusCode::UNAUTHORIZED, "Unauthorized");

    let create = app
        .post("/posts", Some(&expired.token), json!({ "title": "t", "content": "c" }))
        .await;
    assert_api_error!(create, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = TestApp::new();
    let user = create_test_user(&app, "forged@x.com", "secret123").await;

    let forged = TokenService::new("some-other-secret", Duration::from_secs(3600))
        .issue(user.id)
        .unwrap();

    let me = app.get("/auth/me", Some(&forged.token)).await;
    assert_api_error!(me, StatusCode::UNAUTHORIZED, "Unauthorized");
}
