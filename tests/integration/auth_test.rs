//! Authentication API integration tests
//!
//! Tests for register, login and current-user endpoints.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_test_user, login_token, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = app
        .post(
            "/auth/register",
            None,
            json!({
                "email": "a@x.com",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "password": "secret123"
            }),
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["email"], "a@x.com");
    assert_eq!(response.body["firstName"], "Ada");
    assert_eq!(response.body["lastName"], "Lovelace");
    assert!(response.body["id"].is_i64());
    assert!(response.body["createdAt"].is_string());
    assert!(response.body["updatedAt"].is_string());
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    let body = json!({ "email": "a@x.com", "password": "secret123" });

    let first = app.post("/auth/register", None, body.clone()).await;
    assert_status!(first, StatusCode::CREATED);

    let second = app.post("/auth/register", None, body).await;
    assert_api_error!(second, StatusCode::CONFLICT, "Email already exists");

    // Email comparison ignores case and surrounding whitespace
    let third = app
        .post(
            "/auth/register",
            None,
            json!({ "email": "  A@X.COM ", "password": "secret123" }),
        )
        .await;
    assert_status!(third, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::new();

    let response = app
        .post(
            "/auth/register",
            None,
            json!({ "email": "not-an-email", "password": "short" }),
        )
        .await;

    assert_api_error!(response, StatusCode::BAD_REQUEST, "Validation failed");
    let fields: Vec<&str> = response.body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|detail| detail["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "password"]);
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = TestApp::new();

    let response = app
        .post("/auth/register", None, json!({ "email": "a@x.com" }))
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let user = create_test_user(&app, "a@x.com", "secret123").await;

    // Same normalisation as registration
    let response = app
        .post(
            "/auth/login",
            None,
            json!({ "email": " A@x.COM", "password": "secret123" }),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert!(!response.body["token"].as_str().unwrap().is_empty());
    assert!(response.body["expiresAt"].is_string());
    assert_eq!(response.body["user"]["id"], user.id);
    assert_eq!(response.body["user"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new();
    create_test_user(&app, "a@x.com", "secret123").await;

    let wrong_password = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "a@x.com", "password": "wrongpass" }),
        )
        .await;
    let unknown_email = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "nobody@x.com", "password": "secret123" }),
        )
        .await;

    assert_status!(wrong_password, StatusCode::UNAUTHORIZED);
    assert_status!(unknown_email, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_me_with_token() {
    let app = TestApp::new();
    let user = create_test_user(&app, "me@x.com", "secret123").await;

    let response = app.get("/auth/me", Some(&user.token)).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["id"], user.id);
    assert_eq!(response.body["email"], "me@x.com");
}

#[tokio::test]
async fn test_me_rejects_missing_and_bad_tokens() {
    let app = TestApp::new();

    let missing = app.get("/auth/me", None).await;
    assert_api_error!(missing, StatusCode::UNAUTHORIZED, "Unauthorized");

    let garbage = app.get("/auth/me", Some("not-a-token")).await;
    assert_api_error!(garbage, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_tokens_from_another_app_are_valid_with_same_secret() {
    // Tokens carry no server-side state; a second app with the same secret
    // accepts them, but has no such user.
    let first = TestApp::new();
    create_test_user(&first, "a@x.com", "secret123").await;
    let token = login_token(&first, "a@x.com", "secret123").await;

    let second = TestApp::new();
    let response = second.get("/auth/me", Some(&token)).await;
    assert_api_error!(response, StatusCode::NOT_FOUND, "User not found");
}
