//! Authentication test helpers
//!
//! Register and log in users through the public endpoints.

use axum::http::StatusCode;
use serde_json::json;

use super::client::TestApp;

/// A registered, logged-in user
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register `email` and log in, returning the user's id and token
pub async fn create_test_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let registered = app
        .post(
            "/auth/register",
            None,
            json!({ "email": email, "password": password }),
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.body);

    let token = login_token(app, email, password).await;

    TestUser {
        id: registered.body["id"].as_i64().expect("numeric id"),
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Log in and return the bearer token
pub async fn login_token(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .post(
            "/auth/login",
            None,
            json!({ "email": email, "password": password }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    response.body["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}
