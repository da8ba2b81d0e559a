//! Posts API integration tests
//!
//! Ownership rules: anyone may read, any authenticated user may create, and
//! only the creator may update or delete.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_test_user, login_token, TestApp, TestUser};

async fn create_post(app: &TestApp, user: &TestUser, title: &str) -> Value {
    let response = app
        .post(
            "/posts",
            Some(&user.token),
            json!({ "title": title, "content": format!("{} content", title) }),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);
    response.body
}

#[tokio::test]
async fn test_create_post_sets_owner() {
    let app = TestApp::new();
    let user = create_test_user(&app, "owner@x.com", "secret123").await;

    let post = create_post(&app, &user, "Hello").await;

    assert_eq!(post["title"], "Hello");
    assert_eq!(post["content"], "Hello content");
    assert_eq!(post["userId"], user.id);
    assert!(post["createdAt"].is_string());
    assert!(post["updatedAt"].is_string());
    assert_eq!(post["user"]["id"], user.id);
    assert_eq!(post["user"]["email"], "owner@x.com");
}

#[tokio::test]
async fn test_create_post_for_vanished_user() {
    // Same secret, different store: the token is valid but names no user here
    let first = TestApp::new();
    create_test_user(&first, "ghost@x.com", "secret123").await;
    let token = login_token(&first, "ghost@x.com", "secret123").await;

    let second = TestApp::new();
    let response = second
        .post("/posts", Some(&token), json!({ "title": "t", "content": "c" }))
        .await;

    assert_api_error!(response, StatusCode::NOT_FOUND, "User not found");
    let listed = second.get("/posts", None).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_create_post_requires_auth() {
    let app = TestApp::new();

    let response = app
        .post("/posts", None, json!({ "title": "t", "content": "c" }))
        .await;

    assert_api_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_create_post_validation() {
    let app = TestApp::new();
    let user = create_test_user(&app, "owner@x.com", "secret123").await;

    let response = app
        .post(
            "/posts",
            Some(&user.token),
            json!({ "title": "x".repeat(201), "content": "" }),
        )
        .await;

    assert_api_error!(response, StatusCode::BAD_REQUEST, "Validation failed");
    assert_eq!(response.body["details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_by_other_user_forbidden_then_owner_succeeds() {
    let app = TestApp::new();
    let owner = create_test_user(&app, "owner@x.com", "secret123").await;
    let other = create_test_user(&app, "other@x.com", "secret123").await;
    let post = create_post(&app, &owner, "Original").await;
    let uri = format!("/posts/{}", post["id"]);

    let denied = app
        .put(&uri, Some(&other.token), json!({ "title": "Hijacked" }))
        .await;
    assert_api_error!(
        denied,
        StatusCode::FORBIDDEN,
        "You can only update your own posts"
    );

    // Unchanged after the rejected update
    let unchanged = app.get(&uri, None).await;
    assert_eq!(unchanged.body["title"], "Original");

    let updated = app
        .put(&uri, Some(&owner.token), json!({ "title": "Edited" }))
        .await;
    assert_status!(updated, StatusCode::OK);
    assert_eq!(updated.body["title"], "Edited");
    assert_eq!(updated.body["content"], "Original content");
    assert_eq!(updated.body["userId"], owner.id);
}

#[tokio::test]
async fn test_update_missing_post() {
    let app = TestApp::new();
    let user = create_test_user(&app, "owner@x.com", "secret123").await;

    let response = app
        .put("/posts/999", Some(&user.token), json!({ "title": "x" }))
        .await;

    assert_api_error!(response, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_update_requires_auth_before_anything_else() {
    let app = TestApp::new();

    // Missing post and invalid body, but no token: 401 wins
    let response = app.put("/posts/999", None, json!({ "title": "" })).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_post() {
    let app = TestApp::new();
    let owner = create_test_user(&app, "owner@x.com", "secret123").await;
    let other = create_test_user(&app, "other@x.com", "secret123").await;
    let post = create_post(&app, &owner, "Doomed").await;
    let uri = format!("/posts/{}", post["id"]);

    let denied = app.delete(&uri, Some(&other.token)).await;
    assert_api_error!(
        denied,
        StatusCode::FORBIDDEN,
        "You can only delete your own posts"
    );

    let deleted = app.delete(&uri, Some(&owner.token)).await;
    assert_status!(deleted, StatusCode::NO_CONTENT);
    assert_eq!(deleted.body, Value::Null);

    let gone = app.get(&uri, None).await;
    assert_api_error!(gone, StatusCode::NOT_FOUND, "Post not found");

    let again = app.delete(&uri, Some(&owner.token)).await;
    assert_status!(again, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_posts_newest_first_with_pagination() {
    let app = TestApp::new();
    let user = create_test_user(&app, "owner@x.com", "secret123").await;
    for i in 1..=3 {
        create_post(&app, &user, &format!("Post {}", i)).await;
    }

    let titles = |body: &Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|post| post["title"].as_str().unwrap().to_string())
            .collect()
    };

    // Public, no token needed
    let all = app.get("/posts", None).await;
    assert_status!(all, StatusCode::OK);
    assert_eq!(titles(&all.body), vec!["Post 3", "Post 2", "Post 1"]);

    let first_page = app.get("/posts?page=1&limit=2", None).await;
    assert_eq!(titles(&first_page.body), vec!["Post 3", "Post 2"]);

    let second_page = app.get("/posts?page=2&limit=2", None).await;
    assert_eq!(titles(&second_page.body), vec!["Post 1"]);

    let past_end = app.get("/posts?page=5&limit=2", None).await;
    assert_eq!(titles(&past_end.body), Vec::<String>::new());
}

#[tokio::test]
async fn test_list_posts_bad_query() {
    let app = TestApp::new();

    let response = app.get("/posts?page=abc", None).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert!(response.body.is_object(), "not JSON: {}", response.body);
    assert!(response.body["error"].is_string());
    assert_eq!(response.body["status"], 400);
}

#[tokio::test]
async fn test_non_numeric_post_id() {
    let app = TestApp::new();
    let user = create_test_user(&app, "owner@x.com", "secret123").await;

    let responses = [
        app.get("/posts/abc", None).await,
        app.put("/posts/abc", Some(&user.token), json!({ "title": "x" }))
            .await,
        app.delete("/posts/abc", Some(&user.token)).await,
    ];

    for response in responses {
        assert_api_error!(response, StatusCode::BAD_REQUEST, "Validation failed");
        assert_eq!(response.body["details"][0]["field"], "id");
        assert_eq!(response.body["details"][0]["message"], "Invalid post ID");
    }
}

#[tokio::test]
async fn test_get_post() {
    let app = TestApp::new();
    let user = create_test_user(&app, "owner@x.com", "secret123").await;
    let post = create_post(&app, &user, "Readable").await;

    let response = app.get(&format!("/posts/{}", post["id"]), None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, post);
    assert_eq!(response.body["user"]["email"], "owner@x.com");
}

#[tokio::test]
async fn test_list_embeds_each_author() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice@x.com", "secret123").await;
    let bob = create_test_user(&app, "bob@x.com", "secret123").await;
    create_post(&app, &alice, "From Alice").await;
    create_post(&app, &bob, "From Bob").await;

    let response = app.get("/posts", None).await;

    let authors: Vec<&str> = response.body
        .as_array()
        .unwrap()
        .iter()
        .map(|post| post["user"]["email"].as_str().unwrap())
        .collect();
    assert_eq!(authors, vec!["bob@x.com", "alice@x.com"]);
}
