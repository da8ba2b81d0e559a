//! Post HTTP Handlers
//!
//! CRUD for posts. Reads are public; create, update and delete take an
//! `AuthUser`, and update/delete additionally require the caller to own the
//! post. Every post in a response carries its author.
//!
//! Update and delete resolve in this order: authentication (401), path and
//! body validation (400), existence (404), ownership (403), then the write.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::backend::auth::users::{UserStore, USER_NOT_FOUND};
use crate::backend::error::ApiError;
use crate::backend::middleware::{AuthUser, ValidatedJson};
use crate::backend::posts::db::{NewPost, Post, PostStore};
use crate::backend::posts::ownership::ensure_owner;
use crate::backend::posts::types::{
    CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest,
};
use crate::backend::store::StoreError;
use crate::shared::SharedError;

const POST_NOT_FOUND: &str = "Post not found";

/// Post id from the path; anything but an integer is a 400 with a JSON body
fn post_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|e| {
        tracing::debug!("Rejected post id: {}", e.body_text());
        SharedError::validation("id", "Invalid post ID").into()
    })
}

async fn load_post(posts: &dyn PostStore, id: i64) -> Result<Post, ApiError> {
    posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))
}

/// Attach authors to posts with a single store lookup
async fn with_authors(
    users: &dyn UserStore,
    posts: Vec<Post>,
) -> Result<Vec<PostResponse>, ApiError> {
    let mut ids: Vec<i64> = posts.iter().map(|post| post.user_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let authors: HashMap<i64, _> = users
        .find_by_ids(&ids)
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    posts
        .into_iter()
        .map(|post| {
            // users(id) ON DELETE CASCADE removes a user's posts with them
            let author = authors.get(&post.user_id).cloned().ok_or_else(|| {
                ApiError::internal(format!("post {} has no author {}", post.id, post.user_id))
            })?;
            Ok(PostResponse::new(post, author))
        })
        .collect()
}

async fn with_author(users: &dyn UserStore, post: Post) -> Result<PostResponse, ApiError> {
    let mut responses = with_authors(users, vec![post]).await?;
    responses
        .pop()
        .ok_or_else(|| ApiError::internal("author lookup returned no post"))
}

/// `GET /posts` - newest first, paginated
pub async fn list_posts(
    State(posts): State<Arc<dyn PostStore>>,
    State(users): State<Arc<dyn UserStore>>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let Query(query) = query.map_err(|e| SharedError::serialization(e.body_text()))?;

    let page = posts.list(query.into()).await?;
    Ok(Json(with_authors(users.as_ref(), page).await?))
}

/// `GET /posts/{id}`
pub async fn get_post(
    State(posts): State<Arc<dyn PostStore>>,
    State(users): State<Arc<dyn UserStore>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PostResponse>, ApiError> {
    let id = post_id(path)?;
    let post = load_post(posts.as_ref(), id).await?;
    Ok(Json(with_author(users.as_ref(), post).await?))
}

/// `POST /posts` - the caller becomes the owner
///
/// A valid token whose user has since been removed gets 404, whichever store
/// is in use.
pub async fn create_post(
    State(posts): State<Arc<dyn PostStore>>,
    State(users): State<Arc<dyn UserStore>>,
    AuthUser(identity): AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let author = users.find_by_id(identity.user_id).await?.ok_or_else(|| {
        tracing::warn!("Token for missing user: {}", identity.user_id);
        ApiError::not_found(USER_NOT_FOUND)
    })?;

    let post = posts
        .create(NewPost {
            title: request.title,
            content: request.content,
            user_id: identity.user_id,
        })
        .await
        .map_err(|e| match e {
            // Removed between the lookup and the insert
            StoreError::MissingReference(_) => ApiError::not_found(USER_NOT_FOUND),
            other => other.into(),
        })?;

    tracing::info!("User {} created post {}", identity.user_id, post.id);
    Ok((StatusCode::CREATED, Json(PostResponse::new(post, author))))
}

/// `PUT /posts/{id}` - owner only
pub async fn update_post(
    State(posts): State<Arc<dyn PostStore>>,
    State(users): State<Arc<dyn UserStore>>,
    AuthUser(identity): AuthUser,
    path: Result<Path<i64>, PathRejection>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let id = post_id(path)?;
    let existing = load_post(posts.as_ref(), id).await?;
    ensure_owner(existing.user_id, identity, "You can only update your own posts")?;

    let updated = posts
        .update(id, request.into())
        .await?
        // Deleted between the lookup and the write
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))?;

    tracing::info!("User {} updated post {}", identity.user_id, id);
    Ok(Json(with_author(users.as_ref(), updated).await?))
}

/// `DELETE /posts/{id}` - owner only
pub async fn delete_post(
    State(posts): State<Arc<dyn PostStore>>,
    AuthUser(identity): AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = post_id(path)?;
    let existing = load_post(posts.as_ref(), id).await?;
    ensure_owner(existing.user_id, identity, "You can only delete your own posts")?;

    if !posts.delete(id).await? {
        return Err(ApiError::not_found(POST_NOT_FOUND));
    }

    tracing::info!("User {} deleted post {}", identity.user_id, id);
    Ok(StatusCode::NO_CONTENT)
}
