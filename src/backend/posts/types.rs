/**
 * Post Handler Types
 *
 * Request and response bodies for the post endpoints. JSON field names are
 * camelCase.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::User;
use crate::backend::posts::db::{Post, PostChanges};
use crate::backend::store::{Page, DEFAULT_PAGE_SIZE};

/// Create post request
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Update post request; omitted fields are left unchanged
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(request: UpdatePostRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

/// `?page=&limit=` on the listing endpoint
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ListPostsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl From<ListPostsQuery> for Page {
    fn from(query: ListPostsQuery) -> Self {
        Page::new(query.page, query.limit)
    }
}

/// Post as returned to clients, with its author embedded
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl PostResponse {
    /// Combine a post with its author; `author.id` must equal `post.user_id`
    pub fn new(post: Post, author: User) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            user: author.into(),
        }
    }
}
