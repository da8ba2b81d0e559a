//! Post storage
//!
//! The `PostStore` trait with its Postgres and in-memory implementations.
//! Stores do not check ownership; handlers run `ownership::authorize` before
//! calling `update` or `delete`. Handlers also confirm the owner exists before
//! `create`; the Postgres store additionally reports a vanished owner as
//! `StoreError::MissingReference`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::backend::store::{map_insert_error, Page, StoreError};

/// A post as stored
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Owner; set at creation and never changed
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Posts newest first
    async fn list(&self, page: Page) -> Result<Vec<Post>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError>;

    async fn create(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Apply `changes`; `None` if the post does not exist
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, StoreError>;

    /// `true` if a post was removed
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

const POST_COLUMNS: &str = "id, title, content, user_id, created_at, updated_at";

/// Postgres-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list(&self, page: Page) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {} FROM posts ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            POST_COLUMNS
        ))
        .bind(i64::from(page.limit))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {} FROM posts WHERE id = $1",
            POST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let now = Utc::now();

        let created = sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts (title, content, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            POST_COLUMNS
        ))
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        // posts.user_id references users(id)
        .map_err(|e| map_insert_error(e, "Post already exists"))?;

        Ok(created)
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, StoreError> {
        let updated = sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts
            SET title = COALESCE($1, title),
                content = COALESCE($2, content),
                updated_at = $3
            WHERE id = $4
            RETURNING {}
            "#,
            POST_COLUMNS
        ))
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Default)]
struct MemoryPosts {
    next_id: i64,
    by_id: BTreeMap<i64, Post>,
}

/// In-memory post store
#[derive(Default)]
pub struct MemoryPostStore {
    inner: RwLock<MemoryPosts>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self, page: Page) -> Result<Vec<Post>, StoreError> {
        let posts = self.inner.read().await;
        // Ids are handed out in creation order, so descending id is newest first.
        Ok(posts
            .by_id
            .values()
            .rev()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
        Ok(self.inner.read().await.by_id.get(&id).cloned())
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let mut posts = self.inner.write().await;
        posts.next_id += 1;
        let now = Utc::now();
        let created = Post {
            id: posts.next_id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: now,
            updated_at: now,
        };
        posts.by_id.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, StoreError> {
        let mut posts = self.inner.write().await;
        let Some(post) = posts.by_id.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        post.updated_at = Utc::now();

        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.by_id.remove(&id).is_some())
    }
}
