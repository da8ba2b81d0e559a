/**
 * User Model and Credential Store
 *
 * This module defines the user record and the `UserStore` trait the auth
 * handlers talk to, with a Postgres and an in-memory implementation.
 *
 * Emails are normalised (trimmed, lower-cased) by the handlers before they
 * reach a store, so stores compare them byte for byte.
 */

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::backend::store::{map_insert_error, StoreError};

/// Message used when an email is already registered
pub const EMAIL_TAKEN: &str = "Email already exists";

/// Message used when a token's user no longer exists
pub const USER_NOT_FOUND: &str = "User not found";

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// User email address (unique, normalised)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Credential store
///
/// `create` must fail with `StoreError::Conflict` when the email is taken,
/// even if a concurrent request registered it after the caller checked.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Get user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Get every user whose ID is in `ids`; unknown IDs are skipped
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, StoreError>;

    /// Create a new user
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
}

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, created_at, updated_at";

/// Postgres-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = ANY($1)",
            USER_COLUMNS
        ))
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let now = Utc::now();

        // users.email is UNIQUE; a lost registration race lands here as a
        // unique violation.
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, EMAIL_TAKEN))
    }
}

#[derive(Default)]
struct MemoryUsers {
    next_id: i64,
    by_id: BTreeMap<i64, User>,
}

/// In-memory user store
///
/// The uniqueness check and the insert happen under one write lock.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<MemoryUsers>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.inner.read().await;
        Ok(users.by_id.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, StoreError> {
        let users = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| users.by_id.get(id))
            .cloned()
            .collect())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.inner.write().await;
        if users.by_id.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(EMAIL_TAKEN.to_string()));
        }

        users.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: users.next_id,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: now,
            updated_at: now,
        };
        users.by_id.insert(created.id, created.clone());

        Ok(created)
    }
}
