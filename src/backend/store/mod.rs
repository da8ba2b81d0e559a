//! Storage Module
//!
//! Users and posts are persisted through async store traits
//! (`auth::users::UserStore`, `posts::db::PostStore`). Each trait has a
//! Postgres implementation backed by `sqlx` and an in-memory implementation
//! used when no database is configured and in tests.
//!
//! This module holds what the stores share: the error type and pagination.

use thiserror::Error;

/// Errors returned by any store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write
    #[error("conflict: {0}")]
    Conflict(String),

    /// The write points at a row that does not exist (foreign key)
    #[error("missing reference: {0}")]
    MissingReference(String),

    /// The database failed
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A window into a listing, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    /// Build a page, clamping out-of-range values.
    ///
    /// `page` is at least 1 and `limit` lies in `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Map an insert failure
///
/// Unique violations become `Conflict` with `conflict_message`; foreign key
/// violations become `MissingReference` naming the constraint.
pub(crate) fn map_insert_error(err: sqlx::Error, conflict_message: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict(conflict_message.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::MissingReference(
                db_err.constraint().unwrap_or("foreign key").to_string(),
            );
        }
    }
    StoreError::Database(err)
}
