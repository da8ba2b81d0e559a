/**
 * Application State Management
 *
 * This module defines the application state and the `FromRef` impls that let
 * handlers and extractors pull out just the part they need.
 *
 * # Contents
 *
 * - `users` / `posts` - the stores, behind trait objects so Postgres and
 *   in-memory implementations are interchangeable
 * - `tokens` - the token service, holding the signing secret
 * - `passwords` - the bcrypt hasher
 *
 * Everything here is read-only after startup or does its own locking, so
 * `AppState` is cloned into each request without further synchronization.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{MemoryUserStore, UserStore};
use crate::backend::posts::db::{MemoryPostStore, PostStore};
use crate::shared::AppConfig;

/// Shared state for every request handler
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,

    /// Post store
    pub posts: Arc<dyn PostStore>,

    /// Issues and validates session tokens
    pub tokens: TokenService,

    /// Hashes and verifies passwords
    pub passwords: PasswordHasher,
}

impl AppState {
    /// Assemble state from explicit parts
    pub fn new(
        config: &AppConfig,
        users: Arc<dyn UserStore>,
        posts: Arc<dyn PostStore>,
    ) -> Self {
        Self {
            users,
            posts,
            tokens: TokenService::new(&config.jwt_secret, config.token_ttl),
            passwords: PasswordHasher::new(config.bcrypt_cost),
        }
    }

    /// State backed by empty in-memory stores
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryPostStore::new()),
        )
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PostStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}
