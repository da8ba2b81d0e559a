//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server offering
//! user registration, login, token-protected session lookup, and CRUD on
//! posts owned by the user who created them.
//!
//! # Architecture
//!
//! - **`server`** - Application state, database loading, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, session tokens, auth handlers
//! - **`posts`** - Post storage, ownership checks, post handlers
//! - **`middleware`** - Request extractors (`AuthUser`, `ValidatedJson`)
//! - **`store`** - Shared storage errors and pagination
//! - **`error`** - `ApiError` and its HTTP response mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Owned posts
//! ├── middleware/     - Request extractors
//! ├── store/          - Storage helpers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user and post stores behind `Arc<dyn ...>`, plus the
//! token service and password hasher. Handlers pull the pieces they need
//! through `FromRef`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Owned posts
pub mod posts;

/// Request extractors
pub mod middleware;

/// Storage errors and pagination
pub mod store;

pub use error::ApiError;
pub use server::{create_app, AppState};
