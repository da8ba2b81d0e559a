//! Postgate - Main Library
//!
//! Postgate is a REST API backend template: user registration and login,
//! JWT-based session validation, and CRUD on posts owned by a user.
//!
//! # Overview
//!
//! The library provides:
//! - Password hashing with bcrypt
//! - Signed, time-bound session tokens (JWT, HS256)
//! - A bearer-token auth gate that hands the caller's identity to handlers
//! - Ownership checks before a post is updated or deleted
//! - Postgres and in-memory storage behind async store traits
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the HTTP server
//!   - Configuration (`AppConfig`, builder, environment loading)
//!   - Field validation errors
//!
//! - **`backend`** - The Axum server
//!   - Auth (passwords, sessions, users, handlers)
//!   - Posts (store, ownership, handlers)
//!   - Middleware (auth gate, validated JSON)
//!   - Error types, routes, server initialization
//!
//! # Usage
//!
//! ```rust,no_run
//! use postgate::backend::server::init::create_app;
//! use postgate::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
pub mod backend;
