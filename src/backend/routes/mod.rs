//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, tracing and fallback
//! ├── api_routes.rs   - Auth and post endpoints
//! └── health.rs       - Liveness probe
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use postgate::backend::routes::create_router;
//! use postgate::backend::server::AppState;
//! use postgate::shared::AppConfig;
//!
//! let config = AppConfig::builder().jwt_secret("dev-secret").build().unwrap();
//! let router = create_router(AppState::in_memory(&config));
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Health check
pub mod health;

pub use router::create_router;
