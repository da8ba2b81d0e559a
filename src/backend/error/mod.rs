//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and its
//! conversion into a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and conversions from component errors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation
//!
//! Component errors (`PasswordError`, `TokenError`, `AuthError`,
//! `StoreError`, `SharedError`) convert into `ApiError` with `From`, so
//! handlers use `?` and each request fails on its own. Nothing is retried.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
