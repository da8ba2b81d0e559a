//! Shared Module
//!
//! This module contains types that do not depend on the HTTP server:
//! application configuration and the field-level validation error used
//! when request bodies are rejected.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::{FieldError, SharedError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
