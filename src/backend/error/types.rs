/**
 * API Error Types
 *
 * This module defines the error taxonomy every handler returns. Each variant
 * maps to exactly one HTTP status; the conversion lives in `conversion.rs`.
 *
 * # Error Categories
 *
 * - `Validation` - malformed or missing input, surfaced with field details (400)
 * - `Unauthorized` - missing, invalid or expired credential (401)
 * - `Forbidden` - authenticated but not entitled (403)
 * - `NotFound` - referenced entity absent (404)
 * - `Conflict` - uniqueness violation (409)
 * - `Internal` - collaborator or infrastructure failure (500)
 *
 * Authentication failures always carry the same generic message so a client
 * cannot tell which check rejected it. Internal failures keep their detail
 * for the server log only.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::middleware::auth::AuthError;
use crate::backend::store::StoreError;
use crate::shared::{FieldError, SharedError};

/// Message returned for every authentication failure
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Message returned for every internal failure
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad client input
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Missing or invalid credential
    #[error("Unauthorized")]
    Unauthorized,

    /// Caller is authenticated but may not perform this action
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violation
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Infrastructure failure; the detail is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message that is safe to show the client
    pub fn message(&self) -> String {
        match self {
            Self::Validation(SharedError::SerializationError { message }) => message.clone(),
            Self::Validation(SharedError::ValidationError { .. }) => {
                "Validation failed".to_string()
            }
            Self::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Forbidden(message) | Self::NotFound(message) | Self::Conflict(message) => {
                message.clone()
            }
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Per-field details, only present for validation failures
    pub fn details(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(err @ SharedError::ValidationError { .. }) => {
                Some(err.field_errors())
            }
            _ => None,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::warn!("Rejected request: {}", err);
        Self::Unauthorized
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => Self::internal(format!("token signing failed: {}", e)),
            other => AuthError::Unauthorized(other).into(),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(message) => Self::Conflict(message),
            StoreError::MissingReference(constraint) => {
                tracing::warn!("Write rejected by {}", constraint);
                Self::not_found("Referenced record not found")
            }
            StoreError::Database(e) => Self::internal(format!("database error: {}", e)),
        }
    }
}
