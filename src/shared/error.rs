//! Shared Error Types
//!
//! This module defines the errors that describe bad client input, independent
//! of how they are eventually turned into an HTTP response.
//!
//! # Error Categories
//!
//! - `SerializationError` - The request body is not the JSON we expect
//! - `ValidationError` - One or more fields failed their validation rules
//!
//! # Usage
//!
//! ```rust
//! use postgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Please provide a valid email address");
//! assert_eq!(error.field_errors().len(), 1);
//! ```
use serde::Serialize;
use thiserror::Error;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field, as it appears in the JSON body
    pub field: String,
    /// Human-readable explanation
    pub message: String,
}

/// Errors caused by malformed or invalid client input
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error, one entry per failing field
    #[error("Validation failed: {}", summarize(.errors))]
    ValidationError {
        /// Every field that failed, in field-name order
        errors: Vec<FieldError>,
    },
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            errors: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Field-level details, empty for serialization errors
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::ValidationError { errors } => errors,
            Self::SerializationError { .. } => &[],
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Flatten `validator` output into one `FieldError` per failed rule.
///
/// Rules without a custom message fall back to the rule code
/// (`email`, `length`, ...).
impl From<validator::ValidationErrors> for SharedError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                failures.iter().map(move |failure| FieldError {
                    field: field.to_string(),
                    message: failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed `{}` check", failure.code)),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        Self::ValidationError { errors: fields }
    }
}
