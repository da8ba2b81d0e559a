/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across register, login, and get_me handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::backend::auth::users::User;

/// Register request
///
/// Names are optional; when present they must be 1-50 characters.
#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User's email address, normalised on the way in so validation sees
    /// the stored form
    #[serde(deserialize_with = "deserialize_email")]
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: Option<String>,
    /// User's password (will be hashed before storage)
    #[validate(custom(function = "validate_password_len"))]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(deserialize_with = "deserialize_email")]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// User's password (will be verified against stored hash)
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response
///
/// The token goes in `Authorization: Bearer <token>` on later requests.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Shortest accepted password, in bytes
pub const MIN_PASSWORD_BYTES: usize = 8;

/// bcrypt ignores everything past 72 bytes, so longer passwords are refused
pub const MAX_PASSWORD_BYTES: usize = 72;

fn validate_password_len(password: &str) -> Result<(), validator::ValidationError> {
    if (MIN_PASSWORD_BYTES..=MAX_PASSWORD_BYTES).contains(&password.len()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("length");
        error.message = Some("Password must be 8-72 bytes".into());
        Err(error)
    }
}

/// Trim and lower-case an email so lookups are case-insensitive
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn deserialize_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_email(&raw))
}
