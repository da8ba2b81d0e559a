/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by (normalised) email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 * 4. Return token, expiry and user info
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 response
 * - User passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{normalize_email, LoginRequest, LoginResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::error::ApiError;
use crate::backend::middleware::ValidatedJson;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON or a field is empty
/// * `401 Unauthorized` - Unknown email or incorrect password
/// * `500 Internal Server Error` - Store, hashing or token signing failed
pub async fn login(
    State(users): State<Arc<dyn UserStore>>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<TokenService>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = normalize_email(&request.email);
    tracing::info!("Login request for: {}", email);

    let user = users.find_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        ApiError::Unauthorized
    })?;

    let valid = passwords
        .verify_async(request.password, user.password_hash.clone())
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::Unauthorized);
    }

    let issued = tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: user.into(),
    }))
}
