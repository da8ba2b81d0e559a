/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate the request body (email format, password length, names)
 * 2. Normalise the email and check it is not already registered
 * 3. Hash the password with bcrypt
 * 4. Store the user and return it (without the hash)
 *
 * Registration does not log the user in; the client calls /auth/login next.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{normalize_email, RegisterRequest, UserResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{NewUser, UserStore, EMAIL_TAKEN};
use crate::backend::error::ApiError;
use crate::backend::middleware::ValidatedJson;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON or fails validation
/// * `409 Conflict` - Email is already registered
/// * `500 Internal Server Error` - Hashing or the store failed
pub async fn register(
    State(users): State<Arc<dyn UserStore>>,
    State(passwords): State<PasswordHasher>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let email = normalize_email(&request.email);
    tracing::info!("Registration request for: {}", email);

    if users.find_by_email(&email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(ApiError::conflict(EMAIL_TAKEN));
    }

    let password_hash = passwords.hash_async(request.password).await?;

    // A concurrent registration can still win the race; the store reports
    // that as a conflict too.
    let user = users
        .create(NewUser {
            email,
            password_hash,
            first_name: request.first_name,
            last_name: request.last_name,
        })
        .await?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(user.into())))
}
