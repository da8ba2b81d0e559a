/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /auth/me, which returns
 * information about the currently authenticated user.
 *
 * The bearer token is checked by the `AuthUser` extractor before the handler
 * runs, so the handler only resolves the identity to a stored user.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::UserStore;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Authorization header is missing or token is invalid
/// * `404 Not Found` - The token is valid but its user no longer exists
pub async fn get_me(
    State(users): State<Arc<dyn UserStore>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users.find_by_id(identity.user_id).await?.ok_or_else(|| {
        tracing::warn!("Token for missing user: {}", identity.user_id);
        ApiError::not_found("User not found")
    })?;

    Ok(Json(user.into()))
}
