/**
 * Authentication Gate
 *
 * This module protects routes that require a signed-in caller. It reads the
 * `Authorization: Bearer <token>` header, validates the token, and hands the
 * resulting `Identity` to the handler as an ordinary argument through the
 * `AuthUser` extractor.
 *
 * Any failure rejects the request with 401 before the handler body runs.
 * Nothing is written into request extensions.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use thiserror::Error;

use crate::backend::auth::sessions::{TokenError, TokenService};
use crate::backend::error::ApiError;

/// The authenticated caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
}

/// Why the gate rejected a request
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header
    #[error("missing Authorization header")]
    MissingHeader,

    /// Header present but not `Bearer <token>`
    #[error("malformed Authorization header")]
    MalformedHeader,

    /// Token failed validation
    #[error("invalid token: {0}")]
    Unauthorized(#[from] TokenError),
}

/// Extract the token from an `Authorization` header value
///
/// The value must be exactly two parts separated by a single space, the first
/// being literally `Bearer` and the second non-empty.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Run the gate against a set of request headers
///
/// # Errors
///
/// * `MissingHeader` - no `Authorization` header
/// * `MalformedHeader` - not `Bearer <token>`, or not visible ASCII
/// * `Unauthorized` - the token did not validate
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<Identity, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let value = header.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = parse_bearer(value)?;

    let user_id = tokens.validate(token)?;
    Ok(Identity { user_id })
}

/// Axum extractor for the authenticated caller
///
/// Adding `AuthUser(identity): AuthUser` to a handler's arguments makes the
/// route protected.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = TokenService::from_ref(state);
        let identity = authenticate(&parts.headers, &tokens)?;
        tracing::debug!("Authenticated user {}", identity.user_id);
        Ok(AuthUser(identity))
    }
}
