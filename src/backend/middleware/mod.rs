//! Middleware Module
//!
//! Request processing that runs before a handler body: the authentication
//! gate and validated JSON bodies. Both are axum extractors, so a handler
//! declares what it needs in its argument list and a failure short-circuits
//! with an `ApiError` response.
//!
//! - **`auth`** - Bearer token gate producing an `Identity`
//! - **`validated`** - `ValidatedJson<T>` body extractor
//!
//! # Example
//!
//! ```rust,ignore
//! async fn create_post(
//!     AuthUser(identity): AuthUser,
//!     ValidatedJson(request): ValidatedJson<CreatePostRequest>,
//! ) -> Result<impl IntoResponse, ApiError> { ... }
//! ```

pub mod auth;
pub mod validated;

pub use auth::{authenticate, parse_bearer, AuthError, AuthUser, Identity};
pub use validated::ValidatedJson;
