/**
 * API Routes
 *
 * ## Authentication
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `GET /auth/me` - Get current user info (requires authentication)
 *
 * ## Posts
 * - `GET /posts` - List posts, newest first
 * - `GET /posts/{id}` - Get one post
 * - `POST /posts` - Create a post (requires authentication)
 * - `PUT /posts/{id}` - Update a post (owner only)
 * - `DELETE /posts/{id}` - Delete a post (owner only)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::posts::{create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Authentication is enforced per handler by the `AuthUser` extractor, so
/// public and protected routes live side by side.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
        // Post endpoints
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}
