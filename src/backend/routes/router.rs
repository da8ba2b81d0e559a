/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. API routes (auth, posts)
 * 3. Fallback handler (JSON 404)
 *
 * Every request passes through `TraceLayer`, which logs method, path,
 * status and latency.
 */

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::health::health_check;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Stores, token service and password hasher
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health_check));

    let router = configure_api_routes(router);

    // Unknown routes get the same JSON error body as everything else
    let router = router.fallback(|| async { ApiError::not_found("Route not found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
