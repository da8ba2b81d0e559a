/**
 * Server Initialization
 *
 * This module builds the application state from configuration and hands it
 * to the router.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool (running migrations)
 * 2. Pick Postgres or in-memory stores
 * 3. Build the token service and password hasher from config
 * 4. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::PgUserStore;
use crate::backend::posts::db::PgPostStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient: a missing or unreachable
/// database leaves the server running on in-memory stores.
pub async fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!("Initializing postgate server");

    let app_state = build_state(config).await;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    app
}

/// Build `AppState`, backed by Postgres when a pool is available
pub async fn build_state(config: &AppConfig) -> AppState {
    match load_database(config).await {
        Some(pool) => {
            tracing::info!("Using Postgres stores");
            AppState::new(
                config,
                Arc::new(PgUserStore::new(pool.clone())),
                Arc::new(PgPostStore::new(pool)),
            )
        }
        None => {
            tracing::warn!("Using in-memory stores; data is lost on restart");
            AppState::in_memory(config)
        }
    }
}
