/**
 * Server Configuration
 *
 * This module turns the validated `AppConfig` into runtime resources,
 * currently the optional PostgreSQL pool.
 *
 * # Error Handling
 *
 * Database errors are logged but do not prevent server startup. Without a
 * pool the server runs on the in-memory stores.
 */

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::shared::AppConfig;

/// Pool size for the Postgres stores
const MAX_CONNECTIONS: u32 = 10;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `database_url` from the config
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations from `migrations/`
///
/// # Returns
///
/// - `Some(PgPool)` if database is successfully configured
/// - `None` if no database URL is configured or the connection fails
pub async fn load_database(config: &AppConfig) -> Option<PgPool> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory stores.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory stores.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("Failed to run database migrations: {}", e);
        // The schema may already be in place from an earlier run
        tracing::warn!("Continuing without migrations - database might not be up to date");
    } else {
        tracing::info!("Database migrations completed successfully");
    }

    Some(pool)
}
