/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including the database pool, schema migrations, token service and route
 * configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Validate the loaded configuration
 * 2. Open the SQLite pool (creating the file and its directory if needed)
 * 3. Apply the embedded migrations
 * 4. Build the token service from the signing secret
 * 5. Create and configure the router
 *
 * Any failure aborts startup. A task manager without its store or its
 * signing secret has nothing useful to serve.
 */

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Open a connection pool for `database_url`
///
/// File databases are created on first use, including their parent
/// directory. An in-memory database lives only as long as its connection,
/// so it gets exactly one connection that is never recycled.
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, InitError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    tracing::info!(in_memory, "Database pool opened");
    Ok(pool)
}

/// Apply the embedded schema migrations
///
/// Migrations are idempotent: running them against an up-to-date database
/// is a no-op, so this is safe on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InitError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Build the shared application state from a loaded configuration
pub async fn init_state(config: ServerConfig) -> Result<AppState, InitError> {
    config.validate()?;

    tracing::info!("Initializing task manager backend: {:?}", config);

    let db_pool = connect_database(&config.database_url, config.max_connections).await?;
    run_migrations(&db_pool).await?;

    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl);

    Ok(AppState {
        db_pool,
        tokens: Arc::new(tokens),
        config: Arc::new(config),
    })
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(state: AppState) -> Router<()> {
    let app = create_router(state);
    tracing::info!("Router configured");
    app
}
