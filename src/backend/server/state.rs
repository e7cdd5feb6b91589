/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The SQLite connection pool (the only shared mutable resource)
 * - The token service, carrying the process-wide signing secret
 * - The loaded configuration
 *
 * Nothing here is behind a lock. The pool is internally synchronized and
 * the other two fields are immutable after startup.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract exactly the part
 * of the state they use, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every request handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Session token issuer/verifier
    pub tokens: Arc<TokenService>,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
