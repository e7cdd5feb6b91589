/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Auth routes (public)
 * 2. API routes (authorization middleware)
 * 3. Static front-end files for everything else
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::{configure_api_routes, configure_auth_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Static Files
///
/// Any path not claimed by a route is served from the configured static
/// directory (`public/` by default), so `/` returns the single-page client.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());
    let router = configure_api_routes(router, &app_state);

    let static_files = ServeDir::new(&app_state.config.static_dir);

    router
        .fallback_service(static_files)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
