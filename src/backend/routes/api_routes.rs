/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - Session token issuance
 *
 * ## Protected (session token required)
 * - `GET /api/me` - Current user
 * - `GET, POST /api/tasks` - List / create tasks
 * - `GET, PUT, DELETE /api/tasks/{id}` - Read / update / delete one task
 * - any other `/api/...` path - 404 JSON once authenticated
 */

use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::tasks::{create_task, delete_task, get_task, list_tasks, update_task};

/// Configure the public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Configure the protected API routes
///
/// The middleware is attached with `route_layer`, so it only runs for
/// requests that matched one of these routes. The `/api/{*rest}` catch-all
/// keeps the whole `/api` prefix behind the gate instead of letting unknown
/// paths fall through to the static files.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/me", get(get_me))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/{*rest}", any(api_not_found))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router.merge(protected)
}

/// Unknown path under `/api`, reached only with a valid token
async fn api_not_found() -> BackendError {
    BackendError::not_found("Not found")
}
