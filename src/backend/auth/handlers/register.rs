/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Reject a missing/blank username or an empty password
 * 2. Hash the password with bcrypt (configured cost)
 * 3. Insert the user; the `UNIQUE` constraint decides duplicates
 *
 * Registration does not log the user in; the client calls
 * `/auth/login` afterwards.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::users::register_user;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::server::config::ServerConfig;
use crate::shared::response::MessageResponse;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, missing fields or username already taken
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "pw1"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"message": "User registered successfully"}
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<ServerConfig>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    register_user(&pool, &username, &password, config.bcrypt_cost).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}
