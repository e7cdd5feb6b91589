/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a session token valid for one hour
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords produce the same 401 body, so the
 *   response never reveals whether an account exists
 * - Passwords and tokens are never logged
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::verify_credentials;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, username or password missing
/// * `401 Unauthorized` - user not found or password incorrect
/// * `500 Internal Server Error` - database, hashing or signing failure
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenService>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let user = verify_credentials(&pool, &username, &password)
        .await
        .inspect_err(|e| tracing::warn!("Login rejected for {}: {}", username, e))?;

    let token = tokens.issue(&user)?;

    tracing::info!(user_id = user.id, "User logged in: {}", user.username);

    Ok(Json(TokenResponse { token }))
}
