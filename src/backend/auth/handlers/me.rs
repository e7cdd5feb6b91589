/**
 * Get Current User Handler
 *
 * This module implements GET /api/me, which echoes the identity the
 * authorization middleware resolved from the session token. It never
 * touches the database.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {"id": 1, "username": "alice"}
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.user_id,
        username: user.username,
    })
}
