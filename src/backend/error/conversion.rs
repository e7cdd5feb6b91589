/**
 * Error Conversion
 *
 * This module converts domain errors into `BackendError` and
 * `BackendError` into an HTTP response.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::CredentialError;
use crate::backend::error::types::BackendError;
use crate::backend::tasks::db::TaskError;
use crate::shared::response::ErrorResponse;
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.message(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        BackendError::invalid_input(err.message())
    }
}

impl From<CredentialError> for BackendError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidInput(message) => BackendError::invalid_input(message),
            CredentialError::DuplicateUsername => BackendError::DuplicateUsername,
            CredentialError::NotFound | CredentialError::InvalidCredential => {
                BackendError::InvalidCredentials
            }
            other => {
                tracing::error!("Credential store failure: {}", other);
                BackendError::internal(other.to_string())
            }
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingToken => BackendError::Unauthenticated,
            TokenError::InvalidToken(_) => BackendError::InvalidToken,
            TokenError::Signing(e) => {
                tracing::error!("Failed to sign session token: {}", e);
                BackendError::internal(e.to_string())
            }
        }
    }
}

impl From<TaskError> for BackendError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFoundOrForbidden => {
                tracing::warn!("Task not found for caller");
                BackendError::not_found(TaskError::NotFoundOrForbidden.to_string())
            }
            TaskError::Database(e) => e.into(),
        }
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        BackendError::internal(err.to_string())
    }
}
