/**
 * Backend Error Types
 *
 * `BackendError` is the error half of every handler's `Result`. Each
 * variant corresponds to exactly one client-visible outcome; the domain
 * errors of the credential store, token service and task store are folded
 * into it in `conversion.rs`.
 */

use axum::http::StatusCode;
use thiserror::Error;

pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Missing or malformed request fields
    #[error("{message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    #[error("Username already exists")]
    DuplicateUsername,

    /// Unknown username or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No token was presented on a protected route
    #[error("Access denied")]
    Unauthenticated,

    /// Token present but malformed, tampered, wrongly signed or expired
    #[error("Invalid token")]
    InvalidToken,

    /// The task does not exist or belongs to another user
    #[error("{message}")]
    NotFoundOrForbidden {
        /// Human-readable error message
        message: String,
    },

    /// Storage, hashing or signing failure
    ///
    /// The message is for the log only; clients always see
    /// `Internal server error`.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the underlying failure
        message: String,
    },
}

impl BackendError {
    /// Create a new invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new not-found-or-forbidden error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundOrForbidden {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::DuplicateUsername => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::NotFoundOrForbidden { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
