/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Request fields are optional so that a missing
 * field produces the same `400 {"error": ...}` body as an empty one.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    /// Plaintext password (hashed before storage, never logged)
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Token response
///
/// Returned by the login handler. The token is presented verbatim in the
/// `Authorization` header of every task request.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// Identity of the authenticated caller
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}
