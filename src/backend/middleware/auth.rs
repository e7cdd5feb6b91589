/**
 * Authentication Middleware
 *
 * This module provides the gate in front of every protected route. It reads
 * the session token from the `Authorization` header, verifies it and makes
 * the caller's identity available to handlers.
 *
 * The header carries the raw token. A `Bearer ` prefix is tolerated and
 * stripped, so both of these are accepted:
 *
 * ```text
 * Authorization: eyJhbGciOi...
 * Authorization: Bearer eyJhbGciOi...
 * ```
 *
 * Absent token → 401 `Access denied`. Anything present but unusable → 403
 * `Invalid token`. The gate is stateless: it never queries the database.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claims, TokenError, TokenService};
use crate::backend::error::BackendError;

/// Identity extracted from a verified session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            username: claims.username,
        }
    }
}

/// Pull the token out of the `Authorization` header
///
/// Returns `Ok(None)` when there is no token at all (header absent or
/// blank) and an error when the header is not visible ASCII.
pub fn extract_token(headers: &HeaderMap) -> Result<Option<&str>, TokenError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let raw = value.to_str().map_err(|_| TokenError::invalid())?.trim_start();
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(token))
    }
}

/// Resolve the caller from request headers
pub fn authenticate(
    tokens: &TokenService,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, TokenError> {
    let token = extract_token(headers)?.ok_or(TokenError::MissingToken)?;
    let claims = tokens.verify(token)?;
    Ok(claims.into())
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches the caller to request extensions for use in handlers
///
/// Returns 401 when the token is missing and 403 when it is invalid.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&tokens, request.headers()).map_err(|e| {
        tracing::warn!(path = %request.uri().path(), "Rejected request: {}", e);
        BackendError::from(e)
    })?;

    tracing::debug!(user_id = user.user_id, "Authenticated request");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable behind `auth_middleware`; on an unprotected route the
/// extension is absent and the request is rejected with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthenticated
            })
    }
}
