//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - Authorization gate for every `/api/*` route
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware;
//! use taskmanager::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/api/tasks", get(list_tasks))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, extract_token, AuthUser, AuthenticatedUser};
