//! Backend Module
//!
//! This module contains all server-side code for the task manager: an Axum
//! HTTP server over a SQLite database, with bcrypt-hashed credentials and
//! signed session tokens.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, session tokens, auth handlers
//! - **`middleware`** - Authorization gate for `/api/*`
//! - **`tasks`** - Owner-scoped task store and handlers
//! - **`error`** - `BackendError` and its HTTP mapping
//! - **`extract`** - JSON and path extractors that reject with `BackendError`
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── tasks/          - Task storage and handlers
//! ├── error/          - Error types
//! └── extract.rs      - Request extractors
//! ```
//!
//! # Concurrency
//!
//! Requests are handled concurrently on the Tokio runtime. The only shared
//! mutable resource is the database; every task mutation is a single SQL
//! statement, so two concurrent deletes of the same task produce exactly
//! one success.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Task storage and handlers
pub mod tasks;

/// Request extractors with JSON error bodies
pub mod extract;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, init_state, AppState, ServerConfig};
