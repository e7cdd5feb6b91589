//! Task Manager - Main Library
//!
//! A multi-user task manager: users register and log in with a username and
//! password, receive a signed session token, and create, list, update and
//! delete their own tasks through a JSON API. A small static client in
//! `public/` drives the same API from the browser.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the HTTP layer and API clients
//!   - Task records and request bodies
//!   - Validation errors
//!   - Response bodies
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server
//!   - Credential store and session tokens
//!   - Authorization middleware
//!   - Owner-scoped task storage (SQLite via sqlx)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use taskmanager::backend::server::{create_app, init_state, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder()
//!     .jwt_secret("change-me")
//!     .database_url("sqlite://db/tasks.db")
//!     .build()?;
//! let app = create_app(init_state(config).await?);
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
