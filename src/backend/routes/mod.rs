//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Auth and task endpoints
//! ```
//!
//! # Route Organization
//!
//! 1. **Auth Routes** - `/auth/register`, `/auth/login` (public)
//! 2. **API Routes** - `/api/*`, every one behind the authorization middleware
//! 3. **Fallback** - static front-end files
//!
//! # Example
//!
//! ```rust,no_run
//! use taskmanager::backend::routes::create_router;
//! use taskmanager::backend::server::{init_state, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = init_state(ServerConfig::from_env()?).await?;
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Auth and task endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
