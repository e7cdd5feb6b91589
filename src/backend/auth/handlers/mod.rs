//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - Session token issuance
//! - **`get_me`** - GET /api/me - Identity behind the presented token
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → user created → `201` acknowledgement
//! 2. **Login**: username + password → credentials verified → token returned
//! 3. **Me**: token → verified by the middleware → `{id, username}` returned

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use register::register;
