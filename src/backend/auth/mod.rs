//! Authentication Module
//!
//! This module handles user registration, credential verification and
//! session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store
//! ├── sessions.rs     - Session token issuance and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (per-password salt) before storage
//! - Session tokens are HS256 JWTs signed with a process-wide secret
//! - Tokens expire one hour after issuance and cannot be revoked earlier
//! - Unknown users and wrong passwords both return 401 with the same body

/// User data model and database operations
pub mod users;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{CredentialError, User};
