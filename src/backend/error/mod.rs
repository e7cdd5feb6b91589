//! Backend Error Module
//!
//! This module defines the single error type returned by every HTTP handler
//! and the conversions from the domain errors raised below it.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status/message mapping
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Status Mapping
//!
//! | Variant | Status |
//! |---------|--------|
//! | `InvalidInput`, `DuplicateUsername` | 400 |
//! | `InvalidCredentials`, `Unauthenticated` | 401 |
//! | `InvalidToken` | 403 |
//! | `NotFoundOrForbidden` | 404 |
//! | `Internal` | 500 |
//!
//! Internal failures are logged with their cause and reported to the client
//! with a generic message only.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
