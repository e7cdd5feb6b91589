//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the HTTP layer and the storage layer. They are compiled without the `ssr`
//! feature, so clients of the JSON API can reuse them.
//!
//! # Overview
//!
//! - **`task`** - Task records, validated task inputs, and request bodies
//! - **`error`** - Validation errors raised while building task inputs
//! - **`response`** - Acknowledgement and error bodies

/// Task data structures
pub mod task;

/// Shared error types
pub mod error;

/// Common response bodies
pub mod response;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use response::{ErrorResponse, MessageResponse};
pub use task::{CreateTaskRequest, NewTask, Task, TaskUpdate, UpdateTaskRequest, DEFAULT_STATUS};
