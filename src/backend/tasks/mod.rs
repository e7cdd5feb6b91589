//! Task Module
//!
//! Owner-scoped task storage and the `/api/tasks` handlers.
//!
//! Every statement that touches an existing task filters on both the task
//! id and the caller's user id in the same statement. A task that exists
//! but belongs to someone else is therefore indistinguishable from a task
//! that does not exist, and there is no window between an ownership check
//! and the mutation it guards.
//!
//! - **`db`** - Database operations
//! - **`handlers`** - HTTP handlers

/// Database operations for tasks
pub mod db;

/// HTTP handlers for task endpoints
pub mod handlers;

pub use db::TaskError;
pub use handlers::{create_task, delete_task, get_task, list_tasks, update_task};
