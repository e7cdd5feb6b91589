//! Database operations for tasks

use sqlx::SqlitePool;
use thiserror::Error;

use crate::shared::{NewTask, Task, TaskUpdate, DEFAULT_STATUS};

/// Task store failures
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task with this id is owned by the caller
    #[error("Task not found")]
    NotFoundOrForbidden,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// List every task owned by `user_id`, oldest first
pub async fn list_tasks(pool: &SqlitePool, user_id: i64) -> Result<Vec<Task>, TaskError> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, title, description, due_date, status
        FROM tasks
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}

/// Get one task owned by `user_id`
pub async fn get_task(pool: &SqlitePool, task_id: i64, user_id: i64) -> Result<Task, TaskError> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, title, description, due_date, status
        FROM tasks
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(TaskError::NotFoundOrForbidden)
}

/// Create a task owned by `user_id` with status `pending`
pub async fn create_task(
    pool: &SqlitePool,
    user_id: i64,
    task: &NewTask,
) -> Result<Task, TaskError> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (user_id, title, description, due_date, status)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, user_id, title, description, due_date, status
        "#,
    )
    .bind(user_id)
    .bind(task.title())
    .bind(task.description())
    .bind(task.due_date())
    .bind(DEFAULT_STATUS)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Replace the fields of a task owned by `user_id`
///
/// When the update carries no status the stored one is kept.
pub async fn update_task(
    pool: &SqlitePool,
    task_id: i64,
    user_id: i64,
    update: &TaskUpdate,
) -> Result<(), TaskError> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET title = ?, description = ?, due_date = ?, status = COALESCE(?, status)
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(update.title())
    .bind(update.description())
    .bind(update.due_date())
    .bind(update.status())
    .bind(task_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(TaskError::NotFoundOrForbidden);
    }
    Ok(())
}

/// Delete a task owned by `user_id`
pub async fn delete_task(pool: &SqlitePool, task_id: i64, user_id: i64) -> Result<(), TaskError> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(TaskError::NotFoundOrForbidden);
    }
    Ok(())
}
