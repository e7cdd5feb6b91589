/**
 * Task HTTP Handlers
 *
 * Handlers for `/api/tasks` and `/api/tasks/{id}`. All of them sit behind
 * the authorization middleware and take the owner from the verified token,
 * never from the request body.
 *
 * # Routes
 *
 * - `GET /api/tasks` - List the caller's tasks
 * - `POST /api/tasks` - Create a task (`201` with the stored record)
 * - `GET /api/tasks/{id}` - Fetch one task
 * - `PUT /api/tasks/{id}` - Replace title, description, due date (and status)
 * - `DELETE /api/tasks/{id}` - Delete a task
 *
 * A task owned by another user answers exactly like a missing one: `404`.
 * A non-numeric `{id}` or an unparsable body answers `400`.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::middleware::AuthUser;
use crate::backend::tasks::db;
use crate::shared::{
    CreateTaskRequest, MessageResponse, NewTask, Task, TaskUpdate, UpdateTaskRequest,
};

/// List the caller's tasks
pub async fn list_tasks(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Task>>, BackendError> {
    let tasks = db::list_tasks(&pool, user.user_id).await?;
    Ok(Json(tasks))
}

/// Fetch a single task
pub async fn get_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiPath(task_id): ApiPath<i64>,
) -> Result<Json<Task>, BackendError> {
    let task = db::get_task(&pool, task_id, user.user_id).await?;
    Ok(Json(task))
}

/// Create a task
///
/// # Errors
///
/// * `400 Bad Request` - title or due date missing, or due date malformed
pub async fn create_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), BackendError> {
    let new_task = NewTask::try_from(request)?;
    let task = db::create_task(&pool, user.user_id, &new_task).await?;

    tracing::info!(user_id = user.user_id, task_id = task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task
///
/// # Errors
///
/// * `400 Bad Request` - title or due date missing, or due date malformed
/// * `404 Not Found` - no such task owned by the caller
pub async fn update_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiPath(task_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateTaskRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let update = TaskUpdate::try_from(request)?;
    db::update_task(&pool, task_id, user.user_id, &update).await?;

    tracing::info!(user_id = user.user_id, task_id, "Task updated");
    Ok(Json(MessageResponse::new("Task updated successfully")))
}

/// Delete a task
///
/// # Errors
///
/// * `404 Not Found` - no such task owned by the caller
pub async fn delete_task(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiPath(task_id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, BackendError> {
    db::delete_task(&pool, task_id, user.user_id).await?;

    tracing::info!(user_id = user.user_id, task_id, "Task deleted");
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
