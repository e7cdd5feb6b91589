/**
 * Task Data Structures
 *
 * This module defines the task record as stored and returned by the API,
 * the request bodies accepted by the task endpoints, and the validated
 * inputs (`NewTask`, `TaskUpdate`) that the task store accepts.
 *
 * Request bodies keep every field optional so that a missing field is
 * reported as a validation error with a JSON body instead of a
 * deserialization rejection.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Status assigned to every newly created task
pub const DEFAULT_STATUS: &str = "pending";

/// Accepted `due_date` format (calendar date, as produced by `<input type="date">`)
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

const REQUIRED_FIELDS_MESSAGE: &str = "Title and due date are required";

/// A task as persisted in the `tasks` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Surrogate identifier assigned on creation
    pub id: i64,
    /// Owning user; never changes after creation
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Due date in `YYYY-MM-DD` form
    pub due_date: String,
    /// `pending` on creation, any caller-supplied value afterwards
    pub status: String,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Body of `PUT /api/tasks/{id}`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Validated input for creating a task
///
/// Can only be obtained through [`NewTask::new`], so a value of this type
/// always has a non-blank title and a well-formed due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    due_date: String,
}

impl NewTask {
    /// Validate and build a new task input
    ///
    /// A blank description is stored as absent.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        due_date: impl Into<String>,
    ) -> Result<Self, SharedError> {
        let title = require("title", title.into())?;
        let due_date = require("due_date", due_date.into())?.trim().to_string();
        validate_due_date(&due_date)?;

        Ok(Self {
            title,
            description: normalize_description(description),
            due_date,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }
}

impl TryFrom<CreateTaskRequest> for NewTask {
    type Error = SharedError;

    fn try_from(request: CreateTaskRequest) -> Result<Self, Self::Error> {
        NewTask::new(
            request.title.unwrap_or_default(),
            request.description,
            request.due_date.unwrap_or_default(),
        )
    }
}

/// Validated input for replacing a task's fields
///
/// `status` is optional: `None` keeps whatever status the task already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    title: String,
    description: Option<String>,
    due_date: String,
    status: Option<String>,
}

impl TaskUpdate {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        due_date: impl Into<String>,
        status: Option<String>,
    ) -> Result<Self, SharedError> {
        let task = NewTask::new(title, description, due_date)?;
        let status = status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl TryFrom<UpdateTaskRequest> for TaskUpdate {
    type Error = SharedError;

    fn try_from(request: UpdateTaskRequest) -> Result<Self, Self::Error> {
        TaskUpdate::new(
            request.title.unwrap_or_default(),
            request.description,
            request.due_date.unwrap_or_default(),
            request.status,
        )
    }
}

fn require(field: &str, value: String) -> Result<String, SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, REQUIRED_FIELDS_MESSAGE));
    }
    Ok(value)
}

fn validate_due_date(value: &str) -> Result<(), SharedError> {
    NaiveDate::parse_from_str(value, DUE_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| SharedError::validation("due_date", "Due date must be a date in YYYY-MM-DD format"))
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}
