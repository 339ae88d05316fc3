//! HTTP DTOs for todo endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! The wire format is camelCase and `isDone` travels as `0`/`1`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::todo::{NewTodo, Todo, TodoPatch};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new todo.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTodoRequest {
    pub task: String,
    #[serde(default, deserialize_with = "done_flag")]
    pub is_done: Option<bool>,
}

impl CreateTodoRequest {
    /// Validates the request into a create payload.
    pub fn into_new_todo(self) -> Result<NewTodo, ValidationError> {
        NewTodo::new(self.task, self.is_done)
    }
}

/// Request to update an existing todo. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "done_flag")]
    pub is_done: Option<bool>,
}

impl UpdateTodoRequest {
    /// Validates the request into a patch.
    pub fn into_patch(self) -> Result<TodoPatch, ValidationError> {
        TodoPatch::new(self.task, self.is_done)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DoneFlag {
    Bool(bool),
    Number(i64),
}

/// Accepts `0`, `1`, `false`, `true`, or `null` (treated as absent).
fn done_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<DoneFlag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(DoneFlag::Bool(flag)) => Ok(Some(flag)),
        Some(DoneFlag::Number(0)) => Ok(Some(false)),
        Some(DoneFlag::Number(1)) => Ok(Some(true)),
        Some(DoneFlag::Number(other)) => Err(D::Error::custom(format!(
            "isDone must be 0 or 1, got {}",
            other
        ))),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Todo representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: String,
    pub task: String,
    pub is_done: u8,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().to_string(),
            is_done: u8::from(todo.is_done()),
            created_at: todo.created_at().to_rfc3339(),
            updated_at: todo.updated_at().to_rfc3339(),
            deleted_at: todo.deleted_at().map(|ts| ts.to_rfc3339()),
            task: todo.task().to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "An unexpected error occurred".to_string(),
        }
    }
}
