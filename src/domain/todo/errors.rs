//! Todo-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TodoId, ValidationError};

/// Outcome kinds of a failed todo operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No live (non-deleted) todo matches the identifier.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// Malformed identifier or payload.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The persistence layer failed.
    #[error("Storage failure: {0}")]
    Infrastructure(String),
}

impl TodoError {
    pub fn not_found(id: TodoId) -> Self {
        TodoError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TodoError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        TodoError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TodoError::NotFound(_) => ErrorCode::TodoNotFound,
            TodoError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TodoError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for TodoError {
    fn from(err: ValidationError) -> Self {
        TodoError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for TodoError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TodoError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => TodoError::Infrastructure(err.to_string()),
        }
    }
}
