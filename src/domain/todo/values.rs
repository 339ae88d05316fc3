//! Validated payloads for creating and patching todos.

use crate::domain::foundation::ValidationError;

/// Validated payload for a new todo.
///
/// `task` is guaranteed non-blank. `is_done` is `None` when the client left
/// it out, in which case the todo starts as not done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    task: String,
    is_done: Option<bool>,
}

impl NewTodo {
    /// Validates and builds a create payload.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `task` is empty or whitespace only
    pub fn new(task: impl Into<String>, is_done: Option<bool>) -> Result<Self, ValidationError> {
        let task = task.into();
        validate_task(&task)?;
        Ok(Self { task, is_done })
    }

    pub(crate) fn into_parts(self) -> (String, Option<bool>) {
        (self.task, self.is_done)
    }
}

/// Validated partial update.
///
/// Every field is optional; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    task: Option<String>,
    is_done: Option<bool>,
}

impl TodoPatch {
    /// Validates and builds a patch.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `task` is present but empty or whitespace only
    pub fn new(task: Option<String>, is_done: Option<bool>) -> Result<Self, ValidationError> {
        if let Some(task) = &task {
            validate_task(task)?;
        }
        Ok(Self { task, is_done })
    }

    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    pub fn is_done(&self) -> Option<bool> {
        self.is_done
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.is_done.is_none()
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Option<bool>) {
        (self.task, self.is_done)
    }
}

fn validate_task(task: &str) -> Result<(), ValidationError> {
    if task.trim().is_empty() {
        return Err(ValidationError::empty_field("task"));
    }
    Ok(())
}
