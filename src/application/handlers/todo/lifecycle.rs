//! TodoLifecycle - owns the existence and mutation rules for todos.
//!
//! Every operation that needs an existing todo (get, update, delete) goes
//! through [`TodoLifecycle::find_one`], so the not-found decision is made
//! in exactly one place.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{Timestamp, TodoId};
use crate::domain::todo::{NewTodo, Todo, TodoError, TodoPatch};
use crate::ports::TodoRepository;

/// Lifecycle manager for todos.
pub struct TodoLifecycle {
    repository: Arc<dyn TodoRepository>,
}

impl TodoLifecycle {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// List all live todos in creation order.
    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.repository.find_all().await?;
        debug!(count = todos.len(), "Listed todos");
        Ok(todos)
    }

    /// Fetch a single live todo.
    ///
    /// Any failure of the lookup, including a storage error, is reported as
    /// `NotFound`. The storage error is logged so the two cases can still be
    /// told apart operationally.
    pub async fn find_one(&self, id: TodoId) -> Result<Todo, TodoError> {
        match self.repository.find_by_id(&id).await {
            Ok(Some(todo)) => Ok(todo),
            Ok(None) => {
                debug!(todo_id = %id, "Todo not found");
                Err(TodoError::not_found(id))
            }
            Err(e) => {
                warn!(todo_id = %id, error = %e, "Todo lookup failed, reporting as not found");
                Err(TodoError::not_found(id))
            }
        }
    }

    /// Create and persist a new todo.
    pub async fn create(&self, new: NewTodo) -> Result<Todo, TodoError> {
        let todo = Todo::create(new);
        let stored = self.repository.insert(&todo).await?;
        info!(todo_id = %stored.id(), "Todo created");
        Ok(stored)
    }

    /// Overlay `patch` onto an existing live todo.
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, TodoError> {
        let mut todo = self.find_one(id).await?;
        todo.merge(patch);
        let stored = self.repository.save(&todo).await?;
        info!(todo_id = %id, "Todo updated");
        Ok(stored)
    }

    /// Soft-delete an existing live todo.
    pub async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        self.find_one(id).await?;
        self.repository.soft_delete(&id, Timestamp::now()).await?;
        info!(todo_id = %id, "Todo deleted");
        Ok(())
    }
}
