//! In-Memory Todo Repository Adapter
//!
//! Keeps todos in a vector guarded by an async lock. Rows are kept in
//! insertion order, which is also creation order. Useful for testing and
//! local development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, TodoId};
use crate::domain::todo::Todo;
use crate::ports::TodoRepository;

/// In-memory storage for todos
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, soft-deleted ones included
    pub async fn row_count(&self) -> usize {
        self.todos.read().await.len()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().filter(|t| !t.is_deleted()).cloned().collect())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(todos
            .iter()
            .find(|t| t.id() == id && !t.is_deleted())
            .cloned())
    }

    async fn find_by_id_with_deleted(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id() == id).cloned())
    }

    async fn insert(&self, todo: &Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        if todos.iter().any(|t| t.id() == todo.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Duplicate todo id: {}", todo.id()),
            ));
        }
        todos.push(todo.clone());
        Ok(todo.clone())
    }

    async fn save(&self, todo: &Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        let stored = todos
            .iter_mut()
            .find(|t| t.id() == todo.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("No row to update for todo: {}", todo.id()),
                )
            })?;
        *stored = todo.clone();
        Ok(todo.clone())
    }

    async fn soft_delete(&self, id: &TodoId, deleted_at: Timestamp) -> Result<(), DomainError> {
        let mut todos = self.todos.write().await;
        if let Some(todo) = todos.iter_mut().find(|t| t.id() == id) {
            todo.mark_deleted(deleted_at);
        }
        Ok(())
    }
}
