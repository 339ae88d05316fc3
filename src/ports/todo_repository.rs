//! Todo repository port.
//!
//! Defines the contract for persisting and retrieving todos.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Soft delete**: rows are never physically removed; `deleted_at` hides them
//! - **Live by default**: every lookup except `find_by_id_with_deleted`
//!   ignores soft-deleted rows
//! - **No concurrency control**: a save overwrites whatever is stored (last write wins)

use crate::domain::foundation::{DomainError, Timestamp, TodoId};
use crate::domain::todo::Todo;
use async_trait::async_trait;

/// Repository port for todo persistence.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Find all todos that have not been soft-deleted.
    ///
    /// Returns todos ordered by created_at ascending.
    async fn find_all(&self) -> Result<Vec<Todo>, DomainError>;

    /// Find a live todo by its ID.
    ///
    /// Returns `None` if no row exists or the row is soft-deleted.
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, DomainError>;

    /// Find a todo by its ID regardless of deletion state.
    async fn find_by_id_with_deleted(&self, id: &TodoId) -> Result<Option<Todo>, DomainError>;

    /// Persist a newly created todo.
    ///
    /// Returns the todo as stored.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (including duplicate ids)
    async fn insert(&self, todo: &Todo) -> Result<Todo, DomainError>;

    /// Persist a todo whose fields were already merged.
    ///
    /// Returns the todo as stored.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure or when no row matches
    async fn save(&self, todo: &Todo) -> Result<Todo, DomainError>;

    /// Mark a todo as deleted without removing its row.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn soft_delete(&self, id: &TodoId, deleted_at: Timestamp) -> Result<(), DomainError>;
}
