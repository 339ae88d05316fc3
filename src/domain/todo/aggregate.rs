//! Todo entity.
//!
//! A todo is created once, mutated only through [`Todo::merge`], and
//! retired through soft deletion. A soft-deleted todo keeps its row but is
//! invisible to every normal lookup.

use serde::Serialize;

use super::values::{NewTodo, TodoPatch};
use crate::domain::foundation::{Timestamp, TodoId};

/// Todo entity - the single resource of the service.
///
/// # Invariants
///
/// - `id` is globally unique and never changes
/// - `task` is non-blank
/// - `created_at` never changes after creation
/// - `deleted_at` is only ever set, never cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    id: TodoId,
    task: String,
    is_done: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
    deleted_at: Option<Timestamp>,
}

impl Todo {
    /// Create a new todo with a freshly assigned id.
    ///
    /// `is_done` defaults to `false` when the payload left it out.
    pub fn create(new: NewTodo) -> Self {
        let (task, is_done) = new.into_parts();
        let now = Timestamp::now();
        Self {
            id: TodoId::new(),
            task,
            is_done: is_done.unwrap_or(false),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Reconstitute a todo from persistence (no validation).
    pub fn reconstitute(
        id: TodoId,
        task: String,
        is_done: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
        deleted_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            task,
            is_done,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn deleted_at(&self) -> Option<&Timestamp> {
        self.deleted_at.as_ref()
    }

    /// Returns true once the todo has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Overlay the fields present in `patch`.
    ///
    /// Absent fields keep their current value. `id`, `created_at` and
    /// `deleted_at` are never touched. An empty patch leaves `updated_at`
    /// alone too.
    pub fn merge(&mut self, patch: TodoPatch) {
        if patch.is_empty() {
            return;
        }
        let (task, is_done) = patch.into_parts();
        if let Some(task) = task {
            self.task = task;
        }
        if let Some(is_done) = is_done {
            self.is_done = is_done;
        }
        self.updated_at = Timestamp::now();
    }

    /// Mark the todo as deleted at the given instant.
    ///
    /// A todo that is already deleted keeps its original deletion time.
    pub fn mark_deleted(&mut self, at: Timestamp) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(at);
        }
    }
}
