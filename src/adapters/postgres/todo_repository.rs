//! PostgreSQL implementation of TodoRepository.
//!
//! Persists todos to the `todos` table. Soft-deleted rows stay in the table
//! with `deleted_at` set and are filtered out of every live query.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, TodoId};
use crate::domain::todo::Todo;
use crate::ports::TodoRepository;

const TODO_COLUMNS: &str = "id, task, is_done, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of TodoRepository.
#[derive(Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// Creates a new PostgresTodoRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE deleted_at IS NULL ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch todos", e))?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch todo", e))?;

        row.map(row_to_todo).transpose()
    }

    async fn find_by_id_with_deleted(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        let row = sqlx::query(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch todo", e))?;

        row.map(row_to_todo).transpose()
    }

    async fn insert(&self, todo: &Todo) -> Result<Todo, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO todos (id, task, is_done, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TODO_COLUMNS}
            "#
        ))
        .bind(todo.id().as_uuid())
        .bind(todo.task())
        .bind(todo.is_done())
        .bind(todo.created_at().as_datetime())
        .bind(todo.updated_at().as_datetime())
        .bind(todo.deleted_at().map(|ts| *ts.as_datetime()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert todo", e))?;

        row_to_todo(row)
    }

    async fn save(&self, todo: &Todo) -> Result<Todo, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE todos SET
                task = $2,
                is_done = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING {TODO_COLUMNS}
            "#
        ))
        .bind(todo.id().as_uuid())
        .bind(todo.task())
        .bind(todo.is_done())
        .bind(todo.updated_at().as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update todo", e))?;

        match row {
            Some(row) => row_to_todo(row),
            None => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("No row to update for todo: {}", todo.id()),
            )),
        }
    }

    async fn soft_delete(&self, id: &TodoId, deleted_at: Timestamp) -> Result<(), DomainError> {
        sqlx::query("UPDATE todos SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL")
            .bind(id.as_uuid())
            .bind(deleted_at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete todo", e))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_todo(row: sqlx::postgres::PgRow) -> Result<Todo, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let task: String = column(&row, "task")?;
    let is_done: bool = column(&row, "is_done")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;
    let deleted_at: Option<chrono::DateTime<chrono::Utc>> = column(&row, "deleted_at")?;

    Ok(Todo::reconstitute(
        TodoId::from_uuid(id),
        task,
        is_done,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
        deleted_at.map(Timestamp::from_datetime),
    ))
}
