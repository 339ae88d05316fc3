//! HTTP routes for todo endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo, TodoAppState};

/// Creates the todo router with all endpoints.
///
/// Mounted under `/api/v1/todos` by [`crate::adapters::http::api_router`].
pub fn todo_routes(state: TodoAppState) -> Router {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/:id", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(state)
}
