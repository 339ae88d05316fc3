//! HTTP handlers for todo endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::TodoLifecycle;
use crate::domain::foundation::TodoId;
use crate::domain::todo::TodoError;

use super::dto::{CreateTodoRequest, ErrorResponse, TodoResponse, UpdateTodoRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TodoAppState {
    lifecycle: Arc<TodoLifecycle>,
}

impl TodoAppState {
    pub fn new(lifecycle: Arc<TodoLifecycle>) -> Self {
        Self { lifecycle }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/todos - List live todos
pub async fn list_todos(State(state): State<TodoAppState>) -> Response {
    match state.lifecycle.list().await {
        Ok(todos) => {
            let response: Vec<TodoResponse> = todos.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_todo_error(e),
    }
}

/// POST /api/v1/todos - Create a todo
pub async fn create_todo(
    State(state): State<TodoAppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Response {
    let req = match parse_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let new_todo = match req.into_new_todo() {
        Ok(new_todo) => new_todo,
        Err(e) => return handle_todo_error(e.into()),
    };

    match state.lifecycle.create(new_todo).await {
        Ok(todo) => (StatusCode::CREATED, Json(TodoResponse::from(todo))).into_response(),
        Err(e) => handle_todo_error(e),
    }
}

/// GET /api/v1/todos/:id - Get one live todo
pub async fn get_todo(State(state): State<TodoAppState>, Path(id): Path<String>) -> Response {
    let todo_id = match parse_todo_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.lifecycle.find_one(todo_id).await {
        Ok(todo) => (StatusCode::OK, Json(TodoResponse::from(todo))).into_response(),
        Err(e) => handle_todo_error(e),
    }
}

/// PUT /api/v1/todos/:id - Merge the supplied fields into a todo
pub async fn update_todo(
    State(state): State<TodoAppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Response {
    let todo_id = match parse_todo_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match parse_body(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let patch = match req.into_patch() {
        Ok(patch) => patch,
        Err(e) => return handle_todo_error(e.into()),
    };

    match state.lifecycle.update(todo_id, patch).await {
        Ok(todo) => (StatusCode::OK, Json(TodoResponse::from(todo))).into_response(),
        Err(e) => handle_todo_error(e),
    }
}

/// DELETE /api/v1/todos/:id - Soft-delete a todo
pub async fn delete_todo(State(state): State<TodoAppState>, Path(id): Path<String>) -> Response {
    let todo_id = match parse_todo_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.lifecycle.delete(todo_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_todo_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_todo_id(raw: &str) -> Result<TodoId, Response> {
    raw.parse::<TodoId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(
                "Validation failed (uuid is expected)",
            )),
        )
            .into_response()
    })
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(rejection.body_text())),
        )
            .into_response()),
    }
}

fn handle_todo_error(error: TodoError) -> Response {
    let code = error.code();
    match error {
        TodoError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Todo", &id.to_string())),
        )
            .into_response(),
        TodoError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        TodoError::Infrastructure(msg) => {
            error!(code = %code, error = %msg, "Todo request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
