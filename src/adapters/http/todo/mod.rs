//! HTTP adapter for todo endpoints.
//!
//! Exposes the todo lifecycle as a REST resource:
//! - `GET /` - list live todos
//! - `POST /` - create a todo
//! - `GET /:id` - fetch one live todo
//! - `PUT /:id` - merge fields into a todo
//! - `DELETE /:id` - soft-delete a todo

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CreateTodoRequest, ErrorResponse, TodoResponse, UpdateTodoRequest};
pub use handlers::TodoAppState;
pub use routes::todo_routes;
