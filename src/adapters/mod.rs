//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoints and middleware (axum, tower-http)
//! - `postgres` - Repository implementation over sqlx
//! - `memory` - In-process repository for tests and local runs

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryTodoRepository;
pub use postgres::PostgresTodoRepository;
