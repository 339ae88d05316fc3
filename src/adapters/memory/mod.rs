//! In-memory adapters for tests and local development.

mod todo_repository;

pub use todo_repository::InMemoryTodoRepository;
