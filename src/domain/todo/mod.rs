//! Todo domain module.
//!
//! Handles the todo item lifecycle: creation, merge updates, and soft
//! deletion. Todos are the only resource of the service.

mod aggregate;
mod errors;
mod values;

pub use aggregate::Todo;
pub use errors::TodoError;
pub use values::{NewTodo, TodoPatch};
