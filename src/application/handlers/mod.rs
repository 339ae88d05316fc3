//! Application handlers.
//!
//! Orchestrate domain operations over the repository ports.

pub mod todo;

pub use todo::TodoLifecycle;
