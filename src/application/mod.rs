//! Application layer - lifecycle orchestration.
//!
//! This layer applies the domain rules around persistence: existence checks,
//! merge updates, and soft deletion. It knows nothing about HTTP.

pub mod handlers;

pub use handlers::TodoLifecycle;
