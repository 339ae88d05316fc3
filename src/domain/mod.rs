//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `todo` - Todo entity, validated payloads, and lifecycle errors

pub mod foundation;
pub mod todo;
