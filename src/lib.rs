//! Todo Tracker - Soft-deleting Todo Service
//!
//! This crate implements a small todo resource over REST. Todos are created,
//! merged field-by-field on update, and soft-deleted so that removed rows stay
//! in storage while disappearing from every read.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
