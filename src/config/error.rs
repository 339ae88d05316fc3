//! Configuration error types

use thiserror::Error;

/// Failure to build an [`AppConfig`](super::AppConfig) from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A configuration value that loaded but cannot be used.
///
/// Messages name the environment variable to fix.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("TODO_TRACKER__SERVER__HOST is not a bindable address: {0}")]
    InvalidHost(String),

    #[error("TODO_TRACKER__SERVER__PORT must be non-zero")]
    InvalidPort,

    #[error("TODO_TRACKER__SERVER__REQUEST_TIMEOUT_SECS must be between 1 and 300, got {0}")]
    InvalidTimeout(u64),

    #[error("TODO_TRACKER__DATABASE__URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("Database pool needs 0 < min ({min}) <= max ({max})")]
    InvalidPoolSize { min: u32, max: u32 },

    #[error("Database pool of {max} connections exceeds the limit of {limit}")]
    PoolSizeTooLarge { max: u32, limit: u32 },
}
