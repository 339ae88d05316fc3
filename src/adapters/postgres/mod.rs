//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresTodoRepository` - Todo persistence with soft deletion
//! - [`connect`] / [`run_migrations`] - Pool bootstrap used at startup

mod todo_repository;

pub use todo_repository::PostgresTodoRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Builds a connection pool from configuration.
///
/// # Errors
///
/// Returns the underlying sqlx error if no connection can be established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}

/// Applies the embedded schema migrations.
///
/// # Errors
///
/// Returns the migration error if any migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
