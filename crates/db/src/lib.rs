//! Persistence layer for the catalog.
//!
//! The pool is constructed explicitly by each binary and handed to the
//! repositories; there is no process-wide connection state.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod config;
pub mod models;
pub mod repositories;

pub use config::{ConfigError, DatabaseConfig};

pub type DbPool = sqlx::PgPool;

/// How long a query waits for a pooled connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool without opening any connection.
///
/// The first query opens the first connection, so an unreachable database
/// surfaces as a query error rather than a startup failure.
pub fn create_pool(options: PgConnectOptions, max_connections: u32) -> DbPool {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy_with(options)
}

/// Create a pool from a [`DatabaseConfig`].
pub fn create_pool_from_config(config: &DatabaseConfig) -> Result<DbPool, ConfigError> {
    Ok(create_pool(config.connect_options()?, config.max_connections))
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the catalog schema migrations in `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
