//! PostgreSQL persistence layer for the YPSL website backend.
//!
//! Exposes the connection pool entry points plus per-collection models and
//! repositories. Repositories take the policy engine's [`Access`] decision
//! and lower any scoping predicate directly into the SQL statement, so
//! row-level security is enforced by the database rather than by
//! post-filtering in application code.
//!
//! [`Access`]: ypsl_core::policy::Access

pub mod models;
pub mod repositories;
pub mod sql;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Convenience alias re-exported to the API crate.
pub type DbPool = PgPool;

/// Create a connection pool against the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from the crate's `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
