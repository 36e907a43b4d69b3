//! Data-access layer for the Kalorio food diary.
//!
//! One model module and one repository per table. Repositories are
//! zero-sized structs whose async methods take `&PgPool` as the first
//! argument and run a single auto-committed statement each.

use sqlx::postgres::PgPoolOptions;

pub mod category;
pub mod models;
pub mod repositories;

pub use category::{CategoryRegistry, DEFAULT_CATEGORY};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
