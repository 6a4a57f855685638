//! PostgreSQL persistence for the community feed.
//!
//! Repositories are zero-sized structs with associated async functions that
//! take a `&PgPool`, mirroring one table (or one read model) each. Reads that
//! are combined into one response also accept any `PgExecutor`, so they can
//! share a [`begin_snapshot`] transaction.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Postgres, Transaction};

pub mod error;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Begin a read-only `REPEATABLE READ` transaction.
///
/// Every statement run on it sees the same snapshot, taken at its first
/// query, so counts and row lists read separately cannot disagree.
pub async fn begin_snapshot(pool: &DbPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
