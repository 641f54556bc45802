//! Persistence layer: the record store trait, its Postgres
//! implementation, and pool lifecycle helpers.

pub mod models;
pub mod repositories;
pub mod store;

use std::time::Duration;

pub type DbPool = sqlx::PgPool;

/// Create the connection pool. Called once at process start; connection
/// failure here is fatal to the caller.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
