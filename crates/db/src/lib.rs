//! Persistence for the CreatorHub marketplace.
//!
//! - [`store`] -- the [`EntityStore`] port and its error type.
//! - [`postgres`] / [`memory`] -- the two backends.
//! - [`catalog`] -- read-side aggregation into [`models::asset::AssetWithDetails`].
//! - [`counter`] -- category asset-count maintenance.

use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod counter;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use catalog::Catalog;
pub use memory::MemStore;
pub use postgres::PgStore;
pub use store::{EntityStore, StoreError, StoreResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
