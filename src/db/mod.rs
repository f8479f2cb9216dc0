//! Database module: models, schema and the repository for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and demo seed (SQLite-first)
//! - `repository.rs`: the `WarehouseRepository` seam used by the service layer
//! - `sqlite.rs`: the pool-backed implementation with literal queries

pub mod models;
pub mod repository;
pub mod schema;
pub mod sqlite;

pub use models::{Gadget, Widget};
pub use repository::WarehouseRepository;
pub use schema::{SQLITE_DEMO_SEED, SQLITE_INIT};
pub use sqlite::SqliteWarehouseRepository;

use crate::config::DatabaseConfig;
use crate::error::WarehouseError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Open the connection pool described by `cfg` and make sure both tables exist.
pub async fn connect(cfg: &DatabaseConfig) -> Result<SqlitePool, WarehouseError> {
    let connect_opts = SqliteConnectOptions::from_str(cfg.url.as_str())?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(connect_opts)
        .await?;

    apply_schema(&pool).await?;
    if cfg.seed_demo_data {
        seed_demo_data(&pool).await?;
    }

    info!(
        database_url = %cfg.url,
        max_connections = cfg.max_connections,
        seed_demo_data = cfg.seed_demo_data,
        "Database pool ready"
    );
    Ok(pool)
}

pub async fn apply_schema(pool: &SqlitePool) -> Result<(), WarehouseError> {
    execute_script(pool, SQLITE_INIT).await
}

pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), WarehouseError> {
    execute_script(pool, SQLITE_DEMO_SEED).await
}

async fn execute_script(pool: &SqlitePool, script: &str) -> Result<(), WarehouseError> {
    for stmt in script.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
