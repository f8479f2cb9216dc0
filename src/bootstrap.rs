//! Explicit wiring: repository -> service -> router.

use crate::config::Config;
use crate::db::{self, SqliteWarehouseRepository};
use crate::error::WarehouseError;
use crate::server::router::{WarehouseState, warehouse_router};
use crate::service::WarehouseService;
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Build the HTTP application on top of an already-open pool.
pub fn assemble(pool: SqlitePool) -> Router {
    let repo = Arc::new(SqliteWarehouseRepository::new(pool));
    let service = WarehouseService::new(repo);
    warehouse_router(WarehouseState::new(service))
}

/// Open the configured database and build the application.
pub async fn build(cfg: &Config) -> Result<Router, WarehouseError> {
    let pool = db::connect(&cfg.database).await?;
    Ok(assemble(pool))
}
