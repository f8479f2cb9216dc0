use crate::db::models::{Gadget, Widget};
use crate::error::WarehouseError;
use async_trait::async_trait;

/// Entity-level CRUD over the `widgets` and `gadgets` tables.
///
/// Lookups return `Ok(None)` for an absent id so callers can tell "not found"
/// apart from a failed query. Mutations return the number of rows affected;
/// updating or deleting an absent id yields `Ok(0)`.
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn get_all_widgets(&self) -> Result<Vec<Widget>, WarehouseError>;
    async fn get_widget(&self, id: i64) -> Result<Option<Widget>, WarehouseError>;
    async fn insert_widget(&self, widget: &Widget) -> Result<u64, WarehouseError>;
    async fn update_widget(&self, widget: &Widget) -> Result<u64, WarehouseError>;
    async fn delete_widget(&self, id: i64) -> Result<u64, WarehouseError>;

    async fn get_all_gadgets(&self) -> Result<Vec<Gadget>, WarehouseError>;
    async fn get_gadget(&self, id: i64) -> Result<Option<Gadget>, WarehouseError>;
    async fn insert_gadget(&self, gadget: &Gadget) -> Result<u64, WarehouseError>;
    async fn update_gadget(&self, gadget: &Gadget) -> Result<u64, WarehouseError>;
    async fn delete_gadget(&self, id: i64) -> Result<u64, WarehouseError>;
}
