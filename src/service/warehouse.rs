use crate::db::{Gadget, WarehouseRepository, Widget};
use crate::error::WarehouseError;
use std::sync::Arc;
use tracing::error;

/// Business-facing warehouse operations.
///
/// There are no business rules yet: every call delegates to the repository.
/// Failures are logged here, once, with the operation that produced them.
#[derive(Clone)]
pub struct WarehouseService {
    repo: Arc<dyn WarehouseRepository>,
}

fn log_failure<T>(op: &'static str, res: Result<T, WarehouseError>) -> Result<T, WarehouseError> {
    if let Err(e) = &res {
        error!(operation = op, error = %e, "Warehouse operation failed");
    }
    res
}

impl WarehouseService {
    pub fn new(repo: Arc<dyn WarehouseRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all_widgets(&self) -> Result<Vec<Widget>, WarehouseError> {
        log_failure("find_all_widgets", self.repo.get_all_widgets().await)
    }

    pub async fn find_widget_by_id(&self, id: i64) -> Result<Option<Widget>, WarehouseError> {
        log_failure("find_widget_by_id", self.repo.get_widget(id).await)
    }

    pub async fn add_widget(&self, widget: &Widget) -> Result<u64, WarehouseError> {
        log_failure("add_widget", self.repo.insert_widget(widget).await)
    }

    pub async fn modify_widget(&self, widget: &Widget) -> Result<u64, WarehouseError> {
        log_failure("modify_widget", self.repo.update_widget(widget).await)
    }

    pub async fn remove_widget(&self, id: i64) -> Result<u64, WarehouseError> {
        log_failure("remove_widget", self.repo.delete_widget(id).await)
    }

    pub async fn find_all_gadgets(&self) -> Result<Vec<Gadget>, WarehouseError> {
        log_failure("find_all_gadgets", self.repo.get_all_gadgets().await)
    }

    pub async fn find_gadget_by_id(&self, id: i64) -> Result<Option<Gadget>, WarehouseError> {
        log_failure("find_gadget_by_id", self.repo.get_gadget(id).await)
    }

    pub async fn add_gadget(&self, gadget: &Gadget) -> Result<u64, WarehouseError> {
        log_failure("add_gadget", self.repo.insert_gadget(gadget).await)
    }

    pub async fn modify_gadget(&self, gadget: &Gadget) -> Result<u64, WarehouseError> {
        log_failure("modify_gadget", self.repo.update_gadget(gadget).await)
    }

    pub async fn remove_gadget(&self, id: i64) -> Result<u64, WarehouseError> {
        log_failure("remove_gadget", self.repo.delete_gadget(id).await)
    }
}
