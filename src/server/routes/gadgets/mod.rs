use crate::server::router::WarehouseState;
use axum::{Router, routing::get};

pub mod handlers;

pub fn router() -> Router<WarehouseState> {
    Router::new()
        .route(
            "/warehouse/gadgets",
            get(handlers::list_gadgets)
                .post(handlers::add_gadget)
                .put(handlers::update_gadget_from_body),
        )
        .route(
            "/warehouse/gadgets/{id}",
            get(handlers::get_gadget)
                .put(handlers::update_gadget)
                .delete(handlers::remove_gadget),
        )
}
