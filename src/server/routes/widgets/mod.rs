use crate::server::router::WarehouseState;
use axum::{Router, routing::get};

pub mod handlers;

pub fn router() -> Router<WarehouseState> {
    Router::new()
        .route(
            "/warehouse/widgets",
            get(handlers::list_widgets)
                .post(handlers::add_widget)
                .put(handlers::update_widget_from_body),
        )
        .route(
            "/warehouse/widgets/{id}",
            get(handlers::get_widget)
                .put(handlers::update_widget)
                .delete(handlers::remove_widget),
        )
}
