use crate::db::Widget;
use crate::error::WarehouseError;
use crate::server::respond;
use crate::server::router::WarehouseState;
use crate::utils::logging::debug_payload;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Response,
};

/// GET /warehouse/widgets
pub(super) async fn list_widgets(
    State(state): State<WarehouseState>,
) -> Result<Response, WarehouseError> {
    let widgets = state.service.find_all_widgets().await?;
    Ok(respond::list(widgets))
}

/// GET /warehouse/widgets/{id}
pub(super) async fn get_widget(
    State(state): State<WarehouseState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WarehouseError> {
    let Path(id) = id?;
    let widget = state.service.find_widget_by_id(id).await?;
    Ok(respond::found(widget))
}

/// POST /warehouse/widgets
///
/// A duplicate id surfaces as a constraint violation, i.e. a 500.
pub(super) async fn add_widget(
    State(state): State<WarehouseState>,
    payload: Result<Json<Widget>, JsonRejection>,
) -> Result<Response, WarehouseError> {
    let Json(widget) = payload?;
    debug_payload("Adding widget", &widget);
    let rows = state.service.add_widget(&widget).await?;
    Ok(respond::created(rows))
}

/// PUT /warehouse/widgets/{id}
pub(super) async fn update_widget(
    State(state): State<WarehouseState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Widget>, JsonRejection>,
) -> Result<Response, WarehouseError> {
    let Path(id) = id?;
    let Json(widget) = payload?;
    if widget.id != id {
        return Err(WarehouseError::IdMismatch {
            path: id,
            body: widget.id,
        });
    }
    let rows = state.service.modify_widget(&widget).await?;
    Ok(respond::affected(rows))
}

/// PUT /warehouse/widgets (id taken from the body)
pub(super) async fn update_widget_from_body(
    State(state): State<WarehouseState>,
    payload: Result<Json<Widget>, JsonRejection>,
) -> Result<Response, WarehouseError> {
    let Json(widget) = payload?;
    let rows = state.service.modify_widget(&widget).await?;
    Ok(respond::affected(rows))
}

/// DELETE /warehouse/widgets/{id}
pub(super) async fn remove_widget(
    State(state): State<WarehouseState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WarehouseError> {
    let Path(id) = id?;
    let rows = state.service.remove_widget(id).await?;
    Ok(respond::affected(rows))
}
