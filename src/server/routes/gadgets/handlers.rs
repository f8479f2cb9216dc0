use crate::db::Gadget;
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

/// GET /warehouse/gadgets
pub(super) async fn list_gadgets(
    State(state): State<WarehouseState>,
) -> Result<Response, WarehouseError> {
    let gadgets = state.service.find_all_gadgets().await?;
    Ok(respond::list(gadgets))
}

/// GET /warehouse/gadgets/{id}
pub(super) async fn get_gadget(
    State(state): State<WarehouseState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WarehouseError> {
    let Path(id) = id?;
    let gadget = state.service.find_gadget_by_id(id).await?;
    Ok(respond::found(gadget))
}

/// POST /warehouse/gadgets
///
/// A duplicate id surfaces as a constraint violation, i.e. a 500.
pub(super) async fn add_gadget(
    State(state): State<WarehouseState>,
    payload: Result<Json<Gadget>, JsonRejection>,
) -> Result<Response, WarehouseError> {
    let Json(gadget) = payload?;
    debug_payload("Adding gadget", &gadget);
    let rows = state.service.add_gadget(&gadget).await?;
    Ok(respond::created(rows))
}

/// PUT /warehouse/gadgets/{id}
pub(super) async fn update_gadget(
    State(state): State<WarehouseState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Gadget>, JsonRejection>,
) -> Result<Response, WarehouseError> {
    let Path(id) = id?;
    let Json(gadget) = payload?;
    if gadget.id != id {
        return Err(WarehouseError::IdMismatch {
            path: id,
            body: gadget.id,
        });
    }
    let rows = state.service.modify_gadget(&gadget).await?;
    Ok(respond::affected(rows))
}

/// PUT /warehouse/gadgets (id taken from the body)
pub(super) async fn update_gadget_from_body(
    State(state): State<WarehouseState>,
    payload: Result<Json<Gadget>, JsonRejection>,
) -> Result<Response, WarehouseError> {
    let Json(gadget) = payload?;
    let rows = state.service.modify_gadget(&gadget).await?;
    Ok(respond::affected(rows))
}

/// DELETE /warehouse/gadgets/{id}
pub(super) async fn remove_gadget(
    State(state): State<WarehouseState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WarehouseError> {
    let Path(id) = id?;
    let rows = state.service.remove_gadget(id).await?;
    Ok(respond::affected(rows))
}
