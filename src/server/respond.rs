use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Rows affected by an insert, update or delete.
///
/// Serialized as `{"rowCount": n}`; a bare integer is never sent as a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCount {
    #[serde(rename = "rowCount")]
    pub row_count: u64,
}

impl RowCount {
    pub fn new(row_count: u64) -> Self {
        Self { row_count }
    }
}

/// 200 with the JSON array, or 204 with an empty body when there is nothing to list.
pub(crate) fn list<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(items).into_response()
    }
}

/// 200 with the JSON object, or 404 with an empty body.
pub(crate) fn found<T: Serialize>(item: Option<T>) -> Response {
    match item {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// 200 with the row count.
pub(crate) fn created(rows: u64) -> Response {
    Json(RowCount::new(rows)).into_response()
}

/// 200 with the row count, or 404 with `{"rowCount":0}` when no row had the id.
pub(crate) fn affected(rows: u64) -> Response {
    let status = if rows == 0 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Json(RowCount::new(rows))).into_response()
}
