use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::debug;

#[derive(Debug, ThisError)]
pub enum WarehouseError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Path id {path} does not match body id {body}")]
    IdMismatch { path: i64, body: i64 },

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<JsonRejection> for WarehouseError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(e) => {
                WarehouseError::UnexpectedError(format!("Failed to read request body: {e}"))
            }
            JsonRejection::JsonSyntaxError(e) => WarehouseError::InvalidJson(e.body_text()),
            other => WarehouseError::InvalidRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for WarehouseError {
    fn from(rejection: PathRejection) -> Self {
        WarehouseError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for WarehouseError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            WarehouseError::DatabaseError(_) | WarehouseError::UnexpectedError(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }

            WarehouseError::InvalidJson(detail) => {
                debug!(detail = %detail, "Rejected request body");
                let body = ApiErrorObject {
                    code: "INVALID_JSON".to_string(),
                    message: "invalid JSON".to_string(),
                };
                (StatusCode::BAD_REQUEST, body)
            }

            WarehouseError::InvalidRequest(detail) => {
                let body = ApiErrorObject {
                    code: "INVALID_REQUEST".to_string(),
                    message: detail,
                };
                (StatusCode::BAD_REQUEST, body)
            }

            WarehouseError::IdMismatch { path, body } => {
                let body = ApiErrorObject {
                    code: "ID_MISMATCH".to_string(),
                    message: format!("path id {path} does not match body id {body}"),
                };
                (StatusCode::BAD_REQUEST, body)
            }
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: WarehouseError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn database_failures_are_opaque_500s() {
        let (status, body) = render(WarehouseError::DatabaseError(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn id_mismatch_is_a_client_error() {
        let (status, body) = render(WarehouseError::IdMismatch { path: 1, body: 2 }).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "ID_MISMATCH");
        assert_eq!(body["error"]["message"], "path id 1 does not match body id 2");
    }
}
