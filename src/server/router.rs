use crate::server::routes::{gadgets, widgets};
use crate::service::WarehouseService;

use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use std::time::Instant;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 64;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
const UNMATCHED_ROUTE: &str = "<unmatched>";

/// 72 random bits, 12 base64url chars.
fn new_request_id() -> String {
    let mut bytes = [0u8; 9];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// The caller's `x-request-id` when it is short visible ASCII, otherwise a fresh one.
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(new_request_id, str::to_string)
}

#[derive(Clone)]
pub struct WarehouseState {
    pub service: WarehouseService,
}

impl WarehouseState {
    pub fn new(service: WarehouseService) -> Self {
        Self { service }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// One log event per request, keyed by the route template (`/warehouse/widgets/{id}`)
/// rather than the raw path so entity ids don't split the log.
async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, MatchedPath::as_str)
        .to_string();
    let request_id = request_id(req.headers());

    let start = Instant::now();
    let mut resp = next.run(req).await;
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let code = status.as_u16();
    if status.is_server_error() {
        error!(%request_id, %method, %route, status = code, latency_ms, "request failed");
    } else if status.is_client_error() {
        warn!(%request_id, %method, %route, status = code, latency_ms, "request rejected");
    } else {
        info!(%request_id, %method, %route, status = code, latency_ms, "request served");
    }

    resp
}

pub fn warehouse_router(state: WarehouseState) -> Router {
    Router::new()
        .merge(widgets::router())
        .merge(gadgets::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
