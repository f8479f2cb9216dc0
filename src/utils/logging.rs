use serde::Serialize;
use tracing::{Level, debug};

/// Log `value` as pretty JSON at debug level; skips serialization entirely otherwise.
pub(crate) fn debug_payload<T: Serialize>(message: &str, value: &T) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    match serde_json::to_string_pretty(value) {
        Ok(json) => debug!(payload = %json, "{message}"),
        Err(error) => debug!(%error, "{message} (payload not serializable)"),
    }
}
