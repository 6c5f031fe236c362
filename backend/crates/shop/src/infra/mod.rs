//! Infrastructure Layer

pub mod memory;
pub mod pakasir;
pub mod pterodactyl;

use serde_json::Value;

use crate::error::UpstreamError;

/// Non-empty text of a loosely typed JSON field
pub(crate) fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn status_error(status: reqwest::StatusCode) -> UpstreamError {
    UpstreamError::Api {
        status: status.as_u16(),
        message: status.canonical_reason().unwrap_or("Unknown").into(),
    }
}

/// Read a JSON body, preferring an error message the API put in it.
///
/// `error_of` extracts that message; without one, a non-success status
/// becomes [`UpstreamError::Api`].
pub(crate) async fn read_json(
    resp: reqwest::Response,
    error_of: fn(&Value) -> Option<String>,
) -> Result<Value, UpstreamError> {
    let status = resp.status();
    let body = match resp.json::<Value>().await {
        Ok(body) => body,
        Err(_) if !status.is_success() => return Err(status_error(status)),
        Err(e) => return Err(e.into()),
    };

    if let Some(message) = error_of(&body) {
        return Err(UpstreamError::Rejected(message));
    }
    if !status.is_success() {
        return Err(status_error(status));
    }
    Ok(body)
}
