//! REST endpoint handlers organized by resource.

pub mod comment;
pub mod post;
pub mod system;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, header};

use crate::app_state::AppState;
use crate::domain::Fields;
use crate::error::{ApiError, Endpoint};

/// Composes the post and comment routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(post::routes())
        .merge(comment::routes())
}

/// Decodes a request body into caller fields.
///
/// Only bodies declared as JSON are parsed; any other content type, and an
/// empty JSON body, yield an empty object. A JSON body must be an object.
fn decode_fields(headers: &HeaderMap, body: &Bytes, endpoint: Endpoint) -> Result<Fields, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Fields::new());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody {
        endpoint,
        detail: e.to_string(),
    })
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
