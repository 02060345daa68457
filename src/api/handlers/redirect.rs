//! Handlers for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use percent_encoding::{CONTROLS, utf8_percent_encode};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Every request reads the store; there is no cache in front of it.
///
/// URLs are stored verbatim, so control characters and non-ASCII bytes are
/// percent-encoded before they go into the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.registry.lookup(&code).await?;

    debug!(%code, %long_url, "Redirecting");

    let location = location_header(&long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    let encoded = utf8_percent_encode(long_url, CONTROLS).to_string();

    HeaderValue::try_from(encoded).map_err(|e| {
        AppError::storage(format!("Stored URL is not a valid Location header: {e}"))
    })
}

/// Answers browser favicon probes without touching the store.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for paths that cannot be a short code (e.g. `/` or nested paths).
pub async fn fallback_handler() -> AppError {
    AppError::not_found("Short link not found", json!({}))
}
