//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET|POST /create`   - Create a short code (`longURL` query/form/JSON field)
//! - `GET  /health`       - Health check
//! - `GET  /favicon.ico`  - 204, never resolved as a code
//! - `GET  /{code}`       - Short link redirect (302)
//!
//! Anything else falls through to a 404.

use crate::api::handlers::{
    create_handler, fallback_handler, favicon_handler, health_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create", get(create_handler).post(create_handler))
        .route("/health", get(health_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}
