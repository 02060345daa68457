//! HTTP API layer.
//!
//! Translates HTTP requests into registry operations and formats responses.
//!
//! - [`dto`] - Request/response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
