//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted short code → long URL mapping
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};
