//! # URL Registry
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Long URLs are registered under random 6-character codes drawn from
//! `[a-zA-Z0-9]`; codes resolve back to their URL with a `302 Found`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and repository trait
//! - **Application Layer** ([`application`]) - [`UrlRegistry`]: code allocation with bounded collision retry, and lookup
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Uniqueness
//!
//! Codes are never checked for availability before use. The registry inserts
//! each candidate directly and relies on the store's unique index to reject
//! duplicates atomically, so concurrent creates can never share a code.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db?mode=rwc"   # Optional, this is the default
//! cargo run
//!
//! curl 'http://localhost:8080/create?longURL=https://example.com'
//! # Short URL: aB3xY9
//! curl -i http://localhost:8080/aB3xY9
//! # HTTP/1.1 302 Found
//! # location: https://example.com
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::UrlRegistry;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlRegistry;
    pub use crate::domain::entities::{NewMapping, UrlMapping};
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
