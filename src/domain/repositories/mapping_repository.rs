//! Repository trait for short code mappings.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage for mappings.
///
/// Implementations must enforce short-code uniqueness atomically on insert;
/// callers never check for an existing code before inserting.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UniquenessConflict`] if the short code is already taken.
    ///
    /// Returns [`AppError::StorageFailure`] on any other database error or timeout.
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageFailure`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
