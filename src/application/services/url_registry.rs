//! Mapping creation and resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::entities::NewMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved};

/// Default number of candidates tried before giving up on a create.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Registry of short code → long URL mappings.
///
/// Owns the store handle and the code generator. Safe to share across
/// concurrent requests: uniqueness is enforced by the store's unique index on
/// insert, never by a lookup before the write.
pub struct UrlRegistry<R: MappingRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<R: MappingRepository, G: CodeGenerator> UrlRegistry<R, G> {
    /// Creates a registry with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the attempt budget. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Registers `long_url` under a freshly generated short code.
    ///
    /// # Retry Policy
    ///
    /// Each attempt generates a candidate and inserts it. A uniqueness
    /// violation on the code spends the attempt and tries a new candidate.
    /// Candidates equal to a reserved route segment are discarded without a
    /// write and also spend an attempt.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if `long_url` is empty or blank. Nothing is written.
    /// - [`AppError::CapacityExhausted`] if every attempt collided.
    /// - [`AppError::StorageFailure`] on any other store error; not retried.
    pub async fn create(&self, long_url: &str) -> Result<String, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::invalid_input(
                "longURL is required",
                json!({ "field": "longURL" }),
            ));
        }

        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();

            if is_reserved(&candidate) {
                debug!(attempt, code = %candidate, "Generated reserved code, regenerating");
                continue;
            }

            debug!(attempt, code = %candidate, "Trying short code");

            match self
                .repository
                .insert(NewMapping::new(long_url, candidate))
                .await
            {
                Ok(mapping) => {
                    info!(
                        id = mapping.id,
                        code = %mapping.short_code,
                        attempt,
                        "Short code created"
                    );
                    return Ok(mapping.short_code);
                }
                Err(AppError::UniquenessConflict { message }) => {
                    warn!(attempt, %message, "Short code collision");
                }
                Err(e) => {
                    error!(error = %e, attempt, "Failed to persist mapping");
                    return Err(e);
                }
            }
        }

        error!(
            attempts = self.max_attempts,
            "Exhausted short code attempts"
        );

        Err(AppError::CapacityExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code to its long URL.
    ///
    /// The code's format is not validated; anything unknown is simply not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `short_code`.
    /// Returns [`AppError::StorageFailure`] on database errors.
    pub async fn lookup(&self, short_code: &str) -> Result<String, AppError> {
        let not_found = || {
            AppError::not_found("Short link not found", json!({ "code": short_code }))
        };

        if short_code.is_empty() {
            return Err(not_found());
        }

        self.repository
            .find_by_code(short_code)
            .await?
            .map(|mapping| mapping.long_url)
            .ok_or_else(not_found)
    }

    /// Checks that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
