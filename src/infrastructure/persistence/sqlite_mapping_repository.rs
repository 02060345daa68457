//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Default upper bound on a single store call.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// SQLite repository for mapping storage and retrieval.
///
/// Short-code uniqueness is enforced by the `idx_url_mappings_short_code`
/// unique index. Every call is bounded by an operation timeout; a call that
/// exceeds it is abandoned and reported as a storage failure.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
    operation_timeout: Duration,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn with_operation_timeout(mut self, operation_timeout: Duration) -> Self {
        self.operation_timeout = operation_timeout;
        self
    }

    /// Runs `query` under the operation timeout.
    ///
    /// A timeout that fires after SQLite has committed still reports
    /// `StorageFailure`; the row may exist even though the caller sees an error.
    async fn bounded<T, F>(&self, operation: &'static str, query: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.operation_timeout, query).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => Err(AppError::storage(format!(
                "{operation} timed out after {}ms",
                self.operation_timeout.as_millis()
            ))),
        }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let query = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (long_url, short_code)
            VALUES (?1, ?2)
            RETURNING id, long_url, short_code
            "#,
        )
        .bind(&new_mapping.long_url)
        .bind(&new_mapping.short_code)
        .fetch_one(self.pool.as_ref());

        self.bounded("insert", query).await
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let query = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, long_url, short_code
            FROM url_mappings
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref());

        self.bounded("find_by_code", query).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        let query = sqlx::query("SELECT 1").execute(self.pool.as_ref());

        self.bounded("ping", query).await.map(|_| ())
    }
}
