//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::UrlRegistry;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::utils::code_generator::RandomCodeGenerator;

/// The registry as wired for production: SQLite storage and a seeded RNG.
pub type Registry = UrlRegistry<SqliteMappingRepository, RandomCodeGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

/// Builds the registry once at startup.
///
/// The generator is seeded here and shared by every request for the lifetime
/// of the process.
pub fn build_registry(pool: Arc<SqlitePool>, config: &Config) -> Registry {
    let repository = SqliteMappingRepository::new(pool)
        .with_operation_timeout(Duration::from_secs(config.db_operation_timeout));

    UrlRegistry::new(Arc::new(repository), Arc::new(RandomCodeGenerator::new()))
        .with_max_attempts(config.code_max_attempts)
}
