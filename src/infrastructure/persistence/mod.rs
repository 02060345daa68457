//! SQLite persistence.
//!
//! - [`pool`] - Connection pool construction and embedded migrations
//! - [`SqliteMappingRepository`] - Mapping storage and retrieval

pub mod pool;
pub mod sqlite_mapping_repository;

pub use pool::PoolSettings;
pub use sqlite_mapping_repository::SqliteMappingRepository;
