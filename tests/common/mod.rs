#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use url_registry::config::Config;
use url_registry::infrastructure::persistence::{PoolSettings, pool};
use url_registry::state::{AppState, build_registry};

/// Fresh in-memory database with the schema applied.
///
/// A single connection is kept alive for the whole test; an in-memory
/// SQLite database lives exactly as long as its connection.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    pool::migrate(&pool).await.unwrap();
    pool
}

/// On-disk database opened through the production pool settings.
///
/// Returns the path too, so the caller can remove the file (and its WAL
/// siblings) with [`remove_test_db`].
pub async fn create_file_pool() -> (SqlitePool, PathBuf) {
    static NEXT: AtomicU32 = AtomicU32::new(0);

    let path = std::env::temp_dir().join(format!(
        "url-registry-test-{}-{}.db",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    ));
    remove_test_db(&path);

    let url = format!("sqlite://{}", path.display());
    let pool = pool::connect(&url, &PoolSettings::default()).await.unwrap();

    pool::migrate(&pool).await.unwrap();
    (pool, path)
}

pub fn remove_test_db(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let registry = build_registry(Arc::new(pool), &Config::default());
    AppState::new(Arc::new(registry))
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO url_mappings (short_code, long_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Extracts the code from a `Short URL: <code>` response body.
pub fn parse_code(body: &str) -> String {
    body.trim()
        .strip_prefix("Short URL: ")
        .unwrap_or_else(|| panic!("unexpected body: {body:?}"))
        .to_string()
}
