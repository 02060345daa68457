//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite://urls.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_MAX_ATTEMPTS` - Short code candidates tried per create (default: 5, max: 20)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)
//! - `DB_IDLE_TIMEOUT` - Idle connection lifetime in seconds (default: 600)
//! - `DB_MAX_LIFETIME` - Maximum connection lifetime in seconds (default: 1800)
//! - `DB_BUSY_TIMEOUT` - Seconds SQLite waits on a locked database (default: 5)
//! - `DB_OPERATION_TIMEOUT` - Seconds before a single store call is abandoned (default: 10)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::services::DEFAULT_MAX_ATTEMPTS;

/// Upper bound for `CODE_MAX_ATTEMPTS`.
const MAX_CODE_ATTEMPTS: u32 = 20;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Candidates tried by the registry before reporting capacity exhaustion.
    pub code_max_attempts: u32,

    // ── Pool settings ───────────────────────────────────────────────────────
    pub db_max_connections: u32,
    pub db_connect_timeout: u64,
    pub db_idle_timeout: u64,
    pub db_max_lifetime: u64,
    pub db_busy_timeout: u64,
    pub db_operation_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://urls.db?mode=rwc".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
            db_max_connections: 10,
            db_connect_timeout: 30,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
            db_busy_timeout: 5,
            db_operation_timeout: 10,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            code_max_attempts: parse_var("CODE_MAX_ATTEMPTS", defaults.code_max_attempts)?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", defaults.db_connect_timeout)?,
            db_idle_timeout: parse_var("DB_IDLE_TIMEOUT", defaults.db_idle_timeout)?,
            db_max_lifetime: parse_var("DB_MAX_LIFETIME", defaults.db_max_lifetime)?,
            db_busy_timeout: parse_var("DB_BUSY_TIMEOUT", defaults.db_busy_timeout)?,
            db_operation_timeout: parse_var(
                "DB_OPERATION_TIMEOUT",
                defaults.db_operation_timeout,
            )?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    /// - `code_max_attempts` is outside `1..=20`
    /// - a pool size or timeout is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > MAX_CODE_ATTEMPTS {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and {}, got {}",
                MAX_CODE_ATTEMPTS,
                self.code_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }
        if self.db_operation_timeout == 0 {
            anyhow::bail!("DB_OPERATION_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Code attempts: {}", self.code_max_attempts);
        tracing::info!("  Pool size: {}", self.db_max_connections);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
