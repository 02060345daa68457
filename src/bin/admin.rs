//! CLI administration tool for url-registry.
//!
//! Talks to the store directly through the same registry the server uses,
//! without requiring HTTP access.
//!
//! # Usage
//!
//! ```bash
//! # Register a long URL
//! cargo run --bin admin -- create https://example.com/some/long/path
//!
//! # Resolve a code
//! cargo run --bin admin -- resolve aB3xY9
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`url_registry::config`].

use url_registry::AppError;
use url_registry::config;
use url_registry::infrastructure::persistence::{PoolSettings, pool};
use url_registry::state::{Registry, build_registry};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing url-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Register a long URL and print its short code
    Create {
        /// The URL to shorten
        long_url: String,
    },

    /// Print the long URL behind a short code
    Resolve {
        /// The short code to resolve
        code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = pool::connect(&config.database_url, &PoolSettings::from(&config))
        .await
        .context("Failed to connect to database")?;
    pool::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    let registry = build_registry(Arc::new(pool.clone()), &config);

    let result = match cli.command {
        Commands::Create { long_url } => create(&registry, &long_url).await,
        Commands::Resolve { code } => resolve(&registry, &code).await,
        Commands::Db {
            action: DbAction::Check,
        } => db_check(&registry).await,
    };

    pool.close().await;
    result
}

async fn create(registry: &Registry, long_url: &str) -> Result<()> {
    match registry.create(long_url).await {
        Ok(code) => {
            println!("{}", "✅ Short code created".green().bold());
            println!("  Code: {}", code.bright_yellow().bold());
            println!("  URL:  {}", long_url.cyan());
            Ok(())
        }
        Err(AppError::InvalidInput { message, .. }) => {
            eprintln!("{} {}", "❌".red(), message.red());
            bail!("Invalid input: {message}")
        }
        Err(e) => Err(e).context("Failed to create short code"),
    }
}

async fn resolve(registry: &Registry, code: &str) -> Result<()> {
    match registry.lookup(code).await {
        Ok(long_url) => {
            println!("{} → {}", code.bright_yellow().bold(), long_url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No mapping for '{}'", code).yellow());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to resolve short code"),
    }
}

async fn db_check(registry: &Registry) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    registry.ping().await.context("Database ping failed")?;

    println!("{}", "✅ Database connection OK".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use url_registry::config::Config;

    async fn test_registry() -> Registry {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        pool::migrate(&pool).await.unwrap();

        build_registry(Arc::new(pool), &Config::default())
    }

    #[tokio::test]
    async fn test_create_empty_url_fails() {
        let registry = test_registry().await;

        assert!(create(&registry, "").await.is_err());
    }

    #[tokio::test]
    async fn test_create_valid_url_succeeds() {
        let registry = test_registry().await;

        assert!(create(&registry, "https://example.com").await.is_ok());
    }
}
