use crate::core::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub query_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://loans.db".to_string()),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", "5")?,
            acquire_timeout_secs: parse_var("DATABASE_ACQUIRE_TIMEOUT_SECS", "5")?,
            query_timeout_secs: parse_var("DATABASE_QUERY_TIMEOUT_SECS", "5")?,
        })
    }

    /// In-memory configuration, one shared connection
    pub fn in_memory() -> Self {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 5,
            query_timeout_secs: 5,
        }
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Every connection to `sqlite::memory:` opens a separate database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Create a SQLite connection pool, creating the database file if missing
    pub async fn create_pool(&self) -> Result<SqlitePool> {
        let options = SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs));

        pool_options = if self.is_in_memory() {
            // The database lives exactly as long as its single connection.
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .max_connections(self.max_connections)
                .idle_timeout(Duration::from_secs(600)) // 10 minutes
                .max_lifetime(Duration::from_secs(1800)) // 30 minutes
        };

        pool_options
            .connect_with(options)
            .await
            .map_err(AppError::Storage)
    }
}

fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid {}", name)))
}
