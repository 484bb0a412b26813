//! Explicit application state: opened at startup, closed at shutdown.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::core::{IdGenerator, Result};
use crate::modules::loans::{LoanRepository, LoanService};

/// Handles shared by every HTTP worker
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub loans: Arc<LoanService>,
}

impl AppState {
    /// Open the pool, ensure the schema exists and wire the loan service
    pub async fn open(database: &DatabaseConfig, ids: Arc<dyn IdGenerator>) -> Result<Self> {
        let pool = database.create_pool().await?;
        tracing::info!(url = %database.url, "Database pool initialized");

        let repository = LoanRepository::new(pool.clone(), database.query_timeout());
        repository.initialize_schema().await?;

        Ok(Self {
            pool,
            loans: Arc::new(LoanService::new(Arc::new(repository), ids)),
        })
    }

    /// Wait for in-flight queries and close every connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
