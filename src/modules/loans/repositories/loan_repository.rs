// Loan persistence over a single SQLite table.
//
// Money columns are TEXT holding the canonical decimal string; SQLite's
// NUMERIC affinity would turn them into binary floats. Each operation is a
// single statement bounded by `query_timeout`.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::core::money::{from_storage, to_storage};
use crate::core::{AppError, Repository, Result};
use crate::modules::loans::models::Loan;

const CREATE_LOANS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS loans (
        loan_id               TEXT PRIMARY KEY,
        customer_id           TEXT NOT NULL,
        loan_amount           TEXT NOT NULL,
        loan_period_years     INTEGER NOT NULL,
        interest_rate_yearly  TEXT NOT NULL,
        total_amount_payable  TEXT NOT NULL,
        monthly_emi           TEXT NOT NULL
    )
"#;

/// Repository for loan database operations
#[derive(Clone)]
pub struct LoanRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl LoanRepository {
    /// Create a new loan repository
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Create the `loans` table unless it already exists
    ///
    /// Safe to run on every startup: existing rows are untouched.
    pub async fn initialize_schema(&self) -> Result<()> {
        self.bounded(sqlx::query(CREATE_LOANS_TABLE).execute(&self.pool))
            .await?;

        tracing::info!("Loan schema ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, operation).await {
            Ok(result) => result.map_err(AppError::Storage),
            Err(_) => {
                tracing::warn!(timeout = ?self.query_timeout, "Storage call timed out");
                Err(AppError::StorageTimeout(self.query_timeout))
            }
        }
    }
}

#[async_trait]
impl Repository<Loan, str> for LoanRepository {
    async fn create(&self, loan: &Loan) -> Result<()> {
        self.bounded(
            sqlx::query(
                r#"
                INSERT INTO loans (
                    loan_id, customer_id, loan_amount, loan_period_years,
                    interest_rate_yearly, total_amount_payable, monthly_emi
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&loan.loan_id)
            .bind(&loan.customer_id)
            .bind(to_storage(loan.loan_amount))
            .bind(loan.loan_period_years)
            .bind(to_storage(loan.interest_rate_yearly))
            .bind(to_storage(loan.total_amount_payable))
            .bind(to_storage(loan.monthly_emi))
            .execute(&self.pool),
        )
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, loan_id: &str) -> Result<Option<Loan>> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LoanRow>(
                    r#"
                    SELECT loan_id, customer_id, loan_amount, loan_period_years,
                           interest_rate_yearly, total_amount_payable, monthly_emi
                    FROM loans
                    WHERE loan_id = ?
                    "#,
                )
                .bind(loan_id)
                .fetch_optional(&self.pool),
            )
            .await?;

        row.map(LoanRow::into_loan).transpose()
    }

    async fn delete(&self, loan_id: &str) -> Result<bool> {
        let result = self
            .bounded(
                sqlx::query("DELETE FROM loans WHERE loan_id = ?")
                    .bind(loan_id)
                    .execute(&self.pool),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Loan>> {
        let rows = self
            .bounded(
                sqlx::query_as::<_, LoanRow>(
                    r#"
                    SELECT loan_id, customer_id, loan_amount, loan_period_years,
                           interest_rate_yearly, total_amount_payable, monthly_emi
                    FROM loans
                    ORDER BY rowid
                    "#,
                )
                .fetch_all(&self.pool),
            )
            .await?;

        rows.into_iter().map(LoanRow::into_loan).collect()
    }
}

/// Raw `loans` row
#[derive(Debug, FromRow)]
struct LoanRow {
    loan_id: String,
    customer_id: String,
    loan_amount: String,
    loan_period_years: i64,
    interest_rate_yearly: String,
    total_amount_payable: String,
    monthly_emi: String,
}

impl LoanRow {
    fn into_loan(self) -> Result<Loan> {
        let decimal = |column: &str, raw: &str| {
            from_storage(raw).map_err(|e| {
                tracing::error!(loan_id = %self.loan_id, column, raw, "Corrupt decimal in loans table");
                AppError::Storage(sqlx::Error::Decode(Box::new(e)))
            })
        };

        Ok(Loan {
            loan_amount: decimal("loan_amount", &self.loan_amount)?,
            interest_rate_yearly: decimal("interest_rate_yearly", &self.interest_rate_yearly)?,
            total_amount_payable: decimal("total_amount_payable", &self.total_amount_payable)?,
            monthly_emi: decimal("monthly_emi", &self.monthly_emi)?,
            loan_period_years: self.loan_period_years,
            customer_id: self.customer_id.clone(),
            loan_id: self.loan_id.clone(),
        })
    }
}
