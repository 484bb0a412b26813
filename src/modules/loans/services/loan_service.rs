use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::{AppError, IdGenerator, Repository, Result};
use crate::modules::loans::models::{CreateLoanRequest, Loan};
use crate::modules::loans::services::LoanCalculator;

pub const LOAN_NOT_FOUND: &str = "Loan not found";

/// Loan lifecycle: create, read and delete over a repository
///
/// Validation always runs before the repository is touched, so a rejected
/// request never leaves a partial row behind.
pub struct LoanService {
    repository: Arc<dyn Repository<Loan, str>>,
    ids: Arc<dyn IdGenerator>,
    calculator: LoanCalculator,
}

impl LoanService {
    pub fn new(repository: Arc<dyn Repository<Loan, str>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            repository,
            ids,
            calculator: LoanCalculator::new(),
        }
    }

    /// Validate, price and persist a new loan
    pub async fn create_loan(&self, request: CreateLoanRequest) -> Result<Loan> {
        let terms = request.into_terms()?;
        let quote = self.calculator.calculate(
            terms.loan_amount,
            terms.loan_period_years,
            terms.interest_rate_yearly,
        )?;

        let loan = Loan {
            loan_id: self.ids.generate(),
            customer_id: terms.customer_id,
            loan_amount: terms.loan_amount,
            loan_period_years: terms.loan_period_years,
            interest_rate_yearly: terms.interest_rate_yearly,
            total_amount_payable: quote.total_amount_payable,
            monthly_emi: quote.monthly_emi,
        };

        self.repository.create(&loan).await?;

        info!(
            loan_id = %loan.loan_id,
            customer_id = %loan.customer_id,
            total_amount_payable = %loan.total_amount_payable,
            monthly_emi = %loan.monthly_emi,
            "Loan created"
        );

        Ok(loan)
    }

    pub async fn list_loans(&self) -> Result<Vec<Loan>> {
        let loans = self.repository.list().await?;
        debug!(count = loans.len(), "Listed loans");
        Ok(loans)
    }

    pub async fn get_loan(&self, loan_id: &str) -> Result<Loan> {
        self.repository
            .find_by_id(loan_id)
            .await?
            .ok_or_else(|| AppError::not_found(LOAN_NOT_FOUND))
    }

    /// Remove a loan; a second delete of the same id is NotFound
    pub async fn delete_loan(&self, loan_id: &str) -> Result<()> {
        if !self.repository.delete(loan_id).await? {
            warn!(loan_id = %loan_id, "Delete requested for absent loan");
            return Err(AppError::not_found(LOAN_NOT_FOUND));
        }

        info!(loan_id = %loan_id, "Loan deleted");
        Ok(())
    }
}
