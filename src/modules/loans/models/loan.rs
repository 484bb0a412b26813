use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A stored loan with its derived repayment figures
///
/// `total_amount_payable` and `monthly_emi` are fixed at creation time and
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: String,
    pub customer_id: String,
    pub loan_amount: Decimal,
    pub loan_period_years: i64,
    pub interest_rate_yearly: Decimal,
    pub total_amount_payable: Decimal,
    pub monthly_emi: Decimal,
}

/// Inbound create payload
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error naming it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLoanRequest {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub loan_amount: Option<Decimal>,
    #[serde(default)]
    pub loan_period_years: Option<i64>,
    #[serde(default)]
    pub interest_rate_yearly: Option<Decimal>,
}

/// Loan inputs that passed presence checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanTerms {
    pub customer_id: String,
    pub loan_amount: Decimal,
    pub loan_period_years: i64,
    pub interest_rate_yearly: Decimal,
}

impl CreateLoanRequest {
    pub fn new(
        customer_id: impl Into<String>,
        loan_amount: Decimal,
        loan_period_years: i64,
        interest_rate_yearly: Decimal,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            loan_amount: Some(loan_amount),
            loan_period_years: Some(loan_period_years),
            interest_rate_yearly: Some(interest_rate_yearly),
        }
    }

    /// Check that all four inputs are present; ranges are checked by the calculator
    pub fn into_terms(self) -> Result<LoanTerms> {
        let mut missing = Vec::new();

        let customer_id = self
            .customer_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        if customer_id.is_none() {
            missing.push("customer_id");
        }
        if self.loan_amount.is_none() {
            missing.push("loan_amount");
        }
        if self.loan_period_years.is_none() {
            missing.push("loan_period_years");
        }
        if self.interest_rate_yearly.is_none() {
            missing.push("interest_rate_yearly");
        }

        match (
            customer_id,
            self.loan_amount,
            self.loan_period_years,
            self.interest_rate_yearly,
        ) {
            (Some(customer_id), Some(loan_amount), Some(loan_period_years), Some(interest_rate_yearly)) => {
                Ok(LoanTerms {
                    customer_id,
                    loan_amount,
                    loan_period_years,
                    interest_rate_yearly,
                })
            }
            _ => Err(AppError::validation(format!(
                "Missing loan fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Body returned by a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanCreatedResponse {
    pub loan_id: String,
    pub customer_id: String,
    pub total_amount_payable: Decimal,
    pub monthly_emi: Decimal,
}

impl From<&Loan> for LoanCreatedResponse {
    fn from(loan: &Loan) -> Self {
        Self {
            loan_id: loan.loan_id.clone(),
            customer_id: loan.customer_id.clone(),
            total_amount_payable: loan.total_amount_payable,
            monthly_emi: loan.monthly_emi,
        }
    }
}
