use rust_decimal::Decimal;

use crate::core::money::{round_money, MONEY_SCALE};
use crate::core::{AppError, Result};

const MONTHS_PER_YEAR: i64 = 12;

/// Derived repayment figures for one loan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanQuote {
    pub total_amount_payable: Decimal,
    pub monthly_emi: Decimal,
}

/// Simple (non-compounding) interest over the whole term
///
/// ```text
/// total = amount * (1 + rate * years / 100)
/// emi   = total / (years * 12)
/// ```
///
/// `total` is rounded to cents first and `emi` is derived from the rounded
/// total, both half away from zero. Principals are whole cents and the
/// installment must come out to at least one cent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoanCalculator;

impl LoanCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, amount: Decimal, years: i64, rate: Decimal) -> Result<LoanQuote> {
        self.validate(amount, years, rate)?;

        let too_large = || AppError::validation("Loan amount too large");
        let years = Decimal::from(years);

        let interest = amount
            .checked_mul(rate)
            .and_then(|v| v.checked_mul(years))
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(too_large)?;
        let total = round_money(amount.checked_add(interest).ok_or_else(too_large)?);

        let months = years
            .checked_mul(Decimal::from(MONTHS_PER_YEAR))
            .ok_or_else(too_large)?;
        let emi = round_money(total.checked_div(months).ok_or_else(too_large)?);
        if emi <= Decimal::ZERO {
            return Err(AppError::validation(
                "Loan amount too small for the period: monthly installment rounds to 0",
            ));
        }

        Ok(LoanQuote {
            total_amount_payable: total,
            monthly_emi: emi,
        })
    }

    /// Reject inputs that would make the formulas meaningless
    pub fn validate(&self, amount: Decimal, years: i64, rate: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(AppError::validation("Loan amount must be greater than 0"));
        }

        if amount.normalize().scale() > MONEY_SCALE {
            return Err(AppError::validation(format!(
                "Loan amount cannot have more than {} decimal places",
                MONEY_SCALE
            )));
        }

        if years <= 0 {
            return Err(AppError::validation(
                "Loan period must be at least 1 year",
            ));
        }

        if rate < Decimal::ZERO {
            return Err(AppError::validation("Interest rate cannot be negative"));
        }

        Ok(())
    }
}
