pub mod loan_calculator;
pub mod loan_service;

pub use loan_calculator::{LoanCalculator, LoanQuote};
pub use loan_service::{LoanService, LOAN_NOT_FOUND};
