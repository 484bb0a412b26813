pub mod loan;

pub use loan::{CreateLoanRequest, Loan, LoanCreatedResponse, LoanTerms};
