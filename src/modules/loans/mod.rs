pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{CreateLoanRequest, Loan, LoanCreatedResponse};
pub use repositories::LoanRepository;
pub use services::{LoanCalculator, LoanQuote, LoanService};
