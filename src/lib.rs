//! Loan Ledger Library
//!
//! Simple-interest loan records: pricing, SQLite persistence and the HTTP
//! routes that expose them.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::loans;
