pub mod amortization;
pub mod calculator;
pub mod error;
pub mod forms;
pub mod types;

#[cfg(feature = "ledger")]
pub mod ledger;

#[cfg(feature = "portfolio")]
pub mod portfolio;

#[cfg(feature = "reports")]
pub mod reports;

pub use error::LoanBookError;
pub use types::*;

/// Standard result type for all loanbook operations
pub type LoanBookResult<T> = Result<T, LoanBookError>;
