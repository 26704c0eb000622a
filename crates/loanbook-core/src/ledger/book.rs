//! Book-level rollup of loan projections.
//!
//! The caller chooses the slice: one customer's loans, the EMI book, or the
//! whole portfolio. The rollup itself is the same reduction in every case.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::projection::{project_loan, LoanProjection, ProjectionConfig};
use crate::types::{Loan, Money, Payment};

/// Aggregated repayment position across a set of loans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub total_loans: u64,
    pub total_disbursed: Money,
    pub total_paid: Money,
    pub total_outstanding: Money,
    /// Loans with a positive remaining balance.
    pub active_loans: u64,
    /// Loans whose remaining balance is at or below zero.
    pub completed_loans: u64,
}

/// Project every loan in the slice against the payment snapshot.
pub fn project_book(
    loans: &[Loan],
    payments: &[Payment],
    config: &ProjectionConfig,
) -> Vec<LoanProjection> {
    loans.iter().map(|l| project_loan(l, payments, config)).collect()
}

/// Summarize a loan slice. An empty slice yields an all-zero summary.
pub fn summarize_book(loans: &[Loan], payments: &[Payment], config: &ProjectionConfig) -> BookSummary {
    let projections = project_book(loans, payments, config);

    BookSummary {
        total_loans: loans.len() as u64,
        total_disbursed: loans.iter().map(|l| l.amount).sum(),
        total_paid: projections.iter().map(|p| p.total_paid).sum(),
        total_outstanding: projections.iter().map(|p| p.remaining_amount).sum(),
        active_loans: projections
            .iter()
            .filter(|p| p.remaining_amount > Decimal::ZERO)
            .count() as u64,
        completed_loans: projections
            .iter()
            .filter(|p| p.remaining_amount <= Decimal::ZERO)
            .count() as u64,
    }
}
