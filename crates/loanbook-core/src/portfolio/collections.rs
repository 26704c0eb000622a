//! Portfolio-wide collection totals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{Loan, Money, Payment, Rate};

/// Disbursement vs collection position across the whole book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionTotals {
    pub total_disbursed: Money,
    pub total_collected: Money,
    /// disbursed - collected
    pub outstanding: Money,
    /// collected / disbursed; 0 when nothing is disbursed.
    pub collection_rate: Rate,
    /// Mean principal, rounded to the whole currency unit; 0 on an empty
    /// book.
    pub average_loan_size: Money,
}

pub fn collection_totals(loans: &[Loan], payments: &[Payment]) -> CollectionTotals {
    let total_disbursed: Money = loans.iter().map(|l| l.amount).sum();
    let total_collected: Money = payments.iter().map(|p| p.amount).sum();

    let collection_rate = if total_disbursed.is_zero() {
        Decimal::ZERO
    } else {
        total_collected / total_disbursed
    };

    let average_loan_size = if loans.is_empty() {
        Decimal::ZERO
    } else {
        (total_disbursed / Decimal::from(loans.len() as u64))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    };

    CollectionTotals {
        total_disbursed,
        total_collected,
        outstanding: total_disbursed - total_collected,
        collection_rate,
        average_loan_size,
    }
}
