//! Per-loan ledger projection.
//!
//! Derives the repayment position of one loan from a read-only payment
//! snapshot:
//! 1. **Paid to date** -- every payment status counts by default;
//!    received-only behind a config flag.
//! 2. **Outstanding balance** -- unclamped; overpayment surfaces as a
//!    negative remainder.
//! 3. **Derived status** -- `Completed` / `Active` / stored-status
//!    passthrough.
//! 4. **Installment** -- the original-schedule EMI, never recast from the
//!    outstanding balance.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization;
use crate::types::{Loan, LoanType, Money, Payment, PaymentStatus, Rate};

/// Which payments count toward the paid totals.
///
/// The stored books sum every payment regardless of status, conflating
/// committed and pending cash; `count_only_received` corrects that without
/// changing the default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub count_only_received: bool,
}

/// Repayment position of one loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanProjection {
    pub loan_id: String,
    pub loan_number: String,
    pub total_paid: Money,
    /// `loan.amount - total_paid`; negative when overpaid.
    pub remaining_amount: Money,
    pub payment_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<NaiveDate>,
    /// `Completed`, `Active`, or the stored status passed through.
    pub derived_status: String,
    /// Original-schedule EMI for `EMI` loans; `None` for interest-only
    /// loans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_installment: Option<Money>,
    /// Share of the principal collected so far, in percent.
    pub collection_rate_pct: Rate,
}

impl LoanProjection {
    /// Display figure for an installment column. Interest-only loans have
    /// no installment.
    pub fn installment_label(&self) -> String {
        match self.monthly_installment {
            Some(installment) => installment.to_string(),
            None => "Interest Only".to_string(),
        }
    }
}

/// Project one loan against a payment snapshot.
///
/// `payments` may be the whole book; only rows referencing the loan are
/// considered, ordered by payment date ascending (stable on ties).
pub fn project_loan(loan: &Loan, payments: &[Payment], config: &ProjectionConfig) -> LoanProjection {
    let mut own: Vec<&Payment> = payments.iter().filter(|p| p.loan_id == loan.id).collect();
    own.sort_by_key(|p| p.payment_date);

    let counted: Vec<&Payment> = own
        .into_iter()
        .filter(|p| !config.count_only_received || p.status == PaymentStatus::Received)
        .collect();

    let total_paid: Money = counted.iter().map(|p| p.amount).sum();
    let remaining_amount = loan.amount - total_paid;

    let derived_status = if remaining_amount <= Decimal::ZERO {
        "Completed".to_string()
    } else if loan.status == "active" {
        "Active".to_string()
    } else {
        loan.status.clone()
    };

    let monthly_installment = match loan.loan_type {
        LoanType::Emi => Some(amortization::monthly_installment(
            loan.amount,
            loan.interest_rate,
            loan.tenure,
        )),
        LoanType::Normal => None,
    };

    let collection_rate_pct = if loan.amount.is_zero() {
        Decimal::ZERO
    } else {
        total_paid / loan.amount * dec!(100)
    };

    LoanProjection {
        loan_id: loan.id.clone(),
        loan_number: loan.loan_number.clone(),
        total_paid,
        remaining_amount,
        payment_count: counted.len() as u64,
        last_payment_date: counted.last().map(|p| p.payment_date),
        derived_status,
        monthly_installment,
        collection_rate_pct,
    }
}
