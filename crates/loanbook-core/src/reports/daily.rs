//! Same-day activity snapshot.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{Loan, LoanType, Money, Payment, PaymentStatus};

/// Lending and collection activity for a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub loans_issued: u64,
    pub loan_amount: Money,
    /// Mean issued principal, rounded to the whole currency unit.
    pub average_loan: Money,
    pub emi_loans: u64,
    pub normal_loans: u64,
    pub payments_received: u64,
    pub payment_amount: Money,
    /// Mean payment, rounded to the whole currency unit.
    pub average_payment: Money,
    pub received_amount: Money,
    pub pending_amount: Money,
}

/// Snapshot the book's activity on `date`: loans started and payments
/// dated that day.
pub fn daily_snapshot(loans: &[Loan], payments: &[Payment], date: NaiveDate) -> DailySnapshot {
    let todays_loans: Vec<&Loan> = loans.iter().filter(|l| l.start_date == date).collect();
    let todays_payments: Vec<&Payment> =
        payments.iter().filter(|p| p.payment_date == date).collect();

    let loan_amount: Money = todays_loans.iter().map(|l| l.amount).sum();
    let payment_amount: Money = todays_payments.iter().map(|p| p.amount).sum();

    DailySnapshot {
        date,
        loans_issued: todays_loans.len() as u64,
        loan_amount,
        average_loan: average(loan_amount, todays_loans.len()),
        emi_loans: todays_loans
            .iter()
            .filter(|l| l.loan_type == LoanType::Emi)
            .count() as u64,
        normal_loans: todays_loans
            .iter()
            .filter(|l| l.loan_type == LoanType::Normal)
            .count() as u64,
        payments_received: todays_payments.len() as u64,
        payment_amount,
        average_payment: average(payment_amount, todays_payments.len()),
        received_amount: status_total(&todays_payments, PaymentStatus::Received),
        pending_amount: status_total(&todays_payments, PaymentStatus::Pending),
    }
}

fn average(total: Money, count: usize) -> Money {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count as u64))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn status_total(payments: &[&Payment], status: PaymentStatus) -> Money {
    payments
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loan(id: &str, amount: Decimal, loan_type: LoanType, start: NaiveDate) -> Loan {
        Loan {
            id: id.into(),
            loan_number: format!("LN-{}", id),
            customer_id: "C001".into(),
            customer_name: String::new(),
            amount,
            loan_type,
            interest_rate: dec!(12),
            tenure: 12,
            start_date: start,
            status: "active".into(),
        }
    }

    fn payment(id: &str, amount: Decimal, on: NaiveDate, status: PaymentStatus) -> Payment {
        Payment {
            id: id.into(),
            loan_id: "L001".into(),
            amount,
            payment_date: on,
            status,
            method: "cash".into(),
        }
    }

    #[test]
    fn test_filters_by_date() {
        let today = date(2024, 3, 15);
        let loans = vec![
            loan("L001", dec!(75000), LoanType::Emi, today),
            loan("L002", dec!(25000), LoanType::Normal, today),
            loan("L003", dec!(99000), LoanType::Emi, date(2024, 3, 14)),
        ];
        let payments = vec![
            payment("P1", dec!(6800), today, PaymentStatus::Received),
            payment("P2", dec!(3200), today, PaymentStatus::Pending),
            payment("P3", dec!(5000), date(2024, 3, 14), PaymentStatus::Received),
        ];
        let snapshot = daily_snapshot(&loans, &payments, today);
        assert_eq!(snapshot.loans_issued, 2);
        assert_eq!(snapshot.loan_amount, dec!(100000));
        assert_eq!(snapshot.average_loan, dec!(50000));
        assert_eq!(snapshot.emi_loans, 1);
        assert_eq!(snapshot.normal_loans, 1);
        assert_eq!(snapshot.payments_received, 2);
        assert_eq!(snapshot.payment_amount, dec!(10000));
        assert_eq!(snapshot.average_payment, dec!(5000));
        assert_eq!(snapshot.received_amount, dec!(6800));
        assert_eq!(snapshot.pending_amount, dec!(3200));
    }

    #[test]
    fn test_quiet_day_is_zeroed() {
        let loans = vec![loan("L001", dec!(75000), LoanType::Emi, date(2024, 3, 1))];
        let snapshot = daily_snapshot(&loans, &[], date(2024, 7, 1));
        assert_eq!(snapshot.loans_issued, 0);
        assert_eq!(snapshot.loan_amount, Decimal::ZERO);
        assert_eq!(snapshot.average_loan, Decimal::ZERO);
        assert_eq!(snapshot.payments_received, 0);
        assert_eq!(snapshot.average_payment, Decimal::ZERO);
    }
}
