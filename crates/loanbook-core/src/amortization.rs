use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanBookError;
use crate::types::{Money, Rate};
use crate::LoanBookResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Round to the nearest whole currency unit, half away from zero.
fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly installment for an amortizing loan.
///
/// A zero tenure yields 0 (guarded default, never a division error). A zero
/// rate degenerates to a straight division of principal over the tenure,
/// deliberately unrounded; at a positive rate the standard annuity formula
/// applies, rounded to the whole currency unit.
pub fn monthly_installment(principal: Money, annual_rate_pct: Rate, months: u32) -> Money {
    if months == 0 {
        return Decimal::ZERO;
    }
    let n = Decimal::from(months);
    let monthly_rate = annual_rate_pct / MONTHS_PER_YEAR / PERCENT;
    if monthly_rate.is_zero() {
        return principal / n;
    }
    let growth = (Decimal::ONE + monthly_rate).powd(n);
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    round_unit(principal * monthly_rate * growth / denominator)
}

/// Installment plus the derived totals for an EMI quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub monthly_installment: Money,
    /// monthly_installment * months
    pub total_payable: Money,
    /// total_payable - principal
    pub total_interest: Money,
}

pub fn emi_breakdown(principal: Money, annual_rate_pct: Rate, months: u32) -> EmiBreakdown {
    let installment = monthly_installment(principal, annual_rate_pct, months);
    let total_payable = installment * Decimal::from(months);
    EmiBreakdown {
        monthly_installment: installment,
        total_payable,
        total_interest: total_payable - principal,
    }
}

/// Simple interest: `principal * rate * years / 100`. Unrounded; display
/// rounding belongs to the caller.
pub fn simple_interest(principal: Money, rate_pct: Rate, years: Decimal) -> Money {
    principal * rate_pct * years / PERCENT
}

/// Compound interest earned over `years`, compounded `compounds_per_year`
/// times a year. A zero frequency yields 0. Rounded to the whole currency
/// unit.
pub fn compound_interest(
    principal: Money,
    rate_pct: Rate,
    years: Decimal,
    compounds_per_year: u32,
) -> Money {
    if compounds_per_year == 0 {
        return Decimal::ZERO;
    }
    let frequency = Decimal::from(compounds_per_year);
    let rate = rate_pct / PERCENT;
    let amount = principal * (Decimal::ONE + rate / frequency).powd(frequency * years);
    round_unit(amount - principal)
}

/// Return on investment in percent. A zero initial investment yields 0
/// rather than propagating a division by zero.
pub fn roi_pct(initial_investment: Money, final_value: Money) -> Rate {
    if initial_investment.is_zero() {
        return Decimal::ZERO;
    }
    (final_value - initial_investment) / initial_investment * PERCENT
}

/// ROI spread evenly over `years`. `None` when the period is zero.
pub fn annualized_roi_pct(
    initial_investment: Money,
    final_value: Money,
    years: Decimal,
) -> Option<Rate> {
    if years.is_zero() {
        return None;
    }
    Some(roi_pct(initial_investment, final_value) / years)
}

/// A candidate loan for side-by-side comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: Money,
    pub annual_rate_pct: Rate,
    pub months: u32,
}

/// Side-by-side EMI comparison of two quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteComparison {
    pub first: EmiBreakdown,
    pub second: EmiBreakdown,
    /// first installment minus second
    pub installment_difference: Money,
    /// first total interest minus second
    pub interest_difference: Money,
}

pub fn compare(first: &LoanQuote, second: &LoanQuote) -> QuoteComparison {
    let a = emi_breakdown(first.principal, first.annual_rate_pct, first.months);
    let b = emi_breakdown(second.principal, second.annual_rate_pct, second.months);
    QuoteComparison {
        installment_difference: a.monthly_installment - b.monthly_installment,
        interest_difference: a.total_interest - b.total_interest,
        first: a,
        second: b,
    }
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub opening_balance: Money,
    pub payment: Money,
    pub interest_component: Money,
    pub principal_component: Money,
    pub closing_balance: Money,
}

/// Month-by-month amortization of an EMI loan.
///
/// Every month pays the constant rounded installment; the final payment is
/// adjusted so the closing balance retires to exactly zero.
pub fn schedule(
    principal: Money,
    annual_rate_pct: Rate,
    months: u32,
) -> LoanBookResult<Vec<ScheduleRow>> {
    if months == 0 {
        return Err(LoanBookError::InvalidInput {
            field: "months".into(),
            reason: "Tenure must be at least one month".into(),
        });
    }

    let installment = monthly_installment(principal, annual_rate_pct, months);
    let monthly_rate = annual_rate_pct / MONTHS_PER_YEAR / PERCENT;

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;
    for month in 1..=months {
        let interest = balance * monthly_rate;
        let payment = if month == months {
            balance + interest
        } else {
            installment
        };
        let principal_component = payment - interest;
        let closing = balance - principal_component;
        rows.push(ScheduleRow {
            month,
            opening_balance: balance,
            payment,
            interest_component: interest,
            principal_component,
            closing_balance: closing,
        });
        balance = closing;
    }

    Ok(rows)
}
