//! Tolerant calculators over raw form input.
//!
//! These carry the behavior a partially-filled calculator form requires: a
//! missing or malformed field yields 0, never an error. The strict
//! Decimal-typed layer lives in [`crate::amortization`]; the ledger and
//! aggregation modules call that layer directly and never round-trip
//! through strings.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::amortization;
use crate::forms::ParsedNumber;
use crate::types::{Money, Rate};

/// Monthly installment from form input. Any missing or invalid field
/// yields 0. Fractional tenures are truncated to whole months.
pub fn compute_emi(
    principal: ParsedNumber,
    annual_rate_pct: ParsedNumber,
    tenure_months: ParsedNumber,
) -> Money {
    let (Some(principal), Some(rate), Some(tenure)) =
        (principal.valid(), annual_rate_pct.valid(), tenure_months.valid())
    else {
        return Decimal::ZERO;
    };
    let months = tenure.trunc().to_u32().unwrap_or(0);
    amortization::monthly_installment(principal, rate, months)
}

/// Simple interest from form input. Any missing or invalid field yields 0.
pub fn compute_simple_interest(
    principal: ParsedNumber,
    rate_pct: ParsedNumber,
    years: ParsedNumber,
) -> Money {
    let (Some(principal), Some(rate), Some(years)) =
        (principal.valid(), rate_pct.valid(), years.valid())
    else {
        return Decimal::ZERO;
    };
    amortization::simple_interest(principal, rate, years)
}

/// Compound interest from form input. Principal, rate, or years missing or
/// invalid yields 0. A missing frequency defaults to annual compounding;
/// a non-positive or malformed frequency yields 0.
pub fn compute_compound_interest(
    principal: ParsedNumber,
    rate_pct: ParsedNumber,
    years: ParsedNumber,
    compounds_per_year: ParsedNumber,
) -> Money {
    let (Some(principal), Some(rate), Some(years)) =
        (principal.valid(), rate_pct.valid(), years.valid())
    else {
        return Decimal::ZERO;
    };
    let frequency = match compounds_per_year {
        ParsedNumber::Missing => Decimal::ONE,
        ParsedNumber::Valid(value) => value,
        ParsedNumber::Invalid => return Decimal::ZERO,
    };
    let frequency = frequency.trunc().to_u32().unwrap_or(0);
    amortization::compound_interest(principal, rate, years, frequency)
}

/// Return on investment from form input. Missing or invalid fields yield 0.
pub fn compute_roi(investment: ParsedNumber, final_value: ParsedNumber) -> Rate {
    let (Some(investment), Some(final_value)) = (investment.valid(), final_value.valid()) else {
        return Decimal::ZERO;
    };
    amortization::roi_pct(investment, final_value)
}

/// Annualized ROI from form input. `None` when the period field is absent,
/// malformed, or zero.
pub fn compute_annualized_roi(
    investment: ParsedNumber,
    final_value: ParsedNumber,
    years: ParsedNumber,
) -> Option<Rate> {
    let (Some(investment), Some(final_value), Some(years)) =
        (investment.valid(), final_value.valid(), years.valid())
    else {
        return None;
    };
    amortization::annualized_roi_pct(investment, final_value, years)
}
