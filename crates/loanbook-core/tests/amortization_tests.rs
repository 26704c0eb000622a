use loanbook_core::amortization;
use loanbook_core::calculator;
use loanbook_core::forms::ParsedNumber;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Amortization math tests (foundation for every ledger figure)
// These cover EMI, simple/compound interest, ROI, and the schedule.
// ===========================================================================

// ---------------------------------------------------------------------------
// EMI tests
// ---------------------------------------------------------------------------

#[test]
fn test_emi_zero_rate_is_pure_division() {
    for (principal, months) in [(dec!(12000), 12u32), (dec!(75000), 10), (dec!(500), 5)] {
        assert_eq!(
            amortization::monthly_installment(principal, Decimal::ZERO, months),
            principal / Decimal::from(months),
        );
    }
}

#[test]
fn test_emi_textbook_case() {
    // 100,000 at 12% p.a. over 12 months => 8,885 rounded
    assert_eq!(amortization::monthly_installment(dec!(100000), dec!(12), 12), dec!(8885));
}

#[test]
fn test_emi_total_payable_never_below_principal() {
    for rate in [dec!(1), dec!(8), dec!(12), dec!(24), dec!(36)] {
        let b = amortization::emi_breakdown(dec!(250000), rate, 24);
        assert!(
            b.total_payable >= dec!(250000),
            "total payable {} fell below principal at rate {}",
            b.total_payable,
            rate
        );
    }
}

#[test]
fn test_emi_idempotent() {
    let first = amortization::monthly_installment(dec!(100000), dec!(12), 12);
    let second = amortization::monthly_installment(dec!(100000), dec!(12), 12);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Interest tests
// ---------------------------------------------------------------------------

#[test]
fn test_simple_interest_textbook_case() {
    assert_eq!(
        amortization::simple_interest(dec!(100000), dec!(10), dec!(2)),
        dec!(20000)
    );
}

#[test]
fn test_compound_interest_annual_single_year() {
    // 100,000 * 1.10 - 100,000 = 10,000
    assert_eq!(
        amortization::compound_interest(dec!(100000), dec!(10), dec!(1), 1),
        dec!(10000)
    );
}

#[test]
fn test_compound_beats_simple_over_multiple_years() {
    let simple = amortization::simple_interest(dec!(100000), dec!(10), dec!(3));
    let compound = amortization::compound_interest(dec!(100000), dec!(10), dec!(3), 1);
    assert!(compound > simple);
}

#[test]
fn test_monthly_compounding_beats_annual() {
    let annual = amortization::compound_interest(dec!(100000), dec!(10), dec!(2), 1);
    let monthly = amortization::compound_interest(dec!(100000), dec!(10), dec!(2), 12);
    assert!(monthly > annual);
}

// ---------------------------------------------------------------------------
// ROI tests
// ---------------------------------------------------------------------------

#[test]
fn test_roi_textbook_case() {
    assert_eq!(amortization::roi_pct(dec!(100000), dec!(125000)), dec!(25));
}

#[test]
fn test_roi_zero_investment_guarded() {
    assert_eq!(amortization::roi_pct(Decimal::ZERO, dec!(125000)), Decimal::ZERO);
}

#[test]
fn test_annualized_roi_requires_period() {
    assert_eq!(
        amortization::annualized_roi_pct(dec!(100000), dec!(125000), dec!(2)),
        Some(dec!(12.5))
    );
    assert_eq!(
        amortization::annualized_roi_pct(dec!(100000), dec!(125000), Decimal::ZERO),
        None
    );
}

// ---------------------------------------------------------------------------
// Form tolerance tests
// ---------------------------------------------------------------------------

#[test]
fn test_blank_form_never_errors() {
    let blank = ParsedNumber::parse("");
    assert_eq!(calculator::compute_emi(blank, blank, blank), Decimal::ZERO);
    assert_eq!(
        calculator::compute_compound_interest(
            ParsedNumber::Missing,
            ParsedNumber::parse("10"),
            ParsedNumber::parse("2"),
            ParsedNumber::parse("1"),
        ),
        Decimal::ZERO
    );
}

#[test]
fn test_form_layer_agrees_with_strict_layer() {
    assert_eq!(
        calculator::compute_emi(
            ParsedNumber::parse("100000"),
            ParsedNumber::parse("12"),
            ParsedNumber::parse("12"),
        ),
        amortization::monthly_installment(dec!(100000), dec!(12), 12)
    );
}

// ---------------------------------------------------------------------------
// Schedule tests
// ---------------------------------------------------------------------------

#[test]
fn test_schedule_row_count_and_retirement() {
    let rows = amortization::schedule(dec!(100000), dec!(12), 12).unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows.last().unwrap().closing_balance, Decimal::ZERO);
}

#[test]
fn test_schedule_principal_components_sum_to_principal() {
    let rows = amortization::schedule(dec!(250000), dec!(18), 36).unwrap();
    let total: Decimal = rows.iter().map(|r| r.principal_component).sum();
    assert_eq!(total, dec!(250000));
}

#[test]
fn test_schedule_payments_match_installment_until_final() {
    let installment = amortization::monthly_installment(dec!(100000), dec!(12), 12);
    let rows = amortization::schedule(dec!(100000), dec!(12), 12).unwrap();
    for row in &rows[..rows.len() - 1] {
        assert_eq!(row.payment, installment);
    }
}

#[test]
fn test_schedule_zero_months_rejected() {
    assert!(amortization::schedule(dec!(100000), dec!(12), 0).is_err());
}
