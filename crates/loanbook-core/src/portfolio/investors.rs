//! Investor return projection and capital distribution.
//!
//! Tenure uses a fixed 30-day month: `floor((as_of - investment_date) /
//! 30 days)`. The approximation is not calendar-accurate and is preserved
//! as-is from the books this engine reproduces.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Investor, Money, Rate};

const DAYS_PER_MONTH: Decimal = dec!(30);

/// Derived return position of one investor as of a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorProjection {
    pub investor_id: String,
    pub name: String,
    pub amount: Money,
    pub return_rate: Rate,
    /// Whole 30-day months elapsed since the investment date; negative when
    /// the investment date lies after `as_of`.
    pub months_invested: i64,
    /// amount * rate / 100 / 12
    pub monthly_return: Money,
    pub total_returns: Money,
    /// amount + total_returns
    pub current_value: Money,
}

/// Project one investor's accrued position. Derived fields are computed,
/// never stored.
pub fn project_investor(investor: &Investor, as_of: NaiveDate) -> InvestorProjection {
    let days = (as_of - investor.investment_date).num_days();
    let months = (Decimal::from(days) / DAYS_PER_MONTH).floor();
    let monthly_return = investor.amount * investor.return_rate / dec!(100) / dec!(12);
    let total_returns = monthly_return * months;
    InvestorProjection {
        investor_id: investor.id.clone(),
        name: investor.name.clone(),
        amount: investor.amount,
        return_rate: investor.return_rate,
        months_invested: months.to_i64().unwrap_or(0),
        monthly_return,
        total_returns,
        current_value: investor.amount + total_returns,
    }
}

/// One investor's share of total invested capital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub amount: Money,
    /// Percent of total investment.
    pub pct: Rate,
}

/// Capital distribution across investors. Shares sum to ~100 percent; an
/// empty or zero-capital book yields no slices.
pub fn distribution(investors: &[Investor]) -> Vec<DistributionSlice> {
    let total: Money = investors.iter().map(|i| i.amount).sum();
    if total.is_zero() {
        return Vec::new();
    }
    investors
        .iter()
        .map(|i| DistributionSlice {
            name: i.name.clone(),
            amount: i.amount,
            pct: i.amount / total * dec!(100),
        })
        .collect()
}

/// Book-level investor rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorBookSummary {
    pub total_investment: Money,
    pub total_returns: Money,
    /// Mean of the stored return rates; 0 on an empty book.
    pub average_return_rate: Rate,
    /// Sum of monthly payouts across the book.
    pub monthly_payout: Money,
    /// total_investment + total_returns
    pub projected_value: Money,
    /// total_returns / total_investment, in percent; 0 on an empty book.
    pub overall_return_pct: Rate,
    pub distribution: Vec<DistributionSlice>,
}

pub fn summarize_investors(investors: &[Investor], as_of: NaiveDate) -> InvestorBookSummary {
    let projections: Vec<InvestorProjection> =
        investors.iter().map(|i| project_investor(i, as_of)).collect();

    let total_investment: Money = investors.iter().map(|i| i.amount).sum();
    let total_returns: Money = projections.iter().map(|p| p.total_returns).sum();

    let average_return_rate = if investors.is_empty() {
        Decimal::ZERO
    } else {
        investors.iter().map(|i| i.return_rate).sum::<Decimal>()
            / Decimal::from(investors.len() as u64)
    };

    let overall_return_pct = if total_investment.is_zero() {
        Decimal::ZERO
    } else {
        total_returns / total_investment * dec!(100)
    };

    InvestorBookSummary {
        total_investment,
        total_returns,
        average_return_rate,
        monthly_payout: projections.iter().map(|p| p.monthly_return).sum(),
        projected_value: total_investment + total_returns,
        overall_return_pct,
        distribution: distribution(investors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn investor(id: &str, name: &str, amount: Decimal, rate: Decimal, since: NaiveDate) -> Investor {
        Investor {
            id: id.into(),
            name: name.into(),
            amount,
            return_rate: rate,
            investment_date: since,
            status: "active".into(),
        }
    }

    #[test]
    fn test_months_invested_floors_30_day_months() {
        let inv = investor("I1", "Anand", dec!(120000), dec!(12), date(2024, 1, 1));
        // 60 days elapsed => exactly 2 months
        let p = project_investor(&inv, date(2024, 3, 1));
        assert_eq!(p.months_invested, 2);
        // 59 days elapsed => still 1 month
        let p = project_investor(&inv, date(2024, 2, 29));
        assert_eq!(p.months_invested, 1);
    }

    #[test]
    fn test_same_day_is_zero_months() {
        let inv = investor("I1", "Anand", dec!(120000), dec!(12), date(2024, 1, 1));
        let p = project_investor(&inv, date(2024, 1, 1));
        assert_eq!(p.months_invested, 0);
        assert_eq!(p.total_returns, Decimal::ZERO);
        assert_eq!(p.current_value, dec!(120000));
    }

    #[test]
    fn test_accrued_returns() {
        // 120,000 at 12% => 1,200/month
        let inv = investor("I1", "Anand", dec!(120000), dec!(12), date(2024, 1, 1));
        let p = project_investor(&inv, date(2024, 3, 1));
        assert_eq!(p.monthly_return, dec!(1200));
        assert_eq!(p.total_returns, dec!(2400));
        assert_eq!(p.current_value, dec!(122400));
    }

    #[test]
    fn test_future_investment_date_goes_negative() {
        let inv = investor("I1", "Anand", dec!(120000), dec!(12), date(2024, 6, 1));
        let p = project_investor(&inv, date(2024, 5, 1));
        assert!(p.months_invested < 0);
    }

    #[test]
    fn test_distribution_shares() {
        let investors = vec![
            investor("I1", "Anand", dec!(50000), dec!(12), date(2024, 1, 1)),
            investor("I2", "Bela", dec!(30000), dec!(10), date(2024, 1, 1)),
            investor("I3", "Chitra", dec!(20000), dec!(15), date(2024, 1, 1)),
        ];
        let slices = distribution(&investors);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].pct, dec!(50));
        assert_eq!(slices[1].pct, dec!(30));
        assert_eq!(slices[2].pct, dec!(20));
    }

    #[test]
    fn test_distribution_sums_to_100() {
        let investors = vec![
            investor("I1", "Anand", dec!(10000), dec!(12), date(2024, 1, 1)),
            investor("I2", "Bela", dec!(10000), dec!(10), date(2024, 1, 1)),
            investor("I3", "Chitra", dec!(10000), dec!(15), date(2024, 1, 1)),
        ];
        let total: Decimal = distribution(&investors).iter().map(|s| s.pct).sum();
        assert!((total - dec!(100)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_distribution_empty_book() {
        assert!(distribution(&[]).is_empty());
    }

    #[test]
    fn test_summary() {
        let investors = vec![
            investor("I1", "Anand", dec!(120000), dec!(12), date(2024, 1, 1)),
            investor("I2", "Bela", dec!(60000), dec!(10), date(2024, 1, 1)),
        ];
        let summary = summarize_investors(&investors, date(2024, 3, 1));
        assert_eq!(summary.total_investment, dec!(180000));
        // 1,200/month + 500/month over 2 months
        assert_eq!(summary.monthly_payout, dec!(1700));
        assert_eq!(summary.total_returns, dec!(3400));
        assert_eq!(summary.average_return_rate, dec!(11));
        assert_eq!(summary.projected_value, dec!(183400));
        assert_eq!(summary.distribution.len(), 2);
    }

    #[test]
    fn test_summary_empty_book_guarded() {
        let summary = summarize_investors(&[], date(2024, 3, 1));
        assert_eq!(summary.total_investment, Decimal::ZERO);
        assert_eq!(summary.average_return_rate, Decimal::ZERO);
        assert_eq!(summary.overall_return_pct, Decimal::ZERO);
        assert!(summary.distribution.is_empty());
    }
}
