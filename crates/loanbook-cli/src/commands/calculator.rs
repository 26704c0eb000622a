use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use loanbook_core::amortization::{self, LoanQuote};

/// Arguments for the EMI calculator
#[derive(Args)]
pub struct EmiArgs {
    /// Principal amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate in percent (e.g. 12 for 12%)
    #[arg(long)]
    pub rate: Decimal,

    /// Tenure in months
    #[arg(long)]
    pub tenure: u32,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Principal amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Tenure in months
    #[arg(long)]
    pub tenure: u32,
}

/// Arguments for the simple interest calculator
#[derive(Args)]
pub struct SimpleInterestArgs {
    /// Principal amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Period in years (fractions allowed)
    #[arg(long)]
    pub years: Decimal,
}

/// Arguments for the compound interest calculator
#[derive(Args)]
pub struct CompoundInterestArgs {
    /// Principal amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Period in years (fractions allowed)
    #[arg(long)]
    pub years: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for the ROI calculator
#[derive(Args)]
pub struct RoiArgs {
    /// Initial investment
    #[arg(long)]
    pub investment: Decimal,

    /// Final value of the investment
    #[arg(long)]
    pub final_value: Decimal,

    /// Holding period in years, for the annualized figure
    #[arg(long)]
    pub years: Option<Decimal>,
}

/// Arguments for the loan comparison calculator
#[derive(Args)]
pub struct CompareLoansArgs {
    /// First quote as principal,rate,months (e.g. "100000,12,12")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub first: Vec<Decimal>,

    /// Second quote as principal,rate,months
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub second: Vec<Decimal>,
}

#[derive(Debug, Serialize)]
struct SimpleInterestOutput {
    principal: Decimal,
    rate_pct: Decimal,
    years: Decimal,
    interest: Decimal,
    total_amount: Decimal,
}

#[derive(Debug, Serialize)]
struct CompoundInterestOutput {
    principal: Decimal,
    rate_pct: Decimal,
    years: Decimal,
    frequency: u32,
    interest: Decimal,
    total_amount: Decimal,
}

#[derive(Debug, Serialize)]
struct RoiOutput {
    investment: Decimal,
    final_value: Decimal,
    gain: Decimal,
    roi_pct: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    annualized_roi_pct: Option<Decimal>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let breakdown = amortization::emi_breakdown(args.principal, args.rate, args.tenure);
    Ok(serde_json::to_value(breakdown)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows = amortization::schedule(args.principal, args.rate, args.tenure)?;
    Ok(serde_json::to_value(rows)?)
}

pub fn run_simple_interest(args: SimpleInterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let interest = amortization::simple_interest(args.principal, args.rate, args.years);
    let output = SimpleInterestOutput {
        principal: args.principal,
        rate_pct: args.rate,
        years: args.years,
        interest,
        total_amount: args.principal + interest,
    };
    Ok(serde_json::to_value(output)?)
}

pub fn run_compound_interest(
    args: CompoundInterestArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let interest =
        amortization::compound_interest(args.principal, args.rate, args.years, args.frequency);
    let output = CompoundInterestOutput {
        principal: args.principal,
        rate_pct: args.rate,
        years: args.years,
        frequency: args.frequency,
        interest,
        total_amount: args.principal + interest,
    };
    Ok(serde_json::to_value(output)?)
}

pub fn run_roi(args: RoiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roi_pct = amortization::roi_pct(args.investment, args.final_value);
    let annualized_roi_pct = args
        .years
        .and_then(|years| amortization::annualized_roi_pct(args.investment, args.final_value, years));
    let output = RoiOutput {
        investment: args.investment,
        final_value: args.final_value,
        gain: args.final_value - args.investment,
        roi_pct,
        annualized_roi_pct,
    };
    Ok(serde_json::to_value(output)?)
}

pub fn run_compare_loans(args: CompareLoansArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let first = quote_from("first", &args.first)?;
    let second = quote_from("second", &args.second)?;
    let comparison = amortization::compare(&first, &second);
    Ok(serde_json::to_value(comparison)?)
}

fn quote_from(name: &str, triple: &[Decimal]) -> Result<LoanQuote, Box<dyn std::error::Error>> {
    if triple.len() != 3 {
        return Err(format!("--{} expects principal,rate,months", name).into());
    }
    let months = triple[2]
        .trunc()
        .to_u32()
        .ok_or_else(|| format!("--{}: months must be a non-negative whole number", name))?;
    Ok(LoanQuote {
        principal: triple[0],
        annual_rate_pct: triple[1],
        months,
    })
}
