use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use loanbook_core::portfolio::accounts::{balance_sheet, profit_and_loss};

use crate::input;

/// Arguments for balance-sheet aggregation
#[derive(Args)]
pub struct BalanceSheetArgs {
    /// Path to a JSON file with { "assets": {..}, "liabilities": {..} }
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for profit & loss aggregation
#[derive(Args)]
pub struct ProfitLossArgs {
    /// Path to a JSON file with { "income": {..}, "expenses": {..} }
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Deserialize)]
struct BalanceSheetInput {
    #[serde(default)]
    assets: BTreeMap<String, Decimal>,
    #[serde(default)]
    liabilities: BTreeMap<String, Decimal>,
}

#[derive(Deserialize)]
struct ProfitLossInput {
    #[serde(default)]
    income: BTreeMap<String, Decimal>,
    #[serde(default)]
    expenses: BTreeMap<String, Decimal>,
}

pub fn run_balance_sheet(args: BalanceSheetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let buckets: BalanceSheetInput = input::load(&args.input)?;
    let sheet = balance_sheet(&buckets.assets, &buckets.liabilities);
    Ok(serde_json::to_value(sheet)?)
}

pub fn run_profit_loss(args: ProfitLossArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let buckets: ProfitLossInput = input::load(&args.input)?;
    let pnl = profit_and_loss(&buckets.income, &buckets.expenses);
    Ok(serde_json::to_value(pnl)?)
}
