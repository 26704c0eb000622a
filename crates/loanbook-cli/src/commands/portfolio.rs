use chrono::NaiveDate;
use clap::Args;
use serde::Deserialize;
use serde_json::{json, Value};

use loanbook_core::portfolio::collections::collection_totals;
use loanbook_core::portfolio::investors::{project_investor, summarize_investors};
use loanbook_core::Investor;

use crate::commands::ledger::BookSnapshot;
use crate::input;

/// Arguments for portfolio collection totals
#[derive(Args)]
pub struct CollectionsArgs {
    /// Path to a JSON file with { "loans": [...], "payments": [...] }
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for investor projections
#[derive(Args)]
pub struct InvestorsArgs {
    /// Path to a JSON file with an investor array or { "investors": [...] }
    #[arg(long)]
    pub input: Option<String>,

    /// Valuation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct InvestorsEnvelope {
    #[serde(default)]
    investors: Vec<Investor>,
}

pub fn run_collections(args: CollectionsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshot: BookSnapshot = input::load(&args.input)?;
    let totals = collection_totals(&snapshot.loans, &snapshot.payments);
    Ok(serde_json::to_value(totals)?)
}

pub fn run_investors(args: InvestorsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let investors = investors_from(input::load_value(&args.input)?)?;
    let as_of = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let projections: Vec<_> = investors.iter().map(|i| project_investor(i, as_of)).collect();
    let summary = summarize_investors(&investors, as_of);

    Ok(json!({
        "as_of": as_of,
        "investors": projections,
        "summary": summary,
    }))
}

/// Accept either a bare investor array or an { "investors": [...] }
/// envelope.
fn investors_from(value: Value) -> Result<Vec<Investor>, Box<dyn std::error::Error>> {
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        let envelope: InvestorsEnvelope = serde_json::from_value(value)?;
        Ok(envelope.investors)
    }
}
