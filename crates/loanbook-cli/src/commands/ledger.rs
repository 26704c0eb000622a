use clap::Args;
use serde::Deserialize;
use serde_json::{json, Value};

use loanbook_core::ledger::{project_book, project_loan, summarize_book, LoanProjection, ProjectionConfig};
use loanbook_core::{Loan, LoanType, Payment};

use crate::input;

/// A one-loan snapshot: the loan plus its payment history.
#[derive(Deserialize)]
struct ProjectLoanInput {
    loan: Loan,
    #[serde(default)]
    payments: Vec<Payment>,
}

/// A loans + payments book snapshot.
#[derive(Deserialize)]
pub struct BookSnapshot {
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Arguments for projecting one loan
#[derive(Args)]
pub struct ProjectLoanArgs {
    /// Path to a JSON file with { "loan": {...}, "payments": [...] }
    #[arg(long)]
    pub input: Option<String>,

    /// Count only received payments toward the paid total
    #[arg(long)]
    pub only_received: bool,
}

/// Arguments for summarizing a book slice
#[derive(Args)]
pub struct BookSummaryArgs {
    /// Path to a JSON file with { "loans": [...], "payments": [...] }
    #[arg(long)]
    pub input: Option<String>,

    /// Restrict to one loan type: EMI or Normal
    #[arg(long)]
    pub loan_type: Option<String>,

    /// Count only received payments toward paid totals
    #[arg(long)]
    pub only_received: bool,
}

pub fn run_project_loan(args: ProjectLoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshot: ProjectLoanInput = input::load(&args.input)?;
    let config = ProjectionConfig {
        count_only_received: args.only_received,
    };
    let projection = project_loan(&snapshot.loan, &snapshot.payments, &config);
    projection_value(&projection)
}

pub fn run_book_summary(args: BookSummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshot: BookSnapshot = input::load(&args.input)?;
    let loans: Vec<Loan> = match &args.loan_type {
        Some(raw) => {
            let wanted = parse_loan_type(raw)?;
            snapshot
                .loans
                .into_iter()
                .filter(|l| l.loan_type == wanted)
                .collect()
        }
        None => snapshot.loans,
    };

    let config = ProjectionConfig {
        count_only_received: args.only_received,
    };
    let summary = summarize_book(&loans, &snapshot.payments, &config);
    let rows: Vec<Value> = project_book(&loans, &snapshot.payments, &config)
        .iter()
        .map(projection_value)
        .collect::<Result<_, _>>()?;

    Ok(json!({ "summary": summary, "loans": rows }))
}

/// Serialize a projection, adding the display installment column
/// ("Interest Only" for loans without one).
fn projection_value(projection: &LoanProjection) -> Result<Value, Box<dyn std::error::Error>> {
    let mut value = serde_json::to_value(projection)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "installment".to_string(),
            Value::String(projection.installment_label()),
        );
    }
    Ok(value)
}

fn parse_loan_type(raw: &str) -> Result<LoanType, Box<dyn std::error::Error>> {
    match raw.to_lowercase().as_str() {
        "emi" => Ok(LoanType::Emi),
        "normal" => Ok(LoanType::Normal),
        _ => Err(format!("Unknown loan type '{}'. Use: EMI, Normal", raw).into()),
    }
}
