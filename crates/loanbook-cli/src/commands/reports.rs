use chrono::NaiveDate;
use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use loanbook_core::reports::daily::daily_snapshot;
use loanbook_core::reports::staffing::staff_summary;
use loanbook_core::Staff;

use crate::commands::ledger::BookSnapshot;
use crate::input;

/// Arguments for the staff cost summary
#[derive(Args)]
pub struct StaffCostsArgs {
    /// Path to a JSON file with a staff array or { "staff": [...] }
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the daily activity report
#[derive(Args)]
pub struct DailyReportArgs {
    /// Path to a JSON file with { "loans": [...], "payments": [...] }
    #[arg(long)]
    pub input: Option<String>,

    /// Report date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct StaffEnvelope {
    #[serde(default)]
    staff: Vec<Staff>,
}

pub fn run_staff_costs(args: StaffCostsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let staff = staff_from(input::load_value(&args.input)?)?;
    let summary = staff_summary(&staff);
    Ok(serde_json::to_value(summary)?)
}

pub fn run_daily_report(args: DailyReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshot: BookSnapshot = input::load(&args.input)?;
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let report = daily_snapshot(&snapshot.loans, &snapshot.payments, date);
    Ok(serde_json::to_value(report)?)
}

/// Accept either a bare staff array or a { "staff": [...] } envelope.
fn staff_from(value: Value) -> Result<Vec<Staff>, Box<dyn std::error::Error>> {
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        let envelope: StaffEnvelope = serde_json::from_value(value)?;
        Ok(envelope.staff)
    }
}
