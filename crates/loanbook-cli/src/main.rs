mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::accounts::{BalanceSheetArgs, ProfitLossArgs};
use commands::calculator::{
    CompareLoansArgs, CompoundInterestArgs, EmiArgs, RoiArgs, ScheduleArgs, SimpleInterestArgs,
};
use commands::ledger::{BookSummaryArgs, ProjectLoanArgs};
use commands::portfolio::{CollectionsArgs, InvestorsArgs};
use commands::reports::{DailyReportArgs, StaffCostsArgs};

/// Loan-book calculations over record snapshots
#[derive(Parser)]
#[command(
    name = "lbk",
    version,
    about = "Loan-portfolio amortization and aggregation calculations",
    long_about = "A CLI for loan-book calculations with decimal precision. \
                  Supports EMI and interest calculators, per-loan ledger \
                  projection, book summaries, collection totals, investor \
                  returns, and balance-sheet/P&L aggregation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly installment and totals for an EMI quote
    Emi(EmiArgs),
    /// Month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Simple interest on a principal
    SimpleInterest(SimpleInterestArgs),
    /// Compound interest on a principal
    CompoundInterest(CompoundInterestArgs),
    /// Return on investment, optionally annualized
    Roi(RoiArgs),
    /// Compare two EMI quotes side by side
    CompareLoans(CompareLoansArgs),
    /// Project one loan against its payment history
    ProjectLoan(ProjectLoanArgs),
    /// Summarize a slice of the loan book
    BookSummary(BookSummaryArgs),
    /// Portfolio-wide collection totals
    Collections(CollectionsArgs),
    /// Investor return projections and capital distribution
    Investors(InvestorsArgs),
    /// Aggregate asset and liability buckets
    BalanceSheet(BalanceSheetArgs),
    /// Aggregate income and expense buckets
    ProfitLoss(ProfitLossArgs),
    /// Staff headcount and salary expense
    StaffCosts(StaffCostsArgs),
    /// Lending and collection activity for one date
    DailyReport(DailyReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::calculator::run_emi(args),
        Commands::Schedule(args) => commands::calculator::run_schedule(args),
        Commands::SimpleInterest(args) => commands::calculator::run_simple_interest(args),
        Commands::CompoundInterest(args) => commands::calculator::run_compound_interest(args),
        Commands::Roi(args) => commands::calculator::run_roi(args),
        Commands::CompareLoans(args) => commands::calculator::run_compare_loans(args),
        Commands::ProjectLoan(args) => commands::ledger::run_project_loan(args),
        Commands::BookSummary(args) => commands::ledger::run_book_summary(args),
        Commands::Collections(args) => commands::portfolio::run_collections(args),
        Commands::Investors(args) => commands::portfolio::run_investors(args),
        Commands::BalanceSheet(args) => commands::accounts::run_balance_sheet(args),
        Commands::ProfitLoss(args) => commands::accounts::run_profit_loss(args),
        Commands::StaffCosts(args) => commands::reports::run_staff_costs(args),
        Commands::DailyReport(args) => commands::reports::run_daily_report(args),
        Commands::Version => {
            println!("lbk {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
