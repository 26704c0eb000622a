//! Named-bucket aggregation for balance-sheet and P&L views.
//!
//! A bucket is a flat `name -> amount` mapping. This is the one generic
//! reduction the reporting side reuses wherever it needs to sum a named bag
//! of numbers and derive a net figure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Money;

/// One line item of an aggregated bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketEntry {
    pub name: String,
    pub amount: Money,
}

/// A named bucket reduced to its line items and total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketSummary {
    pub total: Money,
    pub entries: Vec<BucketEntry>,
}

/// Sum a flat name -> amount mapping. Entries keep the map's key order.
pub fn aggregate(bucket: &BTreeMap<String, Money>) -> BucketSummary {
    BucketSummary {
        total: bucket.values().copied().sum(),
        entries: bucket
            .iter()
            .map(|(name, amount)| BucketEntry {
                name: name.clone(),
                amount: *amount,
            })
            .collect(),
    }
}

/// Assets vs liabilities position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub assets: BucketSummary,
    pub liabilities: BucketSummary,
    /// assets - liabilities
    pub net_position: Money,
}

pub fn balance_sheet(
    assets: &BTreeMap<String, Money>,
    liabilities: &BTreeMap<String, Money>,
) -> BalanceSheet {
    let assets = aggregate(assets);
    let liabilities = aggregate(liabilities);
    BalanceSheet {
        net_position: assets.total - liabilities.total,
        assets,
        liabilities,
    }
}

/// Income vs expense position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    pub income: BucketSummary,
    pub expenses: BucketSummary,
    /// income - expenses
    pub net_profit: Money,
}

pub fn profit_and_loss(
    income: &BTreeMap<String, Money>,
    expenses: &BTreeMap<String, Money>,
) -> ProfitAndLoss {
    let income = aggregate(income);
    let expenses = aggregate(expenses);
    ProfitAndLoss {
        net_profit: income.total - expenses.total,
        income,
        expenses,
    }
}
