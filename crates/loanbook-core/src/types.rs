use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Interest and return rates, expressed in percent (12 = 12% p.a.) exactly
/// as the record store supplies them. Never pre-divided.
pub type Rate = Decimal;

/// Repayment structure of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    #[serde(rename = "EMI")]
    Emi,
    Normal,
}

/// Settlement state of a payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Received,
    Pending,
    Failed,
}

/// A loan as persisted by the record store.
///
/// Snapshot only: the engine never creates, updates, or deletes one. Field
/// names follow the store's camelCase JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    #[serde(default)]
    pub loan_number: String,
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub loan_type: LoanType,
    pub interest_rate: Rate,
    /// Tenure in months; meaningful for `EMI` loans only.
    #[serde(default)]
    pub tenure: u32,
    pub start_date: NaiveDate,
    pub status: String,
}

/// A repayment against a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub loan_id: String,
    pub amount: Money,
    pub payment_date: NaiveDate,
    pub status: PaymentStatus,
    #[serde(default)]
    pub method: String,
}

/// Capital placed with the business. Accrued return fields are always
/// derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub amount: Money,
    pub return_rate: Rate,
    pub investment_date: NaiveDate,
    #[serde(default)]
    pub status: String,
}

/// A staff record, used only for salary-expense views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub salary: Option<Money>,
    #[serde(default)]
    pub status: String,
}
