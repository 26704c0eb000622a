//! Staff headcount and salary-expense rollup.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{Money, Staff};

/// Headcount and payroll figures across the staff roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffSummary {
    pub total_staff: u64,
    pub active_staff: u64,
    pub managers: u64,
    pub agents: u64,
    /// Missing salaries count as zero.
    pub total_salary_expense: Money,
    /// Mean salary over the whole roster, rounded to the whole currency
    /// unit; 0 on an empty roster.
    pub average_salary: Money,
}

pub fn staff_summary(staff: &[Staff]) -> StaffSummary {
    let total_salary_expense: Money = staff.iter().filter_map(|s| s.salary).sum();

    let average_salary = if staff.is_empty() {
        Decimal::ZERO
    } else {
        (total_salary_expense / Decimal::from(staff.len() as u64))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    };

    StaffSummary {
        total_staff: staff.len() as u64,
        active_staff: staff.iter().filter(|s| s.status == "active").count() as u64,
        managers: staff.iter().filter(|s| s.role == "Manager").count() as u64,
        agents: staff.iter().filter(|s| s.role == "Agent").count() as u64,
        total_salary_expense,
        average_salary,
    }
}
