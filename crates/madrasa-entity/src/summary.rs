//! Totals displayed above each record list.

use serde::{Deserialize, Serialize};

use crate::staff::StaffMember;

/// Count and sum of a money-valued list (expenses or income).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountSummary {
    /// Number of records summed.
    pub count: usize,
    /// Sum of their amounts.
    pub total_amount: f64,
}

impl AmountSummary {
    /// Summarize a sequence of amounts.
    pub fn of(amounts: impl IntoIterator<Item = f64>) -> Self {
        amounts
            .into_iter()
            .fold(Self::default(), |acc, amount| Self {
                count: acc.count + 1,
                total_amount: acc.total_amount + amount,
            })
    }
}

/// Headcount and payroll of a staff list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffSummary {
    /// Members in the list.
    pub total: usize,
    /// Members with `active` status.
    pub active: usize,
    /// Monthly salary of active members.
    pub active_salary: f64,
}

impl StaffSummary {
    /// Summarize a staff list. Only active members count towards payroll.
    pub fn of(members: &[StaffMember]) -> Self {
        let mut summary = Self {
            total: members.len(),
            ..Self::default()
        };
        for member in members.iter().filter(|m| m.status.is_active()) {
            summary.active += 1;
            summary.active_salary += member.salary;
        }
        summary
    }
}
