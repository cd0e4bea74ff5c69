//! Payroll input and result models.
//!
//! This module contains the [`PeriodAttendanceSummary`] consumed by the
//! payroll calculation, the itemized [`PayComponent`] line items, and the
//! [`PayrollResult`] output.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// Pre-aggregated attendance totals for one employee over a pay period.
///
/// Produced by [`summarize_period`](crate::payroll::summarize_period) from
/// daily attendance records, or supplied directly by the caller. The payroll
/// calculation has no dependency on the attendance engine beyond this
/// summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAttendanceSummary {
    /// Hours worked within the regular window.
    pub total_regular_hours: Decimal,
    /// Hours worked under approved overtime.
    pub total_overtime_hours: Decimal,
    /// Scheduled hours not worked on days the employee was present.
    pub total_undertime_hours: Decimal,
    /// Days marked absent.
    pub total_absent_days: u32,
    /// Days with a late check-in.
    pub total_late_days: u32,
    /// Days with any recorded attendance.
    pub total_present_days: u32,
    /// Weekdays in the period.
    pub working_days: u32,
    /// Whether attendance coverage reached the finalization threshold.
    /// Payroll generation rejects summaries where this is `false`.
    pub is_finalized: bool,
}

/// Per-period pay adjustments that arrive from outside the attendance data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayAdjustments {
    /// Commission on sales for the period.
    #[serde(default)]
    pub sales_commission: Decimal,
    /// Discretionary performance bonus.
    #[serde(default)]
    pub performance_bonus: Decimal,
    /// Any other allowances.
    #[serde(default)]
    pub other_allowances: Decimal,
    /// Loan repayments withheld this period.
    #[serde(default)]
    pub loan_deductions: Decimal,
    /// Any other deductions.
    #[serde(default)]
    pub other_deductions: Decimal,
}

/// The ledger type of a pay component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Adds to gross pay.
    Earning,
    /// Subtracts from net pay.
    Deduction,
    /// Informational only; affects neither gross nor net.
    Benefit,
}

/// One named line item of a payroll calculation.
///
/// Summing components by type reconstructs gross and net pay, which is what
/// lets an operator edit a single component and recompute consistent totals
/// without re-running the full calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayComponent {
    /// Display name, e.g. "Basic Pay" or "SSS Contribution".
    pub name: String,
    /// Whether the component is an earning, deduction or benefit.
    pub component_type: ComponentType,
    /// The amount, non-negative and rounded to 2 decimals.
    pub amount: Decimal,
}

impl PayComponent {
    /// Builds an earning component.
    pub fn earning(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            component_type: ComponentType::Earning,
            amount,
        }
    }

    /// Builds a deduction component.
    pub fn deduction(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            component_type: ComponentType::Deduction,
            amount,
        }
    }
}

/// The complete result of a payroll calculation for one employee.
///
/// Every figure is non-negative and rounded to 2 decimals at the component
/// level. The `components` list itemizes each contributing term; summing it
/// by type reproduces `gross_salary`, `total_deductions` and `net_salary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub payroll_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The pay period covered.
    pub period: PayPeriod,
    /// Monthly base salary used as the calculation input.
    pub base_salary: Decimal,
    /// Pay for regular hours worked.
    pub basic_pay: Decimal,
    /// Pay for overtime hours at the configured premium.
    pub overtime_pay: Decimal,
    /// Commission on sales.
    pub sales_commission: Decimal,
    /// Discretionary performance bonus.
    pub performance_bonus: Decimal,
    /// Other allowances.
    pub other_allowances: Decimal,
    /// Sum of all earnings.
    pub gross_salary: Decimal,
    /// Progressive withholding tax.
    pub withholding_tax: Decimal,
    /// Social security contribution (stepped table).
    pub sss_contribution: Decimal,
    /// Health insurance contribution (rate on clamped salary).
    pub philhealth_contribution: Decimal,
    /// Housing fund contribution (rate with fixed cap).
    pub pagibig_contribution: Decimal,
    /// Salary docked for absent days.
    pub absent_deductions: Decimal,
    /// Salary docked for undertime hours.
    pub undertime_deductions: Decimal,
    /// Loan repayments withheld.
    pub loan_deductions: Decimal,
    /// Other deductions.
    pub other_deductions: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
    /// Itemized line items; summing by type reproduces the totals.
    pub components: Vec<PayComponent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_component_constructors() {
        let earning = PayComponent::earning("Basic Pay", dec("20000"));
        assert_eq!(earning.component_type, ComponentType::Earning);
        assert_eq!(earning.name, "Basic Pay");

        let deduction = PayComponent::deduction("SSS Contribution", dec("900"));
        assert_eq!(deduction.component_type, ComponentType::Deduction);
    }

    #[test]
    fn test_component_type_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComponentType::Earning).unwrap(),
            "\"earning\""
        );
        let t: ComponentType = serde_json::from_str("\"benefit\"").unwrap();
        assert_eq!(t, ComponentType::Benefit);
    }

    #[test]
    fn test_adjustments_default_to_zero() {
        let adjustments: PayAdjustments = serde_json::from_str("{}").unwrap();
        assert_eq!(adjustments.sales_commission, Decimal::ZERO);
        assert_eq!(adjustments.loan_deductions, Decimal::ZERO);
    }

    #[test]
    fn test_summary_serde_round_trip() {
        let summary = PeriodAttendanceSummary {
            total_regular_hours: dec("176"),
            total_overtime_hours: dec("4.5"),
            total_undertime_hours: dec("0"),
            total_absent_days: 1,
            total_late_days: 2,
            total_present_days: 21,
            working_days: 22,
            is_finalized: true,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: PeriodAttendanceSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
