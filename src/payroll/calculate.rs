//! The payroll calculation.
//!
//! A pure function over the employee profile, the period attendance
//! summary and the per-period adjustments. No side effects; callers
//! persist the result. Rejecting unfinalized periods and duplicate
//! (employee, period) calculations is the caller's responsibility.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::error::EngineResult;
use crate::models::{
    ComponentType, EmployeeProfile, PayAdjustments, PayComponent, PayPeriod, PayrollResult,
    PeriodAttendanceSummary,
};

use super::contributions::{pagibig_contribution, philhealth_contribution, sss_contribution};
use super::rates::{period_rates, round_money};
use super::tax::monthly_withholding;

/// Totals re-derived from a component list by [`recalculate_totals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecalculatedTotals {
    /// Sum of earning components.
    pub gross_salary: Decimal,
    /// Sum of deduction components.
    pub total_deductions: Decimal,
    /// Gross minus deductions.
    pub net_salary: Decimal,
}

/// Re-derives gross, deductions and net purely by summing components by
/// type.
///
/// This is the recalculation contract that supports manual correction: an
/// operator edits one component and the totals follow from the component
/// list alone, never from re-running the full calculation against raw
/// attendance.
///
/// # Example
///
/// ```
/// use shop_hr_engine::payroll::recalculate_totals;
/// use shop_hr_engine::models::PayComponent;
/// use rust_decimal::Decimal;
///
/// let components = vec![
///     PayComponent::earning("Basic Pay", Decimal::new(2000000, 2)),
///     PayComponent::deduction("SSS Contribution", Decimal::new(90000, 2)),
/// ];
/// let totals = recalculate_totals(&components);
/// assert_eq!(totals.gross_salary, Decimal::new(2000000, 2));
/// assert_eq!(totals.net_salary, Decimal::new(1910000, 2));
/// ```
pub fn recalculate_totals(components: &[PayComponent]) -> RecalculatedTotals {
    let mut gross = Decimal::ZERO;
    let mut deductions = Decimal::ZERO;
    for component in components {
        match component.component_type {
            ComponentType::Earning => gross += component.amount,
            ComponentType::Deduction => deductions += component.amount,
            ComponentType::Benefit => {}
        }
    }
    RecalculatedTotals {
        gross_salary: gross,
        total_deductions: deductions,
        net_salary: gross - deductions,
    }
}

/// Calculates payroll for one employee over one pay period.
///
/// Every monetary figure is rounded to 2 decimals at the component level,
/// and the totals are sums of the rounded components, so re-summing the
/// component list reproduces gross, deductions and net exactly.
///
/// Overtime hours are paid at the configured premium
/// ([`PayrollPolicy::overtime_premium`], default 1.25) on the period hourly
/// rate. This is deliberately a different figure from the 1.5/2.0 day-rate
/// multiplier that prices standalone overtime-request compensation; the two
/// call sites carry separate knobs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError) when
/// neither the summary nor the period yields any working days.
pub fn calculate(
    employee: &EmployeeProfile,
    summary: &PeriodAttendanceSummary,
    period: PayPeriod,
    adjustments: &PayAdjustments,
    policy: &PayrollPolicy,
) -> EngineResult<PayrollResult> {
    let working_days = if summary.working_days > 0 {
        summary.working_days
    } else {
        period.working_days()
    };
    let rates = period_rates(employee.base_salary, working_days)?;

    // Earnings
    let basic_pay = round_money(summary.total_regular_hours * rates.hourly_rate);
    let overtime_pay = round_money(
        summary.total_overtime_hours * rates.hourly_rate * policy.overtime_premium,
    );
    let sales_commission = round_money(adjustments.sales_commission);
    let performance_bonus = round_money(adjustments.performance_bonus);
    let other_allowances = round_money(adjustments.other_allowances);
    let gross_salary =
        basic_pay + overtime_pay + sales_commission + performance_bonus + other_allowances;

    // Statutory contributions come off the base salary, not gross
    let sss = sss_contribution(employee.base_salary);
    let philhealth = philhealth_contribution(employee.base_salary);
    let pagibig = pagibig_contribution(employee.base_salary);
    let taxable = gross_salary - (sss + philhealth + pagibig);
    let withholding_tax = monthly_withholding(taxable, policy.withholding);

    // Attendance and external deductions
    let absent_deductions =
        round_money(Decimal::from(summary.total_absent_days) * rates.daily_rate);
    let undertime_deductions = round_money(summary.total_undertime_hours * rates.hourly_rate);
    let loan_deductions = round_money(adjustments.loan_deductions);
    let other_deductions = round_money(adjustments.other_deductions);

    let total_deductions = withholding_tax
        + sss
        + philhealth
        + pagibig
        + absent_deductions
        + undertime_deductions
        + loan_deductions
        + other_deductions;
    let net_salary = gross_salary - total_deductions;

    let mut components = vec![PayComponent::earning("Basic Pay", basic_pay)];
    let mut push_earning = |name: &str, amount: Decimal| {
        if amount > Decimal::ZERO {
            components.push(PayComponent::earning(name, amount));
        }
    };
    push_earning("Overtime Pay", overtime_pay);
    push_earning("Sales Commission", sales_commission);
    push_earning("Performance Bonus", performance_bonus);
    push_earning("Other Allowances", other_allowances);

    let mut push_deduction = |name: &str, amount: Decimal| {
        if amount > Decimal::ZERO {
            components.push(PayComponent::deduction(name, amount));
        }
    };
    push_deduction("Withholding Tax", withholding_tax);
    push_deduction("SSS Contribution", sss);
    push_deduction("PhilHealth Contribution", philhealth);
    push_deduction("Pag-IBIG Contribution", pagibig);
    push_deduction("Absence Deduction", absent_deductions);
    push_deduction("Undertime Deduction", undertime_deductions);
    push_deduction("Loan Deduction", loan_deductions);
    push_deduction("Other Deductions", other_deductions);

    Ok(PayrollResult {
        payroll_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        employee_id: employee.id.clone(),
        period,
        base_salary: employee.base_salary,
        basic_pay,
        overtime_pay,
        sales_commission,
        performance_bonus,
        other_allowances,
        gross_salary,
        withholding_tax,
        sss_contribution: sss,
        philhealth_contribution: philhealth,
        pagibig_contribution: pagibig,
        absent_deductions,
        undertime_deductions,
        loan_deductions,
        other_deductions,
        total_deductions,
        net_salary,
        components,
    })
}
