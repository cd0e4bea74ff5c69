//! Attendance aggregation for payroll.
//!
//! Daily attendance records become a [`PeriodAttendanceSummary`]: hour and
//! day totals plus the finalization flag. A period is finalized when its
//! weekday coverage reaches the configured threshold; payroll generation
//! rejects unfinalized periods.

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::{
    AttendanceRecord, AttendanceStatus, HOURS_PER_DAY, PayPeriod, PeriodAttendanceSummary,
};

use super::rates::round_money;

/// Fraction of working weekdays carrying an attendance record.
///
/// Used both for the finalization decision and for the coverage figure
/// reported when a period is rejected.
pub fn weekday_coverage(records: &[AttendanceRecord], period: &PayPeriod) -> Decimal {
    let working_days = period.working_days();
    if working_days == 0 {
        return Decimal::ZERO;
    }
    let recorded = records
        .iter()
        .filter(|r| {
            period.contains_date(r.date)
                && !matches!(r.date.weekday(), Weekday::Sat | Weekday::Sun)
        })
        .count();
    round_money(Decimal::from(recorded) / Decimal::from(working_days))
}

/// Aggregates a period's attendance records into the payroll input summary.
///
/// Undertime accrues on checked-out days that fall short of the standard
/// 8 worked hours; absent days accrue from records explicitly corrected to
/// absent. Records outside the period are ignored.
pub fn summarize_period(
    records: &[AttendanceRecord],
    period: &PayPeriod,
    policy: &PayrollPolicy,
) -> PeriodAttendanceSummary {
    let mut summary = PeriodAttendanceSummary {
        total_regular_hours: Decimal::ZERO,
        total_overtime_hours: Decimal::ZERO,
        total_undertime_hours: Decimal::ZERO,
        total_absent_days: 0,
        total_late_days: 0,
        total_present_days: 0,
        working_days: period.working_days(),
        is_finalized: false,
    };

    for record in records.iter().filter(|r| period.contains_date(r.date)) {
        match record.status {
            AttendanceStatus::Absent => summary.total_absent_days += 1,
            AttendanceStatus::Late => {
                summary.total_late_days += 1;
                summary.total_present_days += 1;
            }
            AttendanceStatus::Present | AttendanceStatus::HalfDay => {
                summary.total_present_days += 1;
            }
        }

        summary.total_regular_hours += record.working_hours;
        summary.total_overtime_hours += record.overtime_hours;
        if record.is_checked_out() && record.status != AttendanceStatus::Absent {
            let shortfall = HOURS_PER_DAY - record.working_hours;
            if shortfall > Decimal::ZERO {
                summary.total_undertime_hours += shortfall;
            }
        }
    }

    summary.is_finalized =
        weekday_coverage(records, period) >= policy.finalization_threshold;
    summary
}
