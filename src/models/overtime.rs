//! Overtime request model and lifecycle states.
//!
//! This module defines the OvertimeRequest struct and OvertimeStatus enum.
//! A request is created by employee self-request (pending) or manager
//! assignment (assigned), and at most one non-terminal request exists per
//! employee per date.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Compensation multiplier for weekday overtime.
pub const WEEKDAY_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Compensation multiplier for weekend overtime.
pub const WEEKEND_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Lifecycle state of an overtime request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeStatus {
    /// Awaiting a manager decision.
    Pending,
    /// Approved by a manager; the day's attendance window is extended.
    Approved,
    /// Assigned directly by a manager, skipping the approval step.
    Assigned,
    /// Rejected by a manager. Terminal.
    Rejected,
    /// Withdrawn by the employee. Terminal.
    Cancelled,
}

impl OvertimeStatus {
    /// Returns `true` for states that still occupy the (employee, date) slot.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            OvertimeStatus::Pending | OvertimeStatus::Approved | OvertimeStatus::Assigned
        )
    }

    /// Returns `true` for states that permit overtime check-in.
    pub fn can_check_in(self) -> bool {
        matches!(self, OvertimeStatus::Approved | OvertimeStatus::Assigned)
    }

    /// Lowercase label used in transition error messages.
    pub fn label(self) -> &'static str {
        match self {
            OvertimeStatus::Pending => "pending",
            OvertimeStatus::Approved => "approved",
            OvertimeStatus::Assigned => "assigned",
            OvertimeStatus::Rejected => "rejected",
            OvertimeStatus::Cancelled => "cancelled",
        }
    }
}

/// Returns the compensation multiplier for overtime worked on `date`:
/// 1.5 on weekdays, 2.0 on Saturday and Sunday.
pub fn rate_multiplier_for(date: NaiveDate) -> Decimal {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKEND_OVERTIME_MULTIPLIER,
        _ => WEEKDAY_OVERTIME_MULTIPLIER,
    }
}

/// A request to work a planned window of overtime on a given date.
///
/// The planned window drives the overtime check-in window and the seamless
/// extension of the day's attendance record on approval. The actual worked
/// window and amount are recorded at overtime check-out.
///
/// # Example
///
/// ```
/// use shop_hr_engine::models::{OvertimeRequest, OvertimeStatus};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// // 2026-03-02 is a Monday, so the weekday multiplier applies.
/// let request = OvertimeRequest::new(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     OvertimeStatus::Pending,
/// );
/// assert_eq!(request.hours, Decimal::new(30, 1));
/// assert_eq!(request.rate_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// Identifier of the employee the overtime is for.
    pub employee_id: String,
    /// The date the overtime is worked (shop-local).
    pub overtime_date: NaiveDate,
    /// Planned start of the overtime window.
    pub start_time: NaiveTime,
    /// Planned end of the overtime window.
    pub end_time: NaiveTime,
    /// Planned hours, derived from the planned window.
    pub hours: Decimal,
    /// Compensation multiplier: 1.5 weekday, 2.0 weekend.
    pub rate_multiplier: Decimal,
    /// Compensation amount. Recomputed whenever actual hours change.
    pub calculated_amount: Decimal,
    /// Lifecycle state.
    pub status: OvertimeStatus,
    /// Timestamp of overtime check-in, if any.
    #[serde(default)]
    pub checked_in_at: Option<NaiveDateTime>,
    /// Timestamp of overtime check-out, if any.
    #[serde(default)]
    pub checked_out_at: Option<NaiveDateTime>,
    /// Actual start of worked overtime, stamped at check-out.
    #[serde(default)]
    pub actual_start_time: Option<NaiveDateTime>,
    /// Actual end of worked overtime, stamped at check-out.
    #[serde(default)]
    pub actual_end_time: Option<NaiveDateTime>,
    /// Actual worked hours. Set only after check-out is recorded.
    #[serde(default)]
    pub actual_hours: Option<Decimal>,
    /// Free-text justification from the requester or assigning manager.
    #[serde(default)]
    pub reason: Option<String>,
}

impl OvertimeRequest {
    /// Builds a request for the planned window in the given initial state.
    ///
    /// Planned hours and the weekday/weekend multiplier are derived from
    /// the window and the date. The compensation amount starts at zero and
    /// is computed from actual hours at overtime check-out.
    pub fn new(
        employee_id: impl Into<String>,
        overtime_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        status: OvertimeStatus,
    ) -> Self {
        let minutes = (end_time - start_time).num_minutes();
        let hours = Decimal::new(minutes.max(0), 0) / Decimal::new(60, 0);
        Self {
            employee_id: employee_id.into(),
            overtime_date,
            start_time,
            end_time,
            hours,
            rate_multiplier: rate_multiplier_for(overtime_date),
            calculated_amount: Decimal::ZERO,
            status,
            checked_in_at: None,
            checked_out_at: None,
            actual_start_time: None,
            actual_end_time: None,
            actual_hours: None,
            reason: None,
        }
    }
}
