//! Attendance record model and related types.
//!
//! This module defines the AttendanceRecord struct and AttendanceStatus enum
//! representing one employee's attendance for one calendar day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// High-level outcome of an employee's attendance for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in on time (or within the early-grace window).
    #[default]
    Present,
    /// No attendance for the day. Set by explicit correction, never derived.
    Absent,
    /// Checked in strictly after the expected check-in time.
    Late,
    /// Present for only part of the day. Set by explicit correction.
    HalfDay,
}

/// Persistent record of a single day's attendance for an employee.
///
/// At most one record exists per (employee, date); the store enforces the
/// uniqueness. The record is created on first check-in of the day, or
/// pre-created by an approved overtime request to carry the extended
/// expected check-out. It is mutated by check-out and by overtime approval,
/// and never deleted by the engine itself.
///
/// # Example
///
/// ```
/// use shop_hr_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = AttendanceRecord::new(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// );
/// assert_eq!(record.status, AttendanceStatus::Present);
/// assert!(!record.is_checked_in());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the employee that owns the record.
    pub employee_id: String,
    /// Calendar day the record tracks (shop-local).
    pub date: NaiveDate,
    /// Timestamp when the employee checked in, if any.
    pub check_in_time: Option<NaiveDateTime>,
    /// Timestamp when the employee checked out, if any.
    pub check_out_time: Option<NaiveDateTime>,
    /// Attendance outcome, derived at check-in time. Never silently changed
    /// after check-out except through an explicit status update.
    pub status: AttendanceStatus,
    /// Whether the employee arrived within the early-grace window.
    pub is_early: bool,
    /// Minutes of earliness when `is_early` is set, zero otherwise.
    pub minutes_early: i64,
    /// Minutes of lateness when the status is late, zero otherwise.
    pub minutes_late: i64,
    /// Expected check-in time, from the shop's hours for the weekday.
    pub expected_check_in: NaiveTime,
    /// Expected check-out time. Extended by an approved overtime request.
    pub expected_check_out: NaiveTime,
    /// Hours worked within the regular window, rounded to 2 decimals.
    pub working_hours: Decimal,
    /// Hours worked past the regular close under approved overtime,
    /// rounded to 2 decimals.
    pub overtime_hours: Decimal,
    /// Free-text reason supplied for a late arrival.
    #[serde(default)]
    pub lateness_reason: Option<String>,
    /// Free-text reason supplied for an early arrival.
    #[serde(default)]
    pub early_reason: Option<String>,
    /// Set when an overtime request covering this date was approved.
    pub has_approved_overtime: bool,
    /// The approved overtime end time, when one exists.
    #[serde(default)]
    pub overtime_end_time: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Builds an empty record for the day with the given expected window.
    pub fn new(
        employee_id: impl Into<String>,
        date: NaiveDate,
        expected_check_in: NaiveTime,
        expected_check_out: NaiveTime,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            check_in_time: None,
            check_out_time: None,
            status: AttendanceStatus::Present,
            is_early: false,
            minutes_early: 0,
            minutes_late: 0,
            expected_check_in,
            expected_check_out,
            working_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            lateness_reason: None,
            early_reason: None,
            has_approved_overtime: false,
            overtime_end_time: None,
        }
    }

    /// Returns `true` when the record has a check-in but no check-out yet.
    pub fn is_checked_in(&self) -> bool {
        self.check_in_time.is_some() && self.check_out_time.is_none()
    }

    /// Returns `true` once a check-out timestamp has been recorded.
    pub fn is_checked_out(&self) -> bool {
        self.check_out_time.is_some()
    }
}
