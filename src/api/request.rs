//! Request types for the shop HR engine API.
//!
//! This module defines the JSON request structures for the attendance,
//! overtime and payroll endpoints.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceStatus, EmployeeProfile, PayAdjustments, PayPeriod, PeriodAttendanceSummary,
};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Optional contracted hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

impl From<EmployeeRequest> for EmployeeProfile {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeProfile {
            id: req.id,
            name: req.name,
            base_salary: req.base_salary,
            hourly_rate: req.hourly_rate,
        }
    }
}

/// Request body for `POST /leaves` (registers an approved leave).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee on leave.
    pub employee_id: String,
    /// First covered date, inclusive.
    pub start_date: NaiveDate,
    /// Last covered date, inclusive.
    pub end_date: NaiveDate,
    /// Leave category, e.g. "sick" or "vacation".
    pub leave_type: String,
}

/// Request body for `POST /attendance/check-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The employee checking in.
    pub employee_id: String,
    /// Optional reason for a late or early arrival.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Request body for `POST /attendance/check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// The employee checking out.
    pub employee_id: String,
}

/// Request body for `POST /attendance/status` (explicit correction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    /// The employee whose record is corrected.
    pub employee_id: String,
    /// The date of the record.
    pub date: NaiveDate,
    /// The corrected status.
    pub status: AttendanceStatus,
}

/// Query string for `GET /attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceQuery {
    /// The employee to look up.
    pub employee_id: String,
    /// The date to look up.
    pub date: NaiveDate,
}

/// Request body for `POST /overtime/request` and `POST /overtime/assign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeWindowRequest {
    /// The employee the overtime is for.
    pub employee_id: String,
    /// The overtime date.
    pub date: NaiveDate,
    /// Planned start of the window.
    pub start_time: NaiveTime,
    /// Planned end of the window.
    pub end_time: NaiveTime,
    /// Optional justification.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Request body for the overtime lifecycle actions
/// (approve/reject/cancel/check-in/check-out).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeActionRequest {
    /// The employee whose request is acted on.
    pub employee_id: String,
    /// The overtime date.
    pub date: NaiveDate,
}

/// Pay period in a payroll request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Request body for `POST /payroll/calculate`.
///
/// When `summary` is omitted it is aggregated from the stored attendance
/// records for the period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee to calculate for.
    pub employee_id: String,
    /// The pay period.
    pub period: PayPeriodRequest,
    /// Optional pre-aggregated attendance summary.
    #[serde(default)]
    pub summary: Option<PeriodAttendanceSummary>,
    /// Per-period adjustments.
    #[serde(default)]
    pub adjustments: PayAdjustments,
}

/// One employee entry in a batch payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPayrollEntry {
    /// The employee to calculate for.
    pub employee_id: String,
    /// Optional pre-aggregated attendance summary.
    #[serde(default)]
    pub summary: Option<PeriodAttendanceSummary>,
    /// Per-period adjustments.
    #[serde(default)]
    pub adjustments: PayAdjustments,
}

/// Request body for `POST /payroll/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPayrollRequest {
    /// The pay period for every entry.
    pub period: PayPeriodRequest,
    /// The employees to generate payroll for.
    pub entries: Vec<BatchPayrollEntry>,
}
