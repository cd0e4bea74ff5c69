//! Error types for the shop HR engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance tracking,
//! overtime handling and payroll calculation.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;

/// Classifies every [`EngineError`] for transport mapping.
///
/// No kind is fatal to the process; all are expected, per-call outcomes.
/// The API layer maps kinds to HTTP status codes (Validation → 400,
/// Conflict → 409, Policy → 422, NotFound → 404).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: missing employee, invalid time range.
    Validation,
    /// The operation collides with existing state; the caller should
    /// re-query and inform the end user.
    Conflict,
    /// A business-policy boundary was crossed; the variant carries the
    /// boundary values so the caller can present actionable guidance.
    Policy,
    /// A referenced employee, record or request does not exist.
    NotFound,
}

/// The main error type for the shop HR engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shop_hr_engine::error::{EngineError, ErrorKind};
/// use chrono::NaiveDate;
///
/// let error = EngineError::AlreadyCheckedIn {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
/// };
/// assert_eq!(error.kind(), ErrorKind::Conflict);
/// assert_eq!(
///     error.to_string(),
///     "Employee 'emp_001' already checked in on 2026-03-02"
/// );
/// ```
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay period was unusable for calculation (e.g. no working days).
    #[error("Invalid pay period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// A supplied time range was inconsistent (end not after start).
    #[error("Invalid time range: {start} is not before {end}")]
    InvalidTimeRange {
        /// The start of the offending range.
        start: NaiveDateTime,
        /// The end of the offending range.
        end: NaiveDateTime,
    },

    /// An employee already has an open check-in for the date.
    #[error("Employee '{employee_id}' already checked in on {date}")]
    AlreadyCheckedIn {
        /// The employee attempting the duplicate check-in.
        employee_id: String,
        /// The date of the existing record.
        date: NaiveDate,
    },

    /// An employee already completed a shift for the date; re-check-in after
    /// checking out is not allowed (starting overtime is a separate flow).
    #[error("Employee '{employee_id}' already checked out on {date}")]
    AlreadyCheckedOutToday {
        /// The employee attempting to check in again.
        employee_id: String,
        /// The date of the completed shift.
        date: NaiveDate,
    },

    /// Check-out was attempted with no open check-in for the date.
    #[error("Employee '{employee_id}' has not checked in on {date}")]
    NotCheckedIn {
        /// The employee attempting to check out.
        employee_id: String,
        /// The date with no open check-in.
        date: NaiveDate,
    },

    /// Check-in was attempted more than the grace window before opening.
    #[error("Too early to check in: earliest allowed time is {earliest_allowed}")]
    TooEarly {
        /// The expected check-in time for the day.
        expected: NaiveDateTime,
        /// The earliest timestamp at which check-in is accepted.
        earliest_allowed: NaiveDateTime,
    },

    /// Check-in was attempted on a date covered by an approved leave request.
    #[error("Employee '{employee_id}' is on approved leave on {date}")]
    OnApprovedLeave {
        /// The employee on leave.
        employee_id: String,
        /// The covered date.
        date: NaiveDate,
    },

    /// An active overtime request already exists for the employee and date.
    #[error("Employee '{employee_id}' already has an active overtime request for {date}")]
    DuplicateOvertimeRequest {
        /// The requesting employee.
        employee_id: String,
        /// The overtime date with an active request.
        date: NaiveDate,
    },

    /// The overtime request is not in a state that permits the operation.
    #[error("Overtime request is {status}; cannot {action}")]
    InvalidOvertimeTransition {
        /// The current status of the request.
        status: String,
        /// The attempted action.
        action: String,
    },

    /// Overtime check-in was attempted outside the allowed window.
    #[error("Overtime check-in outside allowed window ({earliest} to {latest})")]
    OutsideOvertimeWindow {
        /// The earliest accepted check-in timestamp.
        earliest: NaiveDateTime,
        /// The latest accepted check-in timestamp.
        latest: NaiveDateTime,
    },

    /// The overtime request has already recorded a check-in.
    #[error("Overtime request for {date} is already checked in")]
    OvertimeAlreadyCheckedIn {
        /// The overtime date.
        date: NaiveDate,
    },

    /// The overtime request has already recorded a check-out.
    #[error("Overtime request for {date} is already checked out")]
    OvertimeAlreadyCheckedOut {
        /// The overtime date.
        date: NaiveDate,
    },

    /// Overtime check-out was attempted before overtime check-in.
    #[error("Overtime request for {date} must check in before checking out")]
    OvertimeNotCheckedIn {
        /// The overtime date.
        date: NaiveDate,
    },

    /// A payroll already exists for the employee and period.
    #[error(
        "Payroll already exists for employee '{employee_id}' for period starting {period_start}"
    )]
    DuplicatePayroll {
        /// The employee with an existing payroll.
        employee_id: String,
        /// The start date of the period.
        period_start: NaiveDate,
    },

    /// Attendance coverage for the period is below the finalization threshold.
    #[error(
        "Attendance for employee '{employee_id}' is not finalized: coverage {coverage} below required {required}"
    )]
    AttendanceNotFinalized {
        /// The employee whose attendance is incomplete.
        employee_id: String,
        /// The recorded coverage fraction.
        coverage: Decimal,
        /// The required coverage fraction.
        required: Decimal,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The unknown employee identifier.
        employee_id: String,
    },

    /// No attendance record exists for the employee and date.
    #[error("Attendance record not found for employee '{employee_id}' on {date}")]
    AttendanceNotFound {
        /// The employee identifier.
        employee_id: String,
        /// The date with no record.
        date: NaiveDate,
    },

    /// No overtime request exists for the employee and date.
    #[error("Overtime request not found for employee '{employee_id}' on {date}")]
    OvertimeRequestNotFound {
        /// The employee identifier.
        employee_id: String,
        /// The date with no request.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns the taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidEmployee { .. }
            | EngineError::InvalidPeriod { .. }
            | EngineError::InvalidTimeRange { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => ErrorKind::Validation,
            EngineError::AlreadyCheckedIn { .. }
            | EngineError::AlreadyCheckedOutToday { .. }
            | EngineError::DuplicateOvertimeRequest { .. }
            | EngineError::InvalidOvertimeTransition { .. }
            | EngineError::OvertimeAlreadyCheckedIn { .. }
            | EngineError::OvertimeAlreadyCheckedOut { .. }
            | EngineError::DuplicatePayroll { .. } => ErrorKind::Conflict,
            EngineError::TooEarly { .. }
            | EngineError::OnApprovedLeave { .. }
            | EngineError::OutsideOvertimeWindow { .. }
            | EngineError::NotCheckedIn { .. }
            | EngineError::OvertimeNotCheckedIn { .. }
            | EngineError::AttendanceNotFinalized { .. } => ErrorKind::Policy,
            EngineError::EmployeeNotFound { .. }
            | EngineError::AttendanceNotFound { .. }
            | EngineError::OvertimeRequestNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
