//! Response types for the shop HR engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes by error kind.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ErrorKind};
use crate::models::PayrollResult;
use crate::payroll::BatchOutcome;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Stable error code per engine error variant.
fn error_code(error: &EngineError) -> &'static str {
    match error {
        EngineError::InvalidEmployee { .. } => "INVALID_EMPLOYEE",
        EngineError::InvalidPeriod { .. } => "INVALID_PERIOD",
        EngineError::InvalidTimeRange { .. } => "INVALID_TIME_RANGE",
        EngineError::AlreadyCheckedIn { .. } => "ALREADY_CHECKED_IN",
        EngineError::AlreadyCheckedOutToday { .. } => "ALREADY_CHECKED_OUT",
        EngineError::NotCheckedIn { .. } => "NOT_CHECKED_IN",
        EngineError::TooEarly { .. } => "TOO_EARLY",
        EngineError::OnApprovedLeave { .. } => "ON_APPROVED_LEAVE",
        EngineError::DuplicateOvertimeRequest { .. } => "DUPLICATE_OVERTIME_REQUEST",
        EngineError::InvalidOvertimeTransition { .. } => "INVALID_OVERTIME_TRANSITION",
        EngineError::OutsideOvertimeWindow { .. } => "OUTSIDE_OVERTIME_WINDOW",
        EngineError::OvertimeAlreadyCheckedIn { .. } => "OVERTIME_ALREADY_CHECKED_IN",
        EngineError::OvertimeAlreadyCheckedOut { .. } => "OVERTIME_ALREADY_CHECKED_OUT",
        EngineError::OvertimeNotCheckedIn { .. } => "OVERTIME_NOT_CHECKED_IN",
        EngineError::DuplicatePayroll { .. } => "DUPLICATE_PAYROLL",
        EngineError::AttendanceNotFinalized { .. } => "ATTENDANCE_NOT_FINALIZED",
        EngineError::EmployeeNotFound { .. } => "EMPLOYEE_NOT_FOUND",
        EngineError::AttendanceNotFound { .. } => "ATTENDANCE_NOT_FOUND",
        EngineError::OvertimeRequestNotFound { .. } => "OVERTIME_REQUEST_NOT_FOUND",
        EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
            "CONFIG_ERROR"
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match error.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Policy => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(error_code(&error), error.to_string()),
        }
    }
}

/// One failed employee in a batch payroll response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchErrorItem {
    /// The employee the failure belongs to.
    pub employee_id: String,
    /// Stable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Response body for `POST /payroll/batch`: a partial-success report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPayrollResponse {
    /// Number of payrolls created and committed.
    pub created: usize,
    /// The committed payrolls.
    pub payrolls: Vec<PayrollResult>,
    /// The employees that failed, with the reason each.
    pub errors: Vec<BatchErrorItem>,
}

impl From<BatchOutcome> for BatchPayrollResponse {
    fn from(outcome: BatchOutcome) -> Self {
        BatchPayrollResponse {
            created: outcome.created.len(),
            payrolls: outcome.created,
            errors: outcome
                .errors
                .into_iter()
                .map(|e| BatchErrorItem {
                    employee_id: e.employee_id,
                    code: error_code(&e.error).to_string(),
                    message: e.error.to_string(),
                })
                .collect(),
        }
    }
}
