//! HTTP request handlers for the shop HR engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::LeaveRecord;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeProfile, PayPeriod, PeriodAttendanceSummary};
use crate::payroll::{BatchEntry, generate_batch, summarize_period};

use super::request::{
    AttendanceQuery, BatchPayrollRequest, CheckInRequest, CheckOutRequest, EmployeeRequest,
    LeaveRequest, OvertimeActionRequest, OvertimeWindowRequest, PayrollRequest,
    StatusUpdateRequest,
};
use super::response::{ApiError, ApiErrorResponse, BatchPayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(register_employee))
        .route("/leaves", post(register_leave))
        .route("/attendance", get(get_attendance))
        .route("/attendance/check-in", post(check_in))
        .route("/attendance/check-out", post(check_out))
        .route("/attendance/status", post(update_status))
        .route("/overtime/request", post(request_overtime))
        .route("/overtime/assign", post(assign_overtime))
        .route("/overtime/approve", post(approve_overtime))
        .route("/overtime/reject", post(reject_overtime))
        .route("/overtime/cancel", post(cancel_overtime))
        .route("/overtime/check-in", post(overtime_check_in))
        .route("/overtime/check-out", post(overtime_check_out))
        .route("/payroll/calculate", post(calculate_payroll))
        .route("/payroll/batch", post(batch_payroll))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an error response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Renders an engine result as JSON with the given success status.
fn engine_response<T: Serialize>(result: EngineResult<T>, success: StatusCode) -> Response {
    match result {
        Ok(value) => (success, Json(value)).into_response(),
        Err(error) => ApiErrorResponse::from(error).into_response(),
    }
}

async fn register_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let employee: EmployeeProfile = request.into();
    info!(correlation_id = %correlation_id, employee_id = %employee.id, "employee registered");
    state.put_employee(employee.clone());
    (StatusCode::CREATED, Json(employee)).into_response()
}

async fn register_leave(
    State(state): State<AppState>,
    payload: Result<Json<LeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let leave = LeaveRecord {
        employee_id: request.employee_id,
        start_date: request.start_date,
        end_date: request.end_date,
        leave_type: request.leave_type,
    };
    state.leaves().add(leave.clone());
    (StatusCode::CREATED, Json(leave)).into_response()
}

async fn get_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Response {
    match state
        .engine()
        .attendance_store()
        .find(&query.employee_id, query.date)
    {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => ApiErrorResponse::from(EngineError::AttendanceNotFound {
            employee_id: query.employee_id,
            date: query.date,
        })
        .into_response(),
    }
}

async fn check_in(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(correlation_id = %correlation_id, employee_id = %request.employee_id, "check-in requested");
    engine_response(
        state.engine().check_in(&request.employee_id, request.reason),
        StatusCode::CREATED,
    )
}

async fn check_out(
    State(state): State<AppState>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(correlation_id = %correlation_id, employee_id = %request.employee_id, "check-out requested");
    engine_response(state.engine().check_out(&request.employee_id), StatusCode::OK)
}

async fn update_status(
    State(state): State<AppState>,
    payload: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    engine_response(
        state
            .engine()
            .update_status(&request.employee_id, request.date, request.status),
        StatusCode::OK,
    )
}

async fn request_overtime(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeWindowRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    engine_response(
        state.engine().request_overtime(
            &request.employee_id,
            request.date,
            request.start_time,
            request.end_time,
            request.reason,
        ),
        StatusCode::CREATED,
    )
}

async fn assign_overtime(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeWindowRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    engine_response(
        state.engine().assign_overtime(
            &request.employee_id,
            request.date,
            request.start_time,
            request.end_time,
            request.reason,
        ),
        StatusCode::CREATED,
    )
}

async fn approve_overtime(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeActionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(correlation_id = %correlation_id, employee_id = %request.employee_id, "overtime approval requested");
    engine_response(
        state
            .engine()
            .approve_overtime(&request.employee_id, request.date),
        StatusCode::OK,
    )
}

async fn reject_overtime(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeActionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    engine_response(
        state
            .engine()
            .reject_overtime(&request.employee_id, request.date),
        StatusCode::OK,
    )
}

async fn cancel_overtime(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeActionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    engine_response(
        state
            .engine()
            .cancel_overtime(&request.employee_id, request.date),
        StatusCode::OK,
    )
}

async fn overtime_check_in(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeActionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    engine_response(
        state
            .engine()
            .overtime_check_in(&request.employee_id, request.date),
        StatusCode::OK,
    )
}

async fn overtime_check_out(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeActionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let Some(employee) = state.employee(&request.employee_id) else {
        return ApiErrorResponse::from(EngineError::EmployeeNotFound {
            employee_id: request.employee_id,
        })
        .into_response();
    };
    engine_response(
        state.engine().overtime_check_out(&employee, request.date),
        StatusCode::OK,
    )
}

/// Resolves the summary for a payroll request: the caller's pre-aggregated
/// summary when given, otherwise aggregated from stored attendance.
fn resolve_summary(
    state: &AppState,
    employee_id: &str,
    period: PayPeriod,
    provided: Option<PeriodAttendanceSummary>,
) -> PeriodAttendanceSummary {
    provided.unwrap_or_else(|| {
        let records = state.engine().attendance_store().records_for_period(
            employee_id,
            period.start_date,
            period.end_date,
        );
        summarize_period(&records, &period, &state.config().payroll)
    })
}

async fn calculate_payroll(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let Some(employee) = state.employee(&request.employee_id) else {
        return ApiErrorResponse::from(EngineError::EmployeeNotFound {
            employee_id: request.employee_id,
        })
        .into_response();
    };

    let period: PayPeriod = request.period.into();
    let summary = resolve_summary(&state, &employee.id, period, request.summary);
    let entry = BatchEntry {
        employee,
        summary,
        adjustments: request.adjustments,
    };
    let mut outcome = generate_batch(
        std::slice::from_ref(&entry),
        period,
        &state.config().payroll,
        state.payrolls(),
    );

    match (outcome.created.pop(), outcome.errors.pop()) {
        (Some(result), _) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                net_salary = %result.net_salary,
                "payroll calculated"
            );
            (StatusCode::CREATED, Json(result)).into_response()
        }
        (None, Some(item)) => ApiErrorResponse::from(item.error).into_response(),
        (None, None) => ApiErrorResponse::from(EngineError::InvalidPeriod {
            message: "batch produced no outcome".to_string(),
        })
        .into_response(),
    }
}

async fn batch_payroll(
    State(state): State<AppState>,
    payload: Result<Json<BatchPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let period: PayPeriod = request.period.into();

    let mut entries = Vec::new();
    let mut missing = Vec::new();
    for item in request.entries {
        match state.employee(&item.employee_id) {
            Some(employee) => {
                let summary = resolve_summary(&state, &employee.id, period, item.summary);
                entries.push(BatchEntry {
                    employee,
                    summary,
                    adjustments: item.adjustments,
                });
            }
            None => missing.push(item.employee_id),
        }
    }

    let outcome = generate_batch(&entries, period, &state.config().payroll, state.payrolls());
    let mut response = BatchPayrollResponse::from(outcome);
    for employee_id in missing {
        response.errors.push(super::response::BatchErrorItem {
            code: "EMPLOYEE_NOT_FOUND".to_string(),
            message: format!("Employee not found: {}", employee_id),
            employee_id,
        });
    }
    info!(
        correlation_id = %correlation_id,
        created = response.created,
        failed = response.errors.len(),
        "batch payroll processed"
    );
    (StatusCode::OK, Json(response)).into_response()
}
