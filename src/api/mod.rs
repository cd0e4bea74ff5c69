//! HTTP API module for the shop HR engine.
//!
//! This module provides the JSON endpoints for attendance, overtime and
//! payroll. Authorization is the caller's concern; the endpoints are keyed
//! purely by employee id and date.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BatchPayrollRequest, CheckInRequest, CheckOutRequest, EmployeeRequest, LeaveRequest,
    OvertimeActionRequest, OvertimeWindowRequest, PayrollRequest,
};
pub use response::{ApiError, BatchPayrollResponse};
pub use state::AppState;
