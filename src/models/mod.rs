//! Core data models for the shop HR engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod overtime;
mod pay_period;
mod payroll;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{EmployeeProfile, HOURS_PER_DAY, STANDARD_WORKING_DAYS};
pub use overtime::{
    OvertimeRequest, OvertimeStatus, WEEKDAY_OVERTIME_MULTIPLIER, WEEKEND_OVERTIME_MULTIPLIER,
    rate_multiplier_for,
};
pub use pay_period::PayPeriod;
pub use payroll::{
    ComponentType, PayAdjustments, PayComponent, PayrollResult, PeriodAttendanceSummary,
};
