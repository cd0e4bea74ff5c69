//! Application state for the shop HR engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::attendance::{
    AttendanceEngine, Clock, MemoryAttendanceStore, MemoryLeaveLookup, MemoryOvertimeStore,
    SystemClock, WeeklySchedule,
};
use crate::config::EngineConfig;
use crate::models::EmployeeProfile;
use crate::payroll::{MemoryPayrollStore, PayrollStore};

/// Shared application state.
///
/// Wires the attendance engine to its collaborators and carries the
/// payroll store, the employee directory and the configuration. Everything
/// is `Arc`-shared so the state clones cheaply per request.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<AttendanceEngine>,
    payrolls: Arc<dyn PayrollStore>,
    leaves: Arc<MemoryLeaveLookup>,
    employees: Arc<Mutex<HashMap<String, EmployeeProfile>>>,
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates the state with the production clock in the configured
    /// timezone.
    pub fn new(config: EngineConfig) -> Self {
        let clock = Arc::new(SystemClock::new(config.timezone));
        Self::with_clock(config, clock)
    }

    /// Creates the state with an injected clock (deterministic tests).
    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        let leaves = Arc::new(MemoryLeaveLookup::new());
        let engine = AttendanceEngine::new(
            clock,
            Arc::new(WeeklySchedule::new(config.shop_hours.clone())),
            leaves.clone(),
            Arc::new(MemoryAttendanceStore::new()),
            Arc::new(MemoryOvertimeStore::new()),
            config.attendance,
        );
        Self {
            engine: Arc::new(engine),
            payrolls: Arc::new(MemoryPayrollStore::new()),
            leaves,
            employees: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    /// The attendance engine.
    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }

    /// The payroll store.
    pub fn payrolls(&self) -> &dyn PayrollStore {
        self.payrolls.as_ref()
    }

    /// The leave registry backing the engine's leave lookup.
    pub fn leaves(&self) -> &MemoryLeaveLookup {
        &self.leaves
    }

    /// Registers (or replaces) an employee in the directory.
    pub fn put_employee(&self, employee: EmployeeProfile) {
        self.employees
            .lock()
            .expect("employee lock")
            .insert(employee.id.clone(), employee);
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<EmployeeProfile> {
        self.employees.lock().expect("employee lock").get(id).cloned()
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_employee_directory_round_trip() {
        let state = AppState::new(EngineConfig::default());
        assert!(state.employee("emp_001").is_none());
        state.put_employee(EmployeeProfile {
            id: "emp_001".to_string(),
            name: "Maria Santos".to_string(),
            base_salary: rust_decimal::Decimal::new(2000000, 2),
            hourly_rate: None,
        });
        assert_eq!(state.employee("emp_001").unwrap().name, "Maria Santos");
    }
}
