//! Batch payroll generation.
//!
//! Generates payroll for many employees, treating each independently: one
//! employee's failure (duplicate payroll, unfinalized attendance) never
//! aborts the others. Errors are collected into the outcome so only the
//! failed subset needs retrying.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeProfile, PayAdjustments, PayPeriod, PayrollResult, PeriodAttendanceSummary,
};

use super::calculate::calculate;
use super::rates::round_money;

/// Persistence contract for committed payrolls, with a uniqueness
/// constraint on (employee, period start).
pub trait PayrollStore: Send + Sync {
    /// Returns `true` when a payroll is already committed for the key.
    fn exists(&self, employee_id: &str, period_start: NaiveDate) -> bool;

    /// Commits a payroll result.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicatePayroll`] when a payroll already
    /// exists for the (employee, period start) key.
    fn insert(&self, result: PayrollResult) -> EngineResult<()>;

    /// Returns the committed payroll for the key, if any.
    fn find(&self, employee_id: &str, period_start: NaiveDate) -> Option<PayrollResult>;
}

/// In-memory [`PayrollStore`] used by the API layer and tests.
#[derive(Debug, Default)]
pub struct MemoryPayrollStore {
    payrolls: Mutex<HashMap<(String, NaiveDate), PayrollResult>>,
}

impl MemoryPayrollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayrollStore for MemoryPayrollStore {
    fn exists(&self, employee_id: &str, period_start: NaiveDate) -> bool {
        self.payrolls
            .lock()
            .expect("payroll lock")
            .contains_key(&(employee_id.to_string(), period_start))
    }

    fn insert(&self, result: PayrollResult) -> EngineResult<()> {
        let mut payrolls = self.payrolls.lock().expect("payroll lock");
        let key = (result.employee_id.clone(), result.period.start_date);
        if payrolls.contains_key(&key) {
            return Err(EngineError::DuplicatePayroll {
                employee_id: result.employee_id,
                period_start: result.period.start_date,
            });
        }
        payrolls.insert(key, result);
        Ok(())
    }

    fn find(&self, employee_id: &str, period_start: NaiveDate) -> Option<PayrollResult> {
        self.payrolls
            .lock()
            .expect("payroll lock")
            .get(&(employee_id.to_string(), period_start))
            .cloned()
    }
}

/// One employee's input to a batch run.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// The employee to generate payroll for.
    pub employee: EmployeeProfile,
    /// The employee's attendance summary for the period.
    pub summary: PeriodAttendanceSummary,
    /// Per-period adjustments.
    pub adjustments: PayAdjustments,
}

/// A per-employee failure inside a batch run.
#[derive(Debug, Clone)]
pub struct BatchItemError {
    /// The employee the failure belongs to.
    pub employee_id: String,
    /// The failure itself; its kind tells the caller whether a retry can
    /// succeed.
    pub error: EngineError,
}

/// The partial-success outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Payrolls calculated and committed in this run.
    pub created: Vec<PayrollResult>,
    /// Employees that failed, with the reason each.
    pub errors: Vec<BatchItemError>,
}

/// Generates and commits payroll for every entry, isolating failures.
///
/// An entry fails without touching the others when its attendance summary
/// is not finalized or a payroll already exists for the (employee, period)
/// pair. The outcome carries both the committed payrolls and the
/// per-employee errors.
pub fn generate_batch(
    entries: &[BatchEntry],
    period: PayPeriod,
    policy: &PayrollPolicy,
    store: &dyn PayrollStore,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for entry in entries {
        match generate_one(entry, period, policy, store) {
            Ok(result) => outcome.created.push(result),
            Err(error) => {
                warn!(
                    employee_id = %entry.employee.id,
                    error = %error,
                    "batch payroll entry failed"
                );
                outcome.errors.push(BatchItemError {
                    employee_id: entry.employee.id.clone(),
                    error,
                });
            }
        }
    }

    info!(
        created = outcome.created.len(),
        failed = outcome.errors.len(),
        period_start = %period.start_date,
        "batch payroll run complete"
    );
    outcome
}

fn generate_one(
    entry: &BatchEntry,
    period: PayPeriod,
    policy: &PayrollPolicy,
    store: &dyn PayrollStore,
) -> EngineResult<PayrollResult> {
    if !entry.summary.is_finalized {
        let working_days = entry.summary.working_days.max(1);
        let recorded = entry.summary.total_present_days + entry.summary.total_absent_days;
        return Err(EngineError::AttendanceNotFinalized {
            employee_id: entry.employee.id.clone(),
            coverage: round_money(Decimal::from(recorded) / Decimal::from(working_days)),
            required: policy.finalization_threshold,
        });
    }
    if store.exists(&entry.employee.id, period.start_date) {
        return Err(EngineError::DuplicatePayroll {
            employee_id: entry.employee.id.clone(),
            period_start: period.start_date,
        });
    }

    let result = calculate(&entry.employee, &entry.summary, period, &entry.adjustments, policy)?;
    store.insert(result.clone())?;
    Ok(result)
}
