//! The payroll calculation engine.
//!
//! Given attendance totals for a period, computes gross pay, statutory
//! deductions (stepped contribution tables plus progressive withholding
//! tax) and net pay, producing itemized components. Batch generation over
//! many employees isolates per-employee failures.

mod batch;
mod calculate;
mod contributions;
mod rates;
mod summary;
mod tax;

pub use batch::{
    BatchEntry, BatchItemError, BatchOutcome, MemoryPayrollStore, PayrollStore, generate_batch,
};
pub use calculate::{RecalculatedTotals, calculate, recalculate_totals};
pub use contributions::{pagibig_contribution, philhealth_contribution, sss_contribution};
pub use rates::{PeriodRates, period_rates, round_money};
pub use summary::{summarize_period, weekday_coverage};
pub use tax::{annual_tax, monthly_withholding};
