//! Check-out hour splitting.
//!
//! At check-out the elapsed time since check-in is split into regular hours
//! (check-in to the shop's regular close) and overtime hours (close to
//! check-out, capped at the approved overtime hours). Without an approved
//! overtime request all elapsed time is regular.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::payroll::round_money;

/// Regular and overtime portions of a completed shift, each rounded to
/// 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedHoursSplit {
    /// Hours worked within the regular window.
    pub regular_hours: Decimal,
    /// Hours worked past the regular close under approved overtime.
    pub overtime_hours: Decimal,
}

fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let minutes = (end - start).num_minutes().max(0);
    round_money(Decimal::new(minutes, 0) / Decimal::new(60, 0))
}

/// Splits the elapsed time of a shift into regular and overtime hours.
///
/// # Arguments
///
/// * `check_in` - The recorded check-in timestamp
/// * `check_out` - The check-out timestamp
/// * `regular_close` - The shop's regular closing timestamp for the day
/// * `approved_overtime_hours` - The approved overtime cap, when an
///   approved or assigned overtime request exists for the date
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeRange`] when `check_out` is not after
/// `check_in`.
pub fn split_worked_hours(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    regular_close: NaiveDateTime,
    approved_overtime_hours: Option<Decimal>,
) -> EngineResult<WorkedHoursSplit> {
    if check_out <= check_in {
        return Err(EngineError::InvalidTimeRange {
            start: check_in,
            end: check_out,
        });
    }

    let Some(cap) = approved_overtime_hours else {
        return Ok(WorkedHoursSplit {
            regular_hours: hours_between(check_in, check_out),
            overtime_hours: Decimal::ZERO,
        });
    };

    if check_out <= regular_close {
        // Overtime was approved but the employee left before close.
        return Ok(WorkedHoursSplit {
            regular_hours: hours_between(check_in, check_out),
            overtime_hours: Decimal::ZERO,
        });
    }

    let overtime_start = regular_close.max(check_in);
    let overtime = hours_between(overtime_start, check_out).min(cap);

    Ok(WorkedHoursSplit {
        regular_hours: hours_between(check_in, regular_close),
        overtime_hours: overtime,
    })
}
