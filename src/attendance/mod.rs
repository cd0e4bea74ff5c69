//! The attendance/overtime state engine.
//!
//! This module governs a single employee's daily check-in/check-out
//! lifecycle, lateness/earliness computation against shop operating hours,
//! the overtime request lifecycle, and the seamless extension of a shift
//! when overtime is approved.

mod calendar;
mod clock;
mod engine;
mod punctuality;
mod split;
mod store;

pub use calendar::{LeaveLookup, LeaveRecord, MemoryLeaveLookup, ShopCalendar, WeeklySchedule};
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::AttendanceEngine;
pub use punctuality::{Punctuality, derive_punctuality};
pub use split::{WorkedHoursSplit, split_worked_hours};
pub use store::{
    AttendanceStore, MemoryAttendanceStore, MemoryOvertimeStore, OvertimeStore,
};
