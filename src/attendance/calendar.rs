//! Shop calendar and leave lookup collaborators.
//!
//! The attendance engine asks a [`ShopCalendar`] for the expected working
//! window of each weekday and a [`LeaveLookup`] whether an approved leave
//! request covers a date. Both are traits so the surrounding application can
//! back them with its own storage; in-process implementations are provided.

use std::sync::Mutex;

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::ShopHours;

/// Per-weekday operating hours of the shop.
pub trait ShopCalendar: Send + Sync {
    /// The opening time for a weekday, or `None` when the shop is closed.
    fn open_time(&self, weekday: Weekday) -> Option<NaiveTime>;

    /// The closing time for a weekday, or `None` when the shop is closed.
    fn close_time(&self, weekday: Weekday) -> Option<NaiveTime>;
}

/// A [`ShopCalendar`] backed by the configured weekly schedule.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    hours: ShopHours,
}

impl WeeklySchedule {
    /// Wraps a configured weekly schedule.
    pub fn new(hours: ShopHours) -> Self {
        Self { hours }
    }
}

impl ShopCalendar for WeeklySchedule {
    fn open_time(&self, weekday: Weekday) -> Option<NaiveTime> {
        self.hours.for_weekday(weekday).map(|h| h.open)
    }

    fn close_time(&self, weekday: Weekday) -> Option<NaiveTime> {
        self.hours.for_weekday(weekday).map(|h| h.close)
    }
}

/// An approved leave request as seen by the attendance engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee on leave.
    pub employee_id: String,
    /// First covered date, inclusive.
    pub start_date: NaiveDate,
    /// Last covered date, inclusive.
    pub end_date: NaiveDate,
    /// Leave category, e.g. "sick" or "vacation".
    pub leave_type: String,
}

impl LeaveRecord {
    /// Returns `true` when the leave covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Source of approved leave requests.
pub trait LeaveLookup: Send + Sync {
    /// Returns the approved leave covering the employee and date, if any.
    fn approved_leave_covering(&self, employee_id: &str, date: NaiveDate) -> Option<LeaveRecord>;
}

/// In-process [`LeaveLookup`] used by the API layer and tests.
#[derive(Debug, Default)]
pub struct MemoryLeaveLookup {
    leaves: Mutex<Vec<LeaveRecord>>,
}

impl MemoryLeaveLookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an approved leave.
    pub fn add(&self, leave: LeaveRecord) {
        self.leaves.lock().expect("leave lock").push(leave);
    }
}

impl LeaveLookup for MemoryLeaveLookup {
    fn approved_leave_covering(&self, employee_id: &str, date: NaiveDate) -> Option<LeaveRecord> {
        self.leaves
            .lock()
            .expect("leave lock")
            .iter()
            .find(|l| l.employee_id == employee_id && l.covers(date))
            .cloned()
    }
}
