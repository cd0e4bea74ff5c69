//! Clock abstraction for shop-local time.
//!
//! All lateness and overtime-window decisions depend on "now" in the shop's
//! timezone, so the engine receives a [`Clock`] instead of reading system
//! time directly. Production uses [`SystemClock`]; tests use [`FixedClock`].

use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of the current shop-local time.
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock time in the shop's timezone.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current shop-local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Production clock: system time converted to the shop's timezone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a clock for the given shop timezone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Deterministic clock for tests; the reported time only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock frozen at the given shop-local time.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to a new time.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().expect("clock lock") = now;
    }

    /// Advances the clock by a duration.
    pub fn advance(&self, duration: chrono::Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().expect("clock lock")
    }
}
