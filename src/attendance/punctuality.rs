//! Lateness and earliness derivation for check-in.
//!
//! One rule serves both manual and self-service check-in: arrival strictly
//! after the expected time is late, arrival within the grace window before
//! it is present-and-early, and arrival before the grace window is rejected
//! with the earliest allowed timestamp.

use chrono::{Duration, NaiveDateTime};

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceStatus;

/// The outcome of the punctuality derivation at check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Punctuality {
    /// Derived status: present or late.
    pub status: AttendanceStatus,
    /// Whether the arrival fell inside the early-grace window.
    pub is_early: bool,
    /// Whole minutes of earliness; zero unless `is_early`.
    pub minutes_early: i64,
    /// Whole minutes of lateness; zero unless the status is late.
    pub minutes_late: i64,
}

/// Derives the check-in status from the expected time and the current time.
///
/// Both timestamps must be shop-local; "day of week" and calendar-day
/// comparisons happen upstream in the same local frame.
///
/// # Arguments
///
/// * `expected_check_in` - The expected check-in timestamp for the day
/// * `now` - The current shop-local time
/// * `grace_minutes` - Width of the accepted early-arrival window
///
/// # Errors
///
/// Returns [`EngineError::TooEarly`] carrying the earliest allowed timestamp
/// when `now` is more than `grace_minutes` before the expected time.
///
/// # Example
///
/// ```
/// use shop_hr_engine::attendance::derive_punctuality;
/// use shop_hr_engine::models::AttendanceStatus;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 3, 2)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let arrival = expected + chrono::Duration::minutes(10);
///
/// let punctuality = derive_punctuality(expected, arrival, 30).unwrap();
/// assert_eq!(punctuality.status, AttendanceStatus::Late);
/// assert_eq!(punctuality.minutes_late, 10);
/// ```
pub fn derive_punctuality(
    expected_check_in: NaiveDateTime,
    now: NaiveDateTime,
    grace_minutes: i64,
) -> EngineResult<Punctuality> {
    let earliest_allowed = expected_check_in - Duration::minutes(grace_minutes);

    if now < earliest_allowed {
        return Err(EngineError::TooEarly {
            expected: expected_check_in,
            earliest_allowed,
        });
    }

    if now > expected_check_in {
        return Ok(Punctuality {
            status: AttendanceStatus::Late,
            is_early: false,
            minutes_early: 0,
            minutes_late: (now - expected_check_in).num_minutes(),
        });
    }

    let minutes_early = (expected_check_in - now).num_minutes();
    Ok(Punctuality {
        status: AttendanceStatus::Present,
        is_early: now < expected_check_in,
        minutes_early,
        minutes_late: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expected() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    // =========================================================================
    // PT-001: exactly on time
    // =========================================================================
    #[test]
    fn test_pt_001_on_time_is_present() {
        let p = derive_punctuality(expected(), expected(), 30).unwrap();
        assert_eq!(p.status, AttendanceStatus::Present);
        assert!(!p.is_early);
        assert_eq!(p.minutes_early, 0);
        assert_eq!(p.minutes_late, 0);
    }

    // =========================================================================
    // PT-002: one minute after expected time is late
    // =========================================================================
    #[test]
    fn test_pt_002_one_minute_after_is_late() {
        let p = derive_punctuality(expected(), expected() + Duration::minutes(1), 30).unwrap();
        assert_eq!(p.status, AttendanceStatus::Late);
        assert_eq!(p.minutes_late, 1);
        assert!(!p.is_early);
    }

    // =========================================================================
    // PT-003: exactly thirty minutes before succeeds as early
    // =========================================================================
    #[test]
    fn test_pt_003_at_grace_boundary_is_early() {
        let p = derive_punctuality(expected(), expected() - Duration::minutes(30), 30).unwrap();
        assert_eq!(p.status, AttendanceStatus::Present);
        assert!(p.is_early);
        assert_eq!(p.minutes_early, 30);
        assert_eq!(p.minutes_late, 0);
    }

    // =========================================================================
    // PT-004: thirty-one minutes before is rejected
    // =========================================================================
    #[test]
    fn test_pt_004_before_grace_is_too_early() {
        let result = derive_punctuality(expected(), expected() - Duration::minutes(31), 30);
        match result {
            Err(EngineError::TooEarly {
                earliest_allowed, ..
            }) => {
                assert_eq!(earliest_allowed, expected() - Duration::minutes(30));
            }
            other => panic!("expected TooEarly, got {:?}", other),
        }
    }

    #[test]
    fn test_within_grace_is_early_with_minutes() {
        let p = derive_punctuality(expected(), expected() - Duration::minutes(12), 30).unwrap();
        assert_eq!(p.status, AttendanceStatus::Present);
        assert!(p.is_early);
        assert_eq!(p.minutes_early, 12);
    }

    #[test]
    fn test_substantial_lateness_counted_in_minutes() {
        let p = derive_punctuality(expected(), expected() + Duration::minutes(95), 30).unwrap();
        assert_eq!(p.status, AttendanceStatus::Late);
        assert_eq!(p.minutes_late, 95);
    }

    #[test]
    fn test_zero_grace_rejects_any_early_arrival() {
        let result = derive_punctuality(expected(), expected() - Duration::minutes(1), 0);
        assert!(matches!(result, Err(EngineError::TooEarly { .. })));
    }
}
