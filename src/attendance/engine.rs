//! The attendance/overtime state engine.
//!
//! [`AttendanceEngine`] governs a single employee's daily check-in/check-out
//! lifecycle and the coupled overtime request lifecycle. Approving (or
//! directly assigning) overtime extends the day's attendance window in the
//! same operation, so the check-out split recognizes the overtime without
//! any further manual action.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

use crate::config::AttendancePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, EmployeeProfile, OvertimeRequest, OvertimeStatus,
};
use crate::payroll::round_money;

use super::calendar::{LeaveLookup, ShopCalendar};
use super::clock::Clock;
use super::punctuality::derive_punctuality;
use super::split::split_worked_hours;
use super::store::{AttendanceStore, OvertimeStore};

/// Orchestrates check-in/check-out and the overtime request lifecycle.
///
/// The engine is keyed purely by employee id and date; authorization is
/// enforced entirely outside it. Each operation executes as one unit against
/// the stores, which serialize concurrent access per key (first writer wins,
/// the second caller observes a conflict).
pub struct AttendanceEngine {
    clock: Arc<dyn Clock>,
    calendar: Arc<dyn ShopCalendar>,
    leave: Arc<dyn LeaveLookup>,
    attendance: Arc<dyn AttendanceStore>,
    overtime: Arc<dyn OvertimeStore>,
    policy: AttendancePolicy,
}

impl AttendanceEngine {
    /// Wires the engine to its collaborators.
    pub fn new(
        clock: Arc<dyn Clock>,
        calendar: Arc<dyn ShopCalendar>,
        leave: Arc<dyn LeaveLookup>,
        attendance: Arc<dyn AttendanceStore>,
        overtime: Arc<dyn OvertimeStore>,
        policy: AttendancePolicy,
    ) -> Self {
        Self {
            clock,
            calendar,
            leave,
            attendance,
            overtime,
            policy,
        }
    }

    /// The attendance store the engine writes to.
    pub fn attendance_store(&self) -> &Arc<dyn AttendanceStore> {
        &self.attendance
    }

    /// The overtime store the engine writes to.
    pub fn overtime_store(&self) -> &Arc<dyn OvertimeStore> {
        &self.overtime
    }

    /// Expected check-in and check-out times for a date, from the shop
    /// calendar with the configured defaults as fallback.
    fn expected_window(&self, date: NaiveDate) -> (NaiveTime, NaiveTime) {
        let weekday = date.weekday();
        let open = self
            .calendar
            .open_time(weekday)
            .unwrap_or(self.policy.default_open);
        let close = self
            .calendar
            .close_time(weekday)
            .unwrap_or(self.policy.default_close);
        (open, close)
    }

    /// Records the employee's check-in for the current day.
    ///
    /// Derives the status against the expected check-in time: strictly after
    /// is late; within the early-grace window is present-and-early. The
    /// optional reason is stored with the lateness or earliness it explains.
    ///
    /// # Errors
    ///
    /// * [`EngineError::OnApprovedLeave`] when approved leave covers the day
    /// * [`EngineError::AlreadyCheckedOutToday`] after a completed shift
    /// * [`EngineError::AlreadyCheckedIn`] when a check-in is already open
    /// * [`EngineError::TooEarly`] before the grace window, with the
    ///   earliest allowed timestamp
    pub fn check_in(
        &self,
        employee_id: &str,
        reason: Option<String>,
    ) -> EngineResult<AttendanceRecord> {
        let now = self.clock.now();
        let date = now.date();

        if self.leave.approved_leave_covering(employee_id, date).is_some() {
            return Err(EngineError::OnApprovedLeave {
                employee_id: employee_id.to_string(),
                date,
            });
        }

        let existing = self.attendance.find(employee_id, date);
        if let Some(record) = &existing {
            if record.is_checked_out() {
                return Err(EngineError::AlreadyCheckedOutToday {
                    employee_id: employee_id.to_string(),
                    date,
                });
            }
            if record.is_checked_in() {
                return Err(EngineError::AlreadyCheckedIn {
                    employee_id: employee_id.to_string(),
                    date,
                });
            }
        }

        let (open, close) = self.expected_window(date);
        let punctuality = derive_punctuality(
            date.and_time(open),
            now,
            self.policy.early_grace_minutes,
        )?;

        // A record pre-created by overtime approval keeps its extended
        // expected check-out.
        let is_new = existing.is_none();
        let mut record =
            existing.unwrap_or_else(|| AttendanceRecord::new(employee_id, date, open, close));
        record.check_in_time = Some(now);
        record.status = punctuality.status;
        record.is_early = punctuality.is_early;
        record.minutes_early = punctuality.minutes_early;
        record.minutes_late = punctuality.minutes_late;
        match punctuality.status {
            AttendanceStatus::Late => record.lateness_reason = reason,
            _ if punctuality.is_early => record.early_reason = reason,
            _ => {}
        }

        if is_new {
            self.attendance.insert(record.clone())?;
        } else {
            self.attendance.update(record.clone())?;
        }

        info!(
            employee_id,
            date = %date,
            status = ?record.status,
            "check-in recorded"
        );
        Ok(record)
    }

    /// Records the employee's check-out and computes worked hours.
    ///
    /// When an approved or assigned overtime request exists for the date and
    /// the check-out falls after the shop's regular close, the elapsed time
    /// splits into regular hours (check-in to close) and overtime hours
    /// (close to check-out, capped at the approved hours), and the overtime
    /// request is stamped with the actual worked window.
    ///
    /// # Errors
    ///
    /// * [`EngineError::NotCheckedIn`] with no open check-in for the day
    /// * [`EngineError::AlreadyCheckedOutToday`] after a completed shift
    pub fn check_out(&self, employee_id: &str) -> EngineResult<AttendanceRecord> {
        let now = self.clock.now();
        let date = now.date();

        let mut record = self
            .attendance
            .find(employee_id, date)
            .ok_or_else(|| EngineError::NotCheckedIn {
                employee_id: employee_id.to_string(),
                date,
            })?;
        if record.is_checked_out() {
            return Err(EngineError::AlreadyCheckedOutToday {
                employee_id: employee_id.to_string(),
                date,
            });
        }
        let check_in_time = record.check_in_time.ok_or_else(|| EngineError::NotCheckedIn {
            employee_id: employee_id.to_string(),
            date,
        })?;

        let (_, close) = self.expected_window(date);
        let close_at = date.and_time(close);
        let active_overtime = self
            .overtime
            .active_request(employee_id, date)
            .filter(|r| r.status.can_check_in());

        let split = split_worked_hours(
            check_in_time,
            now,
            close_at,
            active_overtime.as_ref().map(|r| r.hours),
        )?;

        record.check_out_time = Some(now);
        record.working_hours = split.regular_hours;
        record.overtime_hours = split.overtime_hours;
        self.attendance.update(record.clone())?;

        if split.overtime_hours > rust_decimal::Decimal::ZERO {
            if let Some(mut request) = active_overtime {
                request.actual_start_time = Some(close_at.max(check_in_time));
                request.actual_end_time = Some(now);
                request.checked_out_at = Some(now);
                self.overtime.update(request)?;
            }
        }

        info!(
            employee_id,
            date = %date,
            working_hours = %record.working_hours,
            overtime_hours = %record.overtime_hours,
            "check-out recorded"
        );
        Ok(record)
    }

    /// Explicitly corrects the status of an existing attendance record.
    ///
    /// This is the only path that changes a status after check-out; half-day
    /// and absent are only ever set here.
    pub fn update_status(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> EngineResult<AttendanceRecord> {
        let mut record = self.attendance.find(employee_id, date).ok_or_else(|| {
            EngineError::AttendanceNotFound {
                employee_id: employee_id.to_string(),
                date,
            }
        })?;
        record.status = status;
        self.attendance.update(record.clone())?;
        Ok(record)
    }

    /// Files an employee self-request for overtime on a date.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidTimeRange`] when the window is not ordered
    /// * [`EngineError::DuplicateOvertimeRequest`] when an active request
    ///   already holds the (employee, date) slot
    pub fn request_overtime(
        &self,
        employee_id: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        reason: Option<String>,
    ) -> EngineResult<OvertimeRequest> {
        self.create_overtime(employee_id, date, start_time, end_time, reason, OvertimeStatus::Pending)
    }

    /// Directly assigns overtime, skipping the approval step.
    ///
    /// The day's attendance window is extended immediately, as with
    /// approval.
    pub fn assign_overtime(
        &self,
        employee_id: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        reason: Option<String>,
    ) -> EngineResult<OvertimeRequest> {
        let request = self.create_overtime(
            employee_id,
            date,
            start_time,
            end_time,
            reason,
            OvertimeStatus::Assigned,
        )?;
        self.extend_attendance_for(&request)?;
        Ok(request)
    }

    fn create_overtime(
        &self,
        employee_id: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        reason: Option<String>,
        status: OvertimeStatus,
    ) -> EngineResult<OvertimeRequest> {
        if end_time <= start_time {
            return Err(EngineError::InvalidTimeRange {
                start: date.and_time(start_time),
                end: date.and_time(end_time),
            });
        }
        let mut request = OvertimeRequest::new(employee_id, date, start_time, end_time, status);
        request.reason = reason;
        self.overtime.insert(request.clone())?;
        info!(
            employee_id,
            date = %date,
            status = ?status,
            "overtime request created"
        );
        Ok(request)
    }

    /// Approves a pending overtime request.
    ///
    /// As a side effect the day's attendance record is upserted with the
    /// extended expected check-out, so the attendance engine recognizes the
    /// extended window without any further action.
    ///
    /// # Errors
    ///
    /// * [`EngineError::OvertimeRequestNotFound`] with no request on file
    /// * [`EngineError::InvalidOvertimeTransition`] unless pending
    pub fn approve_overtime(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<OvertimeRequest> {
        let mut request = self.transition_from_pending(employee_id, date, "approve")?;
        request.status = OvertimeStatus::Approved;
        self.overtime.update(request.clone())?;
        self.extend_attendance_for(&request)?;
        info!(employee_id, date = %date, "overtime approved");
        Ok(request)
    }

    /// Rejects a pending overtime request.
    pub fn reject_overtime(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<OvertimeRequest> {
        let mut request = self.transition_from_pending(employee_id, date, "reject")?;
        request.status = OvertimeStatus::Rejected;
        self.overtime.update(request.clone())?;
        Ok(request)
    }

    /// Cancels a pending overtime request.
    pub fn cancel_overtime(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<OvertimeRequest> {
        let mut request = self.transition_from_pending(employee_id, date, "cancel")?;
        request.status = OvertimeStatus::Cancelled;
        self.overtime.update(request.clone())?;
        Ok(request)
    }

    fn transition_from_pending(
        &self,
        employee_id: &str,
        date: NaiveDate,
        action: &str,
    ) -> EngineResult<OvertimeRequest> {
        let request = self.overtime.find(employee_id, date).ok_or_else(|| {
            EngineError::OvertimeRequestNotFound {
                employee_id: employee_id.to_string(),
                date,
            }
        })?;
        if request.status != OvertimeStatus::Pending {
            return Err(EngineError::InvalidOvertimeTransition {
                status: request.status.label().to_string(),
                action: action.to_string(),
            });
        }
        Ok(request)
    }

    /// Upserts the day's attendance record with the extended window. Paired
    /// with the request mutation so the two commit together.
    fn extend_attendance_for(&self, request: &OvertimeRequest) -> EngineResult<()> {
        let date = request.overtime_date;
        let (open, close) = self.expected_window(date);
        let mut record = self
            .attendance
            .find(&request.employee_id, date)
            .unwrap_or_else(|| AttendanceRecord::new(&request.employee_id, date, open, close));
        record.expected_check_out = request.end_time;
        record.has_approved_overtime = true;
        record.overtime_end_time = Some(request.end_time);
        self.attendance.upsert(record);
        Ok(())
    }

    /// Records the employee's check-in for an approved or assigned overtime
    /// window.
    ///
    /// Accepted from 30 minutes before the planned start until 30 minutes
    /// before the planned end (the configured window half-width).
    ///
    /// # Errors
    ///
    /// * [`EngineError::OvertimeRequestNotFound`] with no request on file
    /// * [`EngineError::InvalidOvertimeTransition`] unless approved/assigned
    /// * [`EngineError::OvertimeAlreadyCheckedIn`] on a second check-in
    /// * [`EngineError::OutsideOvertimeWindow`] outside the bounds, which
    ///   the error carries
    pub fn overtime_check_in(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<OvertimeRequest> {
        let mut request = self.overtime.find(employee_id, date).ok_or_else(|| {
            EngineError::OvertimeRequestNotFound {
                employee_id: employee_id.to_string(),
                date,
            }
        })?;
        if !request.status.can_check_in() {
            return Err(EngineError::InvalidOvertimeTransition {
                status: request.status.label().to_string(),
                action: "check in".to_string(),
            });
        }
        if request.checked_in_at.is_some() {
            return Err(EngineError::OvertimeAlreadyCheckedIn { date });
        }

        let window = Duration::minutes(self.policy.overtime_window_minutes);
        let earliest = date.and_time(request.start_time) - window;
        let latest = date.and_time(request.end_time) - window;
        let now = self.clock.now();
        if now < earliest || now > latest {
            return Err(EngineError::OutsideOvertimeWindow { earliest, latest });
        }

        request.checked_in_at = Some(now);
        self.overtime.update(request.clone())?;
        info!(employee_id, date = %date, "overtime check-in recorded");
        Ok(request)
    }

    /// Records the employee's overtime check-out and computes compensation.
    ///
    /// Actual hours are the elapsed time since overtime check-in; the
    /// compensation amount is the employee's hourly rate times actual hours
    /// times the request's 1.5/2.0 day-rate multiplier. (Period payroll
    /// prices overtime separately, with the configured premium.)
    ///
    /// # Errors
    ///
    /// * [`EngineError::OvertimeRequestNotFound`] with no request on file
    /// * [`EngineError::OvertimeNotCheckedIn`] before overtime check-in
    /// * [`EngineError::OvertimeAlreadyCheckedOut`] on a second check-out
    pub fn overtime_check_out(
        &self,
        employee: &EmployeeProfile,
        date: NaiveDate,
    ) -> EngineResult<OvertimeRequest> {
        let mut request = self.overtime.find(&employee.id, date).ok_or_else(|| {
            EngineError::OvertimeRequestNotFound {
                employee_id: employee.id.clone(),
                date,
            }
        })?;
        if request.checked_out_at.is_some() {
            return Err(EngineError::OvertimeAlreadyCheckedOut { date });
        }
        let checked_in_at = request
            .checked_in_at
            .ok_or(EngineError::OvertimeNotCheckedIn { date })?;

        let now = self.clock.now();
        let actual_hours = elapsed_hours(checked_in_at, now);
        request.checked_out_at = Some(now);
        request.actual_start_time = Some(checked_in_at);
        request.actual_end_time = Some(now);
        request.actual_hours = Some(actual_hours);
        request.calculated_amount =
            round_money(employee.effective_hourly_rate() * actual_hours * request.rate_multiplier);
        self.overtime.update(request.clone())?;

        info!(
            employee_id = %employee.id,
            date = %date,
            actual_hours = %actual_hours,
            amount = %request.calculated_amount,
            "overtime check-out recorded"
        );
        Ok(request)
    }
}

fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> rust_decimal::Decimal {
    let minutes = (end - start).num_minutes().max(0);
    round_money(rust_decimal::Decimal::new(minutes, 0) / rust_decimal::Decimal::new(60, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::calendar::{LeaveRecord, MemoryLeaveLookup, WeeklySchedule};
    use crate::attendance::clock::FixedClock;
    use crate::attendance::store::{MemoryAttendanceStore, MemoryOvertimeStore};
    use crate::config::ShopHours;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        monday().and_hms_opt(h, m, 0).unwrap()
    }

    struct Harness {
        clock: Arc<FixedClock>,
        leave: Arc<MemoryLeaveLookup>,
        engine: AttendanceEngine,
    }

    fn harness(start: NaiveDateTime) -> Harness {
        let clock = Arc::new(FixedClock::new(start));
        let leave = Arc::new(MemoryLeaveLookup::new());
        let engine = AttendanceEngine::new(
            clock.clone(),
            Arc::new(WeeklySchedule::new(ShopHours::default())),
            leave.clone(),
            Arc::new(MemoryAttendanceStore::new()),
            Arc::new(MemoryOvertimeStore::new()),
            AttendancePolicy::default(),
        );
        Harness {
            clock,
            leave,
            engine,
        }
    }

    fn employee() -> EmployeeProfile {
        EmployeeProfile {
            id: "emp_001".to_string(),
            name: "Maria Santos".to_string(),
            base_salary: dec("20000"),
            hourly_rate: Some(dec("100")),
        }
    }

    // =========================================================================
    // CI-001: on-time check-in is present
    // =========================================================================
    #[test]
    fn test_ci_001_on_time_check_in() {
        let h = harness(at(8, 0));
        let record = h.engine.check_in("emp_001", None).unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(!record.is_early);
        assert_eq!(record.check_in_time, Some(at(8, 0)));
    }

    // =========================================================================
    // CI-002: one minute after opening is late
    // =========================================================================
    #[test]
    fn test_ci_002_late_check_in_records_reason() {
        let h = harness(at(8, 1));
        let record = h
            .engine
            .check_in("emp_001", Some("flat tire".to_string()))
            .unwrap();
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.minutes_late, 1);
        assert_eq!(record.lateness_reason.as_deref(), Some("flat tire"));
    }

    // =========================================================================
    // CI-003: thirty minutes early succeeds as early
    // =========================================================================
    #[test]
    fn test_ci_003_early_check_in_within_grace() {
        let h = harness(at(7, 30));
        let record = h.engine.check_in("emp_001", None).unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(record.is_early);
        assert_eq!(record.minutes_early, 30);
    }

    // =========================================================================
    // CI-004: thirty-one minutes early is rejected with the boundary
    // =========================================================================
    #[test]
    fn test_ci_004_too_early_check_in() {
        let h = harness(at(7, 29));
        let result = h.engine.check_in("emp_001", None);
        match result {
            Err(EngineError::TooEarly {
                earliest_allowed, ..
            }) => assert_eq!(earliest_allowed, at(7, 30)),
            other => panic!("expected TooEarly, got {:?}", other),
        }
    }

    // =========================================================================
    // CI-005: double check-in conflicts
    // =========================================================================
    #[test]
    fn test_ci_005_double_check_in_conflicts() {
        let h = harness(at(8, 0));
        h.engine.check_in("emp_001", None).unwrap();
        let result = h.engine.check_in("emp_001", None);
        assert!(matches!(result, Err(EngineError::AlreadyCheckedIn { .. })));
    }

    // =========================================================================
    // CI-006: re-check-in after check-out conflicts, no new record
    // =========================================================================
    #[test]
    fn test_ci_006_no_recheck_in_after_check_out() {
        let h = harness(at(8, 0));
        h.engine.check_in("emp_001", None).unwrap();
        h.clock.set(at(17, 0));
        h.engine.check_out("emp_001").unwrap();

        let result = h.engine.check_in("emp_001", None);
        assert!(matches!(
            result,
            Err(EngineError::AlreadyCheckedOutToday { .. })
        ));
    }

    // =========================================================================
    // CI-007: approved leave blocks check-in
    // =========================================================================
    #[test]
    fn test_ci_007_leave_blocks_check_in() {
        let h = harness(at(8, 0));
        h.leave.add(LeaveRecord {
            employee_id: "emp_001".to_string(),
            start_date: monday(),
            end_date: monday(),
            leave_type: "sick".to_string(),
        });
        let result = h.engine.check_in("emp_001", None);
        assert!(matches!(result, Err(EngineError::OnApprovedLeave { .. })));
    }

    // =========================================================================
    // CO-001: plain check-out, all regular hours
    // =========================================================================
    #[test]
    fn test_co_001_check_out_all_regular() {
        let h = harness(at(8, 0));
        h.engine.check_in("emp_001", None).unwrap();
        h.clock.set(at(17, 0));
        let record = h.engine.check_out("emp_001").unwrap();
        assert_eq!(record.working_hours, dec("9.00"));
        assert_eq!(record.overtime_hours, dec("0"));
    }

    // =========================================================================
    // CO-002: check-out without check-in
    // =========================================================================
    #[test]
    fn test_co_002_check_out_without_check_in() {
        let h = harness(at(17, 0));
        let result = h.engine.check_out("emp_001");
        assert!(matches!(result, Err(EngineError::NotCheckedIn { .. })));
    }

    // =========================================================================
    // CO-003: late checkout without approved overtime stays regular
    // =========================================================================
    #[test]
    fn test_co_003_late_checkout_without_overtime() {
        let h = harness(at(8, 0));
        h.engine.check_in("emp_001", None).unwrap();
        h.clock.set(at(19, 0));
        let record = h.engine.check_out("emp_001").unwrap();
        assert_eq!(record.working_hours, dec("11.00"));
        assert_eq!(record.overtime_hours, dec("0"));
    }

    // =========================================================================
    // OT-001: approval extends the day's attendance window seamlessly
    // =========================================================================
    #[test]
    fn test_ot_001_approval_extends_expected_check_out() {
        let h = harness(at(8, 0));
        h.engine
            .request_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();
        h.engine.approve_overtime("emp_001", monday()).unwrap();

        let record = h
            .engine
            .attendance_store()
            .find("emp_001", monday())
            .unwrap();
        assert_eq!(
            record.expected_check_out,
            NaiveTime::from_hms_opt(20, 0, 0).unwrap()
        );
        assert!(record.has_approved_overtime);
        assert_eq!(
            record.overtime_end_time,
            Some(NaiveTime::from_hms_opt(20, 0, 0).unwrap())
        );
    }

    // =========================================================================
    // OT-002: approval preserves an existing check-in
    // =========================================================================
    #[test]
    fn test_ot_002_approval_preserves_check_in() {
        let h = harness(at(8, 0));
        h.engine.check_in("emp_001", None).unwrap();
        h.engine
            .request_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();
        h.engine.approve_overtime("emp_001", monday()).unwrap();

        let record = h
            .engine
            .attendance_store()
            .find("emp_001", monday())
            .unwrap();
        assert_eq!(record.check_in_time, Some(at(8, 0)));
        assert!(record.has_approved_overtime);
    }

    // =========================================================================
    // OT-003: checkout past close with approved overtime splits hours
    // =========================================================================
    #[test]
    fn test_ot_003_checkout_splits_overtime() {
        let h = harness(at(8, 0));
        h.engine.check_in("emp_001", None).unwrap();
        h.engine
            .request_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();
        h.engine.approve_overtime("emp_001", monday()).unwrap();

        h.clock.set(at(20, 0));
        let record = h.engine.check_out("emp_001").unwrap();
        assert_eq!(record.working_hours, dec("9.00"));
        assert_eq!(record.overtime_hours, dec("3.00"));

        // The request was stamped with the actual window
        let request = h
            .engine
            .overtime_store()
            .find("emp_001", monday())
            .unwrap();
        assert_eq!(request.actual_start_time, Some(at(17, 0)));
        assert_eq!(request.actual_end_time, Some(at(20, 0)));
        assert_eq!(request.checked_out_at, Some(at(20, 0)));
    }

    // =========================================================================
    // OT-004: duplicate active request rejected
    // =========================================================================
    #[test]
    fn test_ot_004_duplicate_request_rejected() {
        let h = harness(at(8, 0));
        let window = (
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        h.engine
            .request_overtime("emp_001", monday(), window.0, window.1, None)
            .unwrap();
        let result = h
            .engine
            .request_overtime("emp_001", monday(), window.0, window.1, None);
        assert!(matches!(
            result,
            Err(EngineError::DuplicateOvertimeRequest { .. })
        ));
    }

    // =========================================================================
    // OT-005: approve requires pending
    // =========================================================================
    #[test]
    fn test_ot_005_approve_requires_pending() {
        let h = harness(at(8, 0));
        h.engine
            .request_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();
        h.engine.approve_overtime("emp_001", monday()).unwrap();

        let result = h.engine.approve_overtime("emp_001", monday());
        assert!(matches!(
            result,
            Err(EngineError::InvalidOvertimeTransition { .. })
        ));
    }

    // =========================================================================
    // OT-006: overtime check-in window boundaries
    // =========================================================================
    #[test]
    fn test_ot_006_overtime_check_in_window() {
        let h = harness(at(8, 0));
        h.engine
            .assign_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();

        // 16:29 is one minute before the window opens
        h.clock.set(at(16, 29));
        let result = h.engine.overtime_check_in("emp_001", monday());
        match result {
            Err(EngineError::OutsideOvertimeWindow { earliest, latest }) => {
                assert_eq!(earliest, at(16, 30));
                assert_eq!(latest, at(19, 30));
            }
            other => panic!("expected OutsideOvertimeWindow, got {:?}", other),
        }

        // 16:30 opens the window
        h.clock.set(at(16, 30));
        let request = h.engine.overtime_check_in("emp_001", monday()).unwrap();
        assert_eq!(request.checked_in_at, Some(at(16, 30)));
    }

    // =========================================================================
    // OT-007: pending request cannot check in
    // =========================================================================
    #[test]
    fn test_ot_007_pending_cannot_check_in() {
        let h = harness(at(17, 0));
        h.engine
            .request_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();
        let result = h.engine.overtime_check_in("emp_001", monday());
        assert!(matches!(
            result,
            Err(EngineError::InvalidOvertimeTransition { .. })
        ));
    }

    // =========================================================================
    // OT-008: overtime check-out computes hours and amount
    // =========================================================================
    #[test]
    fn test_ot_008_overtime_check_out_amount() {
        let h = harness(at(17, 0));
        h.engine
            .assign_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();
        h.engine.overtime_check_in("emp_001", monday()).unwrap();
        h.clock.set(at(20, 0));

        let request = h.engine.overtime_check_out(&employee(), monday()).unwrap();
        assert_eq!(request.actual_hours, Some(dec("3.00")));
        // 100/hour x 3 hours x 1.5 weekday multiplier
        assert_eq!(request.calculated_amount, dec("450.00"));
        assert_eq!(request.checked_out_at, Some(at(20, 0)));
    }

    // =========================================================================
    // OT-009: overtime check-out guards
    // =========================================================================
    #[test]
    fn test_ot_009_overtime_check_out_guards() {
        let h = harness(at(17, 0));
        h.engine
            .assign_overtime(
                "emp_001",
                monday(),
                NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                None,
            )
            .unwrap();

        // Not checked in yet
        let result = h.engine.overtime_check_out(&employee(), monday());
        assert!(matches!(
            result,
            Err(EngineError::OvertimeNotCheckedIn { .. })
        ));

        h.engine.overtime_check_in("emp_001", monday()).unwrap();
        h.clock.set(at(20, 0));
        h.engine.overtime_check_out(&employee(), monday()).unwrap();

        // Second check-out conflicts
        let result = h.engine.overtime_check_out(&employee(), monday());
        assert!(matches!(
            result,
            Err(EngineError::OvertimeAlreadyCheckedOut { .. })
        ));
    }

    // =========================================================================
    // OT-010: reject and cancel only from pending
    // =========================================================================
    #[test]
    fn test_ot_010_reject_then_new_request_allowed() {
        let h = harness(at(8, 0));
        let window = (
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        h.engine
            .request_overtime("emp_001", monday(), window.0, window.1, None)
            .unwrap();
        let request = h.engine.reject_overtime("emp_001", monday()).unwrap();
        assert_eq!(request.status, OvertimeStatus::Rejected);

        // The slot is free again
        h.engine
            .request_overtime("emp_001", monday(), window.0, window.1, None)
            .unwrap();
        let request = h.engine.cancel_overtime("emp_001", monday()).unwrap();
        assert_eq!(request.status, OvertimeStatus::Cancelled);
    }

    #[test]
    fn test_update_status_sets_half_day() {
        let h = harness(at(8, 0));
        h.engine.check_in("emp_001", None).unwrap();
        let record = h
            .engine
            .update_status("emp_001", monday(), AttendanceStatus::HalfDay)
            .unwrap();
        assert_eq!(record.status, AttendanceStatus::HalfDay);
    }

    #[test]
    fn test_invalid_overtime_window_rejected() {
        let h = harness(at(8, 0));
        let result = h.engine.request_overtime(
            "emp_001",
            monday(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            None,
        );
        assert!(matches!(result, Err(EngineError::InvalidTimeRange { .. })));
    }
}
