//! Storage contracts for attendance records and overtime requests.
//!
//! Both stores are keyed by (employee, date) with a uniqueness constraint on
//! the key: the first writer wins and the second caller observes a conflict.
//! Implementations are expected to make each call atomic; the in-memory
//! stores here serialize all access behind a single mutex per store.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, OvertimeRequest};

/// Transactional CRUD for daily attendance records.
pub trait AttendanceStore: Send + Sync {
    /// Returns the record for the employee and date, if one exists.
    fn find(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyCheckedIn`] when a record already
    /// exists for the (employee, date) key.
    fn insert(&self, record: AttendanceRecord) -> EngineResult<()>;

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AttendanceNotFound`] when no record exists
    /// for the key.
    fn update(&self, record: AttendanceRecord) -> EngineResult<()>;

    /// Inserts or replaces the record for its key.
    fn upsert(&self, record: AttendanceRecord);

    /// Returns all records for the employee within the inclusive date range,
    /// ordered by date.
    fn records_for_period(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AttendanceRecord>;
}

/// Transactional CRUD for overtime requests.
///
/// Only the most recent request per (employee, date) is retained; a new
/// request may replace a terminal (rejected/cancelled) one but never an
/// active one.
pub trait OvertimeStore: Send + Sync {
    /// Returns the request for the employee and date regardless of status.
    fn find(&self, employee_id: &str, date: NaiveDate) -> Option<OvertimeRequest>;

    /// Returns the request for the key when it is in a non-terminal state.
    fn active_request(&self, employee_id: &str, date: NaiveDate) -> Option<OvertimeRequest> {
        self.find(employee_id, date).filter(|r| r.status.is_active())
    }

    /// Inserts a new request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateOvertimeRequest`] when an active
    /// request already exists for the key.
    fn insert(&self, request: OvertimeRequest) -> EngineResult<()>;

    /// Replaces an existing request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OvertimeRequestNotFound`] when no request
    /// exists for the key.
    fn update(&self, request: OvertimeRequest) -> EngineResult<()>;
}

type AttendanceKey = (String, NaiveDate);

/// In-memory [`AttendanceStore`] used by the API layer and tests.
#[derive(Debug, Default)]
pub struct MemoryAttendanceStore {
    records: Mutex<HashMap<AttendanceKey, AttendanceRecord>>,
}

impl MemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttendanceStore for MemoryAttendanceStore {
    fn find(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceRecord> {
        self.records
            .lock()
            .expect("attendance lock")
            .get(&(employee_id.to_string(), date))
            .cloned()
    }

    fn insert(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut records = self.records.lock().expect("attendance lock");
        let key = (record.employee_id.clone(), record.date);
        if records.contains_key(&key) {
            return Err(EngineError::AlreadyCheckedIn {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        records.insert(key, record);
        Ok(())
    }

    fn update(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut records = self.records.lock().expect("attendance lock");
        let key = (record.employee_id.clone(), record.date);
        if !records.contains_key(&key) {
            return Err(EngineError::AttendanceNotFound {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        records.insert(key, record);
        Ok(())
    }

    fn upsert(&self, record: AttendanceRecord) {
        let key = (record.employee_id.clone(), record.date);
        self.records
            .lock()
            .expect("attendance lock")
            .insert(key, record);
    }

    fn records_for_period(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        let records = self.records.lock().expect("attendance lock");
        let mut matching: Vec<AttendanceRecord> = records
            .values()
            .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.date);
        matching
    }
}

/// In-memory [`OvertimeStore`] used by the API layer and tests.
#[derive(Debug, Default)]
pub struct MemoryOvertimeStore {
    requests: Mutex<HashMap<AttendanceKey, OvertimeRequest>>,
}

impl MemoryOvertimeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OvertimeStore for MemoryOvertimeStore {
    fn find(&self, employee_id: &str, date: NaiveDate) -> Option<OvertimeRequest> {
        self.requests
            .lock()
            .expect("overtime lock")
            .get(&(employee_id.to_string(), date))
            .cloned()
    }

    fn insert(&self, request: OvertimeRequest) -> EngineResult<()> {
        let mut requests = self.requests.lock().expect("overtime lock");
        let key = (request.employee_id.clone(), request.overtime_date);
        if requests.get(&key).is_some_and(|r| r.status.is_active()) {
            return Err(EngineError::DuplicateOvertimeRequest {
                employee_id: request.employee_id,
                date: request.overtime_date,
            });
        }
        requests.insert(key, request);
        Ok(())
    }

    fn update(&self, request: OvertimeRequest) -> EngineResult<()> {
        let mut requests = self.requests.lock().expect("overtime lock");
        let key = (request.employee_id.clone(), request.overtime_date);
        if !requests.contains_key(&key) {
            return Err(EngineError::OvertimeRequestNotFound {
                employee_id: request.employee_id,
                date: request.overtime_date,
            });
        }
        requests.insert(key, request);
        Ok(())
    }
}
