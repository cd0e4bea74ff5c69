//! Employee profile model.
//!
//! This module defines the EmployeeProfile struct carrying the pay-relevant
//! attributes the engines need: base salary and hourly rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard number of working days per month used when deriving an hourly
/// rate from a monthly base salary.
pub const STANDARD_WORKING_DAYS: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Standard number of paid hours per working day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Represents an employee as seen by the attendance and payroll engines.
///
/// Authorization, profile photos, onboarding documents and the rest of the
/// HR record live outside the engine; only the identifiers and pay figures
/// are carried here.
///
/// # Example
///
/// ```
/// use shop_hr_engine::models::EmployeeProfile;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeProfile {
///     id: "emp_001".to_string(),
///     name: "Maria Santos".to_string(),
///     base_salary: Decimal::new(2000000, 2), // 20000.00
///     hourly_rate: None,
/// };
/// // 20000 / 22 / 8, rounded to centavos
/// assert_eq!(employee.effective_hourly_rate(), Decimal::new(11364, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, used in logs and payroll output.
    pub name: String,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Optional contracted hourly rate. When absent, the rate is derived
    /// from the base salary over a standard 22-day, 8-hour month.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

impl EmployeeProfile {
    /// Returns the hourly rate used for standalone overtime compensation.
    ///
    /// Uses the contracted [`hourly_rate`](Self::hourly_rate) when present,
    /// otherwise derives `base_salary / 22 / 8` rounded to 2 decimals.
    pub fn effective_hourly_rate(&self) -> Decimal {
        match self.hourly_rate {
            Some(rate) => rate,
            None => {
                let daily = self.base_salary / STANDARD_WORKING_DAYS;
                crate::payroll::round_money(daily / HOURS_PER_DAY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> EmployeeProfile {
        EmployeeProfile {
            id: "emp_001".to_string(),
            name: "Maria Santos".to_string(),
            base_salary: dec("20000"),
            hourly_rate: None,
        }
    }

    #[test]
    fn test_effective_hourly_rate_derived_from_base_salary() {
        let employee = create_test_employee();
        // 20000 / 22 = 909.0909..., / 8 = 113.6363..., rounds to 113.64
        assert_eq!(employee.effective_hourly_rate(), dec("113.64"));
    }

    #[test]
    fn test_effective_hourly_rate_prefers_contracted_rate() {
        let mut employee = create_test_employee();
        employee.hourly_rate = Some(dec("150.00"));
        assert_eq!(employee.effective_hourly_rate(), dec("150.00"));
    }

    #[test]
    fn test_deserialize_employee_without_hourly_rate() {
        let json = r#"{
            "id": "emp_002",
            "name": "Jose Rizal",
            "base_salary": "18000"
        }"#;

        let employee: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_002");
        assert_eq!(employee.base_salary, dec("18000"));
        assert_eq!(employee.hourly_rate, None);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: EmployeeProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
