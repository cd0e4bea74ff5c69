//! Configuration types for the shop HR engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every section has a
//! `Default` so a partial file (or no file at all) yields a working engine.

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Opening and closing time for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DayHours {
    /// Time the shop opens; employees are expected to check in by then.
    pub open: NaiveTime,
    /// Time the shop closes; the regular working window ends here.
    pub close: NaiveTime,
}

/// Per-weekday operating hours for the shop.
///
/// A `None` day means the shop is closed that day; check-ins then fall back
/// to the default hours in [`AttendancePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShopHours {
    /// Monday operating hours.
    pub monday: Option<DayHours>,
    /// Tuesday operating hours.
    pub tuesday: Option<DayHours>,
    /// Wednesday operating hours.
    pub wednesday: Option<DayHours>,
    /// Thursday operating hours.
    pub thursday: Option<DayHours>,
    /// Friday operating hours.
    pub friday: Option<DayHours>,
    /// Saturday operating hours.
    pub saturday: Option<DayHours>,
    /// Sunday operating hours.
    pub sunday: Option<DayHours>,
}

impl ShopHours {
    /// Returns the configured hours for a weekday, if any.
    pub fn for_weekday(&self, weekday: Weekday) -> Option<DayHours> {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

impl Default for ShopHours {
    /// Open Monday through Saturday 08:00–17:00, closed Sunday.
    fn default() -> Self {
        let standard = Some(DayHours {
            open: NaiveTime::from_hms_opt(8, 0, 0).expect("valid open time"),
            close: NaiveTime::from_hms_opt(17, 0, 0).expect("valid close time"),
        });
        Self {
            monday: standard,
            tuesday: standard,
            wednesday: standard,
            thursday: standard,
            friday: standard,
            saturday: standard,
            sunday: None,
        }
    }
}

/// Timing rules for check-in and overtime windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttendancePolicy {
    /// Minutes before the expected check-in during which arrival is accepted
    /// and recorded as early. Arrivals earlier than this are rejected.
    pub early_grace_minutes: i64,
    /// Half-width of the overtime check-in window around the planned start.
    pub overtime_window_minutes: i64,
    /// Expected check-in time when the calendar has no hours for the day.
    pub default_open: NaiveTime,
    /// Expected check-out time when the calendar has no hours for the day.
    pub default_close: NaiveTime,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            early_grace_minutes: 30,
            overtime_window_minutes: 30,
            default_open: NaiveTime::from_hms_opt(8, 0, 0).expect("valid open time"),
            default_close: NaiveTime::from_hms_opt(17, 0, 0).expect("valid close time"),
        }
    }
}

/// Selects how monthly withholding tax is derived from the bracket table.
///
/// The bracket edges are annual. `Annualized` multiplies monthly taxable
/// income by 12, applies the table, and divides the annual tax by 12.
/// `MonthlyTable` applies a table with every edge divided by 12 directly to
/// the monthly taxable income. The two agree for incomes that stay inside a
/// single bracket all year and diverge slightly otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithholdingPolicy {
    /// Annualize the monthly taxable income before applying the table.
    #[default]
    Annualized,
    /// Apply the table scaled to monthly edges directly.
    MonthlyTable,
}

/// Payroll calculation knobs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayrollPolicy {
    /// Premium multiplier applied to overtime hours inside the period
    /// calculation (default 1.25). Standalone overtime-request compensation
    /// instead uses the request's own 1.5/2.0 day-rate multiplier; the two
    /// figures are intentionally separate knobs pending product
    /// clarification and must not be conflated.
    pub overtime_premium: Decimal,
    /// Minimum fraction of working weekdays that must carry attendance
    /// before payroll may be generated for the period (default 0.80).
    pub finalization_threshold: Decimal,
    /// How monthly withholding tax is derived from the bracket table.
    pub withholding: WithholdingPolicy,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            overtime_premium: Decimal::new(125, 2),
            finalization_threshold: Decimal::new(80, 2),
            withholding: WithholdingPolicy::default(),
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// IANA timezone the shop operates in. All attendance timestamps are
    /// interpreted in this zone.
    pub timezone: Tz,
    /// Per-weekday operating hours.
    pub shop_hours: ShopHours,
    /// Check-in and overtime timing rules.
    pub attendance: AttendancePolicy,
    /// Payroll calculation knobs.
    pub payroll: PayrollPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Asia::Manila,
            shop_hours: ShopHours::default(),
            attendance: AttendancePolicy::default(),
            payroll: PayrollPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shop_hours_closed_sunday() {
        let hours = ShopHours::default();
        assert!(hours.for_weekday(Weekday::Mon).is_some());
        assert!(hours.for_weekday(Weekday::Sat).is_some());
        assert!(hours.for_weekday(Weekday::Sun).is_none());
    }

    #[test]
    fn test_default_attendance_policy() {
        let policy = AttendancePolicy::default();
        assert_eq!(policy.early_grace_minutes, 30);
        assert_eq!(policy.overtime_window_minutes, 30);
        assert_eq!(policy.default_open, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn test_default_payroll_policy() {
        let policy = PayrollPolicy::default();
        assert_eq!(policy.overtime_premium, Decimal::new(125, 2));
        assert_eq!(policy.finalization_threshold, Decimal::new(80, 2));
        assert_eq!(policy.withholding, WithholdingPolicy::Annualized);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
timezone: "Asia/Manila"
payroll:
  finalization_threshold: "0.9"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.payroll.finalization_threshold, Decimal::new(90, 2));
        // Untouched sections keep their defaults
        assert_eq!(config.payroll.overtime_premium, Decimal::new(125, 2));
        assert_eq!(config.attendance.early_grace_minutes, 30);
    }

    #[test]
    fn test_shop_hours_yaml() {
        let yaml = r#"
shop_hours:
  monday:
    open: "09:00:00"
    close: "18:00:00"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        let monday = config.shop_hours.for_weekday(Weekday::Mon).unwrap();
        assert_eq!(monday.open, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(monday.close, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        // Days omitted from the file keep the default hours
        let tuesday = config.shop_hours.for_weekday(Weekday::Tue).unwrap();
        assert_eq!(tuesday.open, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert!(config.shop_hours.for_weekday(Weekday::Sun).is_none());
    }

    #[test]
    fn test_withholding_policy_yaml_names() {
        let yaml = r#"
payroll:
  withholding: monthly_table
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.payroll.withholding, WithholdingPolicy::MonthlyTable);
    }
}
