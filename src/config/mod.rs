//! Engine configuration: shop hours, timing policy and payroll knobs.
//!
//! Configuration is loaded from a YAML file (see `config/default.yaml`) or
//! built from [`EngineConfig::default`]. Every section falls back to its
//! default when omitted.

mod loader;
mod types;

pub use types::{
    AttendancePolicy, DayHours, EngineConfig, PayrollPolicy, ShopHours, WithholdingPolicy,
};
