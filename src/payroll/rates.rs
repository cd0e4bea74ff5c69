//! Rate derivation and money rounding.
//!
//! The daily rate is the monthly base salary spread over the period's
//! working days; the hourly rate is the daily rate over an 8-hour day.
//! Rates stay at full precision; rounding happens once per component.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::HOURS_PER_DAY;

/// Rounds a monetary (or hour) amount to 2 decimals, half-up.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Daily and hourly rates for one employee over one pay period.
///
/// Both are kept at full precision so multiplying back by the period's
/// hours reproduces the base salary without cent drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRates {
    /// Base salary divided by the period's working days.
    pub daily_rate: Decimal,
    /// Daily rate divided by 8.
    pub hourly_rate: Decimal,
}

/// Derives the period rates from a monthly base salary.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] when `working_days` is zero.
pub fn period_rates(base_salary: Decimal, working_days: u32) -> EngineResult<PeriodRates> {
    if working_days == 0 {
        return Err(EngineError::InvalidPeriod {
            message: "period has no working days".to_string(),
        });
    }
    let daily_rate = base_salary / Decimal::from(working_days);
    Ok(PeriodRates {
        daily_rate,
        hourly_rate: daily_rate / HOURS_PER_DAY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec("113.635")), dec("113.64"));
        assert_eq!(round_money(dec("113.634")), dec("113.63"));
        assert_eq!(round_money(dec("9")), dec("9.00"));
    }

    #[test]
    fn test_period_rates_for_22_days() {
        let rates = period_rates(dec("20000"), 22).unwrap();
        // Full precision is preserved: rate x 176 hours reproduces the salary
        assert_eq!(round_money(rates.hourly_rate * dec("176")), dec("20000.00"));
        assert_eq!(round_money(rates.daily_rate), dec("909.09"));
    }

    #[test]
    fn test_period_rates_zero_days_rejected() {
        let result = period_rates(dec("20000"), 0);
        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_hourly_is_daily_over_eight() {
        let rates = period_rates(dec("17600"), 22).unwrap();
        assert_eq!(rates.daily_rate, dec("800"));
        assert_eq!(rates.hourly_rate, dec("100"));
    }
}
