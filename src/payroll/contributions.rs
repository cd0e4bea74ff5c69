//! Statutory contribution schedules.
//!
//! Three independent schedules are computed from the monthly base salary
//! (not gross): a stepped social security table, a health insurance premium
//! as a rate on the clamped salary, and a housing fund contribution with a
//! fixed cap. The social security table is data, not a formula: the band
//! boundaries and amounts below reproduce the published schedule.

use rust_decimal::Decimal;

use super::rates::round_money;

/// Social security bands: inclusive salary floor in whole pesos paired with
/// the fixed monthly employee contribution in centavos. Bands step by 500;
/// the last band is the ceiling, applied to every salary at or above it.
const SSS_BANDS: &[(i64, i64)] = &[
    (3250, 15750), (3750, 18000), (4250, 20250), (4750, 22500),
    (5250, 24750), (5750, 27000), (6250, 29250), (6750, 31500),
    (7250, 33750), (7750, 36000), (8250, 38250), (8750, 40500),
    (9250, 42750), (9750, 45000), (10250, 47250), (10750, 49500),
    (11250, 51750), (11750, 54000), (12250, 56250), (12750, 58500),
    (13250, 60750), (13750, 63000), (14250, 65250), (14750, 67500),
    (15250, 69750), (15750, 72000), (16250, 74250), (16750, 76500),
    (17250, 78750), (17750, 81000), (18250, 83250), (18750, 85500),
    (19250, 87750), (19750, 90000), (20250, 92250), (20750, 94500),
    (21250, 96750), (21750, 99000), (22250, 101250), (22750, 103500),
    (23250, 105750), (23750, 108000), (24250, 110250), (24750, 112500),
    (25250, 114750), (25750, 117000), (26250, 119250), (26750, 121500),
    (27250, 123750), (27750, 126000), (28250, 128250), (28750, 130500),
    (29250, 132750), (29750, 135000),
];

/// Contribution below the bottom band, in centavos.
const SSS_FLOOR_CENTS: i64 = 13500;

/// Health insurance premium rate applied to the clamped salary.
const PHILHEALTH_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Salary floor for the health insurance premium.
const PHILHEALTH_SALARY_FLOOR: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// Salary ceiling for the health insurance premium.
const PHILHEALTH_SALARY_CEILING: Decimal = Decimal::from_parts(100000, 0, 0, false, 0);

/// Housing fund rate for salaries at or below 1500.
const PAGIBIG_LOW_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Housing fund rate for salaries above 1500.
const PAGIBIG_HIGH_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Salary threshold separating the two housing fund rates.
const PAGIBIG_THRESHOLD: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// Maximum monthly housing fund contribution.
const PAGIBIG_CAP: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Looks up the social security contribution for a monthly base salary.
///
/// Monotonically non-decreasing in the salary: below the bottom band the
/// floor amount applies, and every salary at or above the top band pays the
/// ceiling amount (1,350.00 from 29,750 up).
///
/// # Example
///
/// ```
/// use shop_hr_engine::payroll::sss_contribution;
/// use rust_decimal::Decimal;
///
/// assert_eq!(sss_contribution(Decimal::new(20000, 0)), Decimal::new(90000, 2));
/// assert_eq!(sss_contribution(Decimal::new(50000, 0)), Decimal::new(135000, 2));
/// ```
pub fn sss_contribution(base_salary: Decimal) -> Decimal {
    let amount_cents = SSS_BANDS
        .iter()
        .rev()
        .find(|(floor, _)| base_salary >= Decimal::from(*floor))
        .map(|(_, cents)| *cents)
        .unwrap_or(SSS_FLOOR_CENTS);
    Decimal::new(amount_cents, 2)
}

/// Computes the health insurance contribution: 2.5% of the base salary
/// clamped to the 10,000–100,000 range.
pub fn philhealth_contribution(base_salary: Decimal) -> Decimal {
    let clamped = base_salary
        .max(PHILHEALTH_SALARY_FLOOR)
        .min(PHILHEALTH_SALARY_CEILING);
    round_money(clamped * PHILHEALTH_RATE)
}

/// Computes the housing fund contribution: 1% of the base salary at or
/// below 1,500, otherwise 2% capped at 100.
pub fn pagibig_contribution(base_salary: Decimal) -> Decimal {
    let contribution = if base_salary <= PAGIBIG_THRESHOLD {
        base_salary * PAGIBIG_LOW_RATE
    } else {
        (base_salary * PAGIBIG_HIGH_RATE).min(PAGIBIG_CAP)
    };
    round_money(contribution)
}
