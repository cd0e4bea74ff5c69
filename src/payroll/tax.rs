//! Progressive withholding tax.
//!
//! One bracket-table function serves both withholding policies. The table
//! edges are annual: 0% to 250,000, then marginal rates of 15%, 20%, 25%,
//! 30% and 35%, each bracket charged as the prior bracket's base amount
//! plus the marginal rate on the excess over the bracket floor.

use rust_decimal::Decimal;

use crate::config::WithholdingPolicy;

use super::rates::round_money;

/// Annual tax brackets: (floor, base amount at the floor, marginal rate).
const TAX_BRACKETS: &[(i64, i64, &str)] = &[
    (0, 0, "0"),
    (250_000, 0, "0.15"),
    (400_000, 22_500, "0.20"),
    (800_000, 102_500, "0.25"),
    (2_000_000, 402_500, "0.30"),
    (8_000_000, 2_202_500, "0.35"),
];

/// Applies the progressive bracket table to a taxable amount.
///
/// `scale` divides every bracket edge and base amount, which is how the
/// same table serves both annual amounts (`scale` = 1) and monthly amounts
/// (`scale` = 12). Negative taxable amounts yield zero.
fn bracket_tax(taxable: Decimal, scale: Decimal) -> Decimal {
    if taxable <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let mut tax = Decimal::ZERO;
    for (floor, base, rate) in TAX_BRACKETS {
        let floor = Decimal::from(*floor) / scale;
        if taxable > floor {
            let rate: Decimal = rate.parse().expect("valid bracket rate");
            tax = Decimal::from(*base) / scale + rate * (taxable - floor);
        }
    }
    tax
}

/// Computes the annual tax for an annual taxable income.
pub fn annual_tax(annual_taxable: Decimal) -> Decimal {
    bracket_tax(annual_taxable, Decimal::ONE)
}

/// Computes the monthly withholding for a monthly taxable income under the
/// selected policy.
///
/// `Annualized` multiplies the monthly taxable income by 12, applies the
/// annual table and divides the annual tax by 12. `MonthlyTable` applies
/// the table with every edge divided by 12 directly. Both are exposed
/// because the two appear at different call sites in practice; they agree
/// whenever the annualized income is exactly 12 times the monthly income.
///
/// # Example
///
/// ```
/// use shop_hr_engine::payroll::monthly_withholding;
/// use shop_hr_engine::config::WithholdingPolicy;
/// use rust_decimal::Decimal;
///
/// // 20,833.33/month annualizes just inside the 0% bracket
/// let tax = monthly_withholding(Decimal::new(2083333, 2), WithholdingPolicy::Annualized);
/// assert_eq!(tax, Decimal::ZERO);
/// ```
pub fn monthly_withholding(monthly_taxable: Decimal, policy: WithholdingPolicy) -> Decimal {
    let twelve = Decimal::from(12);
    let tax = match policy {
        WithholdingPolicy::Annualized => annual_tax(monthly_taxable * twelve) / twelve,
        WithholdingPolicy::MonthlyTable => bracket_tax(monthly_taxable, twelve),
    };
    round_money(tax)
}
