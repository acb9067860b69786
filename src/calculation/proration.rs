//! Base salary proration.

use rust_decimal::Decimal;

/// The result of prorating a base salary over the working days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProratedBase {
    /// Base salary divided by the days in the month.
    pub daily_rate: Decimal,
    /// The prorated base salary amount.
    pub amount: Decimal,
}

/// Prorates the base salary over the working days of the month.
///
/// The prorated amount is computed as `base * working_days / days_in_month`,
/// multiplying before dividing so that a full month with no leave reproduces
/// the base salary exactly for any month length. Dividing first would round
/// the daily rate and reintroduce penny drift (e.g. `30000 / 31 * 31`).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorate_base_salary;
/// use rust_decimal::Decimal;
///
/// let prorated = prorate_base_salary(Decimal::new(30000, 0), Decimal::new(16, 0), 30);
/// assert_eq!(prorated.daily_rate, Decimal::new(1000, 0));
/// assert_eq!(prorated.amount, Decimal::new(16000, 0));
/// ```
pub fn prorate_base_salary(
    base_salary: Decimal,
    working_days: Decimal,
    days_in_month: u32,
) -> ProratedBase {
    let total_days = Decimal::from(days_in_month);
    let daily_rate = base_salary / total_days;
    let amount = if working_days == total_days {
        base_salary
    } else {
        base_salary * working_days / total_days
    };
    ProratedBase { daily_rate, amount }
}
