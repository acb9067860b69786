//! Employment window model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The span of an employee's employment, used to decide proration.
///
/// The window ends at the earlier of the termination date and the contract
/// end date when either is present; an open-ended window covers every pay
/// period on or after the hire date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmploymentWindow;
/// use chrono::NaiveDate;
///
/// let window = EmploymentWindow {
///     hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     termination_date: None,
///     contract_end_date: Some(NaiveDate::from_ymd_opt(2026, 6, 20).unwrap()),
/// };
/// assert_eq!(
///     window.end_of_employment(),
///     Some(NaiveDate::from_ymd_opt(2026, 6, 20).unwrap())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentWindow {
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date employment was terminated, if any.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// The date a fixed-term contract ends, if any.
    #[serde(default)]
    pub contract_end_date: Option<NaiveDate>,
}

impl EmploymentWindow {
    /// Returns the effective last day of employment, if one is set.
    ///
    /// When both a termination date and a contract end date exist, the
    /// earlier of the two applies.
    pub fn end_of_employment(&self) -> Option<NaiveDate> {
        match (self.termination_date, self.contract_end_date) {
            (Some(t), Some(c)) => Some(t.min(c)),
            (Some(t), None) => Some(t),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        }
    }
}
