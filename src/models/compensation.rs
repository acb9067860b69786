//! Compensation profile and allowance models.
//!
//! The compensation profile is an immutable snapshot of an employee's base
//! pay and fixed allowances, taken from the employee directory at
//! calculation time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::ensure_non_negative;

/// Fixed monthly allowance sub-amounts.
///
/// Every field defaults to zero so callers only supply the allowances that
/// apply. All amounts must be non-negative.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AllowanceBreakdown;
/// use rust_decimal::Decimal;
///
/// let allowances = AllowanceBreakdown {
///     housing: Decimal::new(5000, 0),
///     transport: Decimal::new(1500, 0),
///     ..Default::default()
/// };
/// assert_eq!(allowances.total(), Decimal::new(6500, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// General allowance not covered by a named category.
    #[serde(default)]
    pub general: Decimal,
    /// Housing allowance.
    #[serde(default)]
    pub housing: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport: Decimal,
    /// Medical allowance.
    #[serde(default)]
    pub medical: Decimal,
    /// Food allowance.
    #[serde(default)]
    pub food: Decimal,
    /// Other allowances.
    #[serde(default)]
    pub other: Decimal,
}

impl AllowanceBreakdown {
    /// Sums all six allowance sub-amounts.
    pub fn total(&self) -> Decimal {
        self.general + self.housing + self.transport + self.medical + self.food + self.other
    }

    /// Validates that every sub-amount is non-negative.
    pub fn validate(&self) -> PayrollResult<()> {
        ensure_non_negative("allowances.general", self.general)?;
        ensure_non_negative("allowances.housing", self.housing)?;
        ensure_non_negative("allowances.transport", self.transport)?;
        ensure_non_negative("allowances.medical", self.medical)?;
        ensure_non_negative("allowances.food", self.food)?;
        ensure_non_negative("allowances.other", self.other)?;
        Ok(())
    }
}

/// An employee's compensation profile.
///
/// Owned by the employee directory; the engine treats it as an immutable
/// snapshot for the duration of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// The base monthly salary. Must be greater than zero.
    pub base_salary: Decimal,
    /// Fixed monthly allowance sub-amounts.
    #[serde(default)]
    pub allowances: AllowanceBreakdown,
    /// ISO 4217 currency code (e.g., "PKR", "USD").
    pub currency: String,
}

impl CompensationProfile {
    /// Validates the profile before a computation.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] if the base salary is not
    /// strictly positive or any allowance sub-amount is negative.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.base_salary <= Decimal::ZERO {
            return Err(PayrollError::InvalidInput {
                field: "base_salary".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        self.allowances.validate()
    }
}
