//! Caller-supplied earnings and deduction line items.
//!
//! Every line item is an independent non-negative decimal with a defined
//! default of zero, validated once at the boundary of the computation rather
//! than guarded at each use site.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;

use super::ensure_non_negative;

/// Earnings add-ons contributed by the caller.
///
/// These amounts are not derived by the engine; overtime pay, for example,
/// is supplied directly while `overtime_hours` is carried through for the
/// salary slip only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsLineItems {
    /// Overtime hours worked (informational, not summed into pay).
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Pay for overtime hours.
    #[serde(default)]
    pub overtime_pay: Decimal,
    /// One-off bonus.
    #[serde(default)]
    pub bonus: Decimal,
    /// Performance bonus.
    #[serde(default)]
    pub performance_bonus: Decimal,
    /// Incentive payment.
    #[serde(default)]
    pub incentive: Decimal,
    /// Arrears from prior periods.
    #[serde(default)]
    pub arrears: Decimal,
    /// Amount from a salary revision taking effect this period.
    #[serde(default)]
    pub salary_revision_amount: Decimal,
}

impl EarningsLineItems {
    /// Sums the monetary add-ons (everything except `overtime_hours`).
    pub fn add_ons_total(&self) -> Decimal {
        self.overtime_pay
            + self.bonus
            + self.performance_bonus
            + self.incentive
            + self.arrears
            + self.salary_revision_amount
    }

    /// Validates that every line item is non-negative.
    pub fn validate(&self) -> PayrollResult<()> {
        ensure_non_negative("overtime_hours", self.overtime_hours)?;
        ensure_non_negative("overtime_pay", self.overtime_pay)?;
        ensure_non_negative("bonus", self.bonus)?;
        ensure_non_negative("performance_bonus", self.performance_bonus)?;
        ensure_non_negative("incentive", self.incentive)?;
        ensure_non_negative("arrears", self.arrears)?;
        ensure_non_negative("salary_revision_amount", self.salary_revision_amount)?;
        Ok(())
    }
}

/// Fixed deductions contributed by the caller.
///
/// Professional tax and provident fund are caller-supplied like every other
/// line item; the engine applies no auto-calculation rule for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLineItems {
    /// General tax deduction.
    #[serde(default)]
    pub tax_deduction: Decimal,
    /// Income tax withheld.
    #[serde(default)]
    pub income_tax: Decimal,
    /// Insurance premium deduction.
    #[serde(default)]
    pub insurance_deduction: Decimal,
    /// Provident fund contribution.
    #[serde(default)]
    pub provident_fund: Decimal,
    /// Professional tax.
    #[serde(default)]
    pub professional_tax: Decimal,
    /// Employee state insurance deduction.
    #[serde(default)]
    pub esi_deduction: Decimal,
    /// Other deductions not covered by a named category.
    #[serde(default)]
    pub other_deductions: Decimal,
}

impl DeductionLineItems {
    /// Sums all fixed deduction line items.
    pub fn total(&self) -> Decimal {
        self.tax_deduction
            + self.income_tax
            + self.insurance_deduction
            + self.provident_fund
            + self.professional_tax
            + self.esi_deduction
            + self.other_deductions
    }

    /// Validates that every line item is non-negative.
    pub fn validate(&self) -> PayrollResult<()> {
        ensure_non_negative("tax_deduction", self.tax_deduction)?;
        ensure_non_negative("income_tax", self.income_tax)?;
        ensure_non_negative("insurance_deduction", self.insurance_deduction)?;
        ensure_non_negative("provident_fund", self.provident_fund)?;
        ensure_non_negative("professional_tax", self.professional_tax)?;
        ensure_non_negative("esi_deduction", self.esi_deduction)?;
        ensure_non_negative("other_deductions", self.other_deductions)?;
        Ok(())
    }
}
