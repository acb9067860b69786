//! Salary computation result models.
//!
//! This module contains the [`SalaryComputationResult`] type and its
//! [`DeductionBreakdown`] that capture every output of a salary computation:
//! proration, earnings, itemized deductions, and totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ObligationInstallment;

/// Itemized deductions for one salary computation.
///
/// The fixed line items are echoed back by name so the breakdown serializes
/// as a map of named deduction to amount; loan and advance installments are
/// kept as itemized lists for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// General tax deduction.
    pub tax_deduction: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// Insurance premium deduction.
    pub insurance_deduction: Decimal,
    /// Provident fund contribution.
    pub provident_fund: Decimal,
    /// Professional tax.
    pub professional_tax: Decimal,
    /// Employee state insurance deduction.
    pub esi_deduction: Decimal,
    /// Other deductions.
    pub other_deductions: Decimal,
    /// Sum of the fixed deduction line items above.
    pub fixed_total: Decimal,
    /// Loan installments due this period, itemized per obligation.
    pub loan_installments: Vec<ObligationInstallment>,
    /// Sum of the loan installments.
    pub loan_total: Decimal,
    /// Advance installments due this period, itemized per obligation.
    pub advance_installments: Vec<ObligationInstallment>,
    /// Sum of the advance installments.
    pub advance_total: Decimal,
}

impl DeductionBreakdown {
    /// The grand total of all deductions: fixed + loans + advances.
    pub fn grand_total(&self) -> Decimal {
        self.fixed_total + self.loan_total + self.advance_total
    }
}

/// The complete, immutable result of a salary computation.
///
/// Created once per computation and never mutated afterward; a correction
/// requires a new computation, optionally after deleting the prior record.
/// The result carries no clock or random identifier, so two computations
/// with identical inputs produce identical results.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_salary;
/// use payroll_engine::models::{
///     AllowanceBreakdown, AttendanceAdjustment, CompensationProfile, DeductionLineItems,
///     EarningsLineItems, EmploymentWindow, PayPeriod,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     base_salary: Decimal::new(30000, 0),
///     allowances: AllowanceBreakdown::default(),
///     currency: "PKR".to_string(),
/// };
/// let window = EmploymentWindow {
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     termination_date: None,
///     contract_end_date: None,
/// };
/// let result = compute_salary(
///     &profile,
///     PayPeriod::new(2026, 4).unwrap(),
///     &AttendanceAdjustment::default(),
///     &window,
///     &EarningsLineItems::default(),
///     &DeductionLineItems::default(),
///     &[],
///     &[],
/// )
/// .unwrap();
/// assert_eq!(result.net_salary, result.gross_salary - result.total_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComputationResult {
    /// ISO 4217 currency code from the compensation profile.
    pub currency: String,
    /// The unprorated base monthly salary.
    pub base_salary: Decimal,
    /// The daily rate: base salary divided by the days in the month.
    pub daily_rate: Decimal,
    /// Base salary prorated over the working days.
    pub base_salary_prorated: Decimal,
    /// Sum of all allowance sub-amounts.
    pub total_allowances: Decimal,
    /// Sum of the earnings add-on line items.
    pub total_earnings_add_ons: Decimal,
    /// Prorated base + allowances + earnings add-ons.
    pub gross_salary: Decimal,
    /// The itemized deduction breakdown.
    pub deductions: DeductionBreakdown,
    /// Sum of all deductions (fixed + loans + advances).
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions. May be negative; see
    /// [`negative_net_pay`](Self::negative_net_pay).
    pub net_salary: Decimal,
    /// Days the employee was employed and not on leave.
    pub working_days: Decimal,
    /// Calendar days in the pay period's month.
    pub total_days_in_month: u32,
    /// First employed day of the month (1-indexed).
    pub effective_start_day: u32,
    /// Last employed day of the month (1-indexed).
    pub effective_end_day: u32,
    /// Whether the base salary was prorated for a partial month.
    pub is_prorated: bool,
    /// Human-readable reason for proration, when applicable.
    pub proration_reason: Option<String>,
    /// Set when the net salary is negative. The engine never clamps a
    /// negative net; policing it is the caller's policy decision.
    pub negative_net_pay: bool,
}
