//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structure shared by the
//! `/salaries` and `/salaries/preview` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::{
    AllowanceBreakdown, AttendanceAdjustment, CompensationProfile, DeductionLineItems,
    EarningsLineItems, EmploymentWindow, ObligationInstallment, PayPeriod,
};

/// Request body for the salary computation endpoints.
///
/// Attendance, earnings, deductions, and installment lists all default to
/// empty/zero when omitted; the engine validates them once at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryComputationRequest {
    /// The employee the computation is for.
    pub employee_id: String,
    /// The employee's compensation profile snapshot.
    pub profile: CompensationProfileRequest,
    /// The pay period (calendar month).
    pub period: PayPeriodRequest,
    /// The employee's employment window.
    pub employment: EmploymentWindowRequest,
    /// Leave taken during the period.
    #[serde(default)]
    pub attendance: AttendanceAdjustment,
    /// Earnings add-on line items.
    #[serde(default)]
    pub earnings: EarningsLineItems,
    /// Fixed deduction line items.
    #[serde(default)]
    pub deductions: DeductionLineItems,
    /// Loan installments due this period, from the loan ledger.
    #[serde(default)]
    pub loan_installments: Vec<ObligationInstallment>,
    /// Advance installments due this period, from the advance ledger.
    #[serde(default)]
    pub advance_installments: Vec<ObligationInstallment>,
}

/// Compensation profile information in a computation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationProfileRequest {
    /// The base monthly salary.
    pub base_salary: Decimal,
    /// Fixed monthly allowance sub-amounts.
    #[serde(default)]
    pub allowances: AllowanceBreakdown,
    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "PKR".to_string()
}

/// Pay period information in a computation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The year of the pay period.
    pub year: i32,
    /// The month of the pay period (1-12).
    pub month: u32,
}

/// Employment window information in a computation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmploymentWindowRequest {
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date employment was terminated, if any.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// The date a fixed-term contract ends, if any.
    #[serde(default)]
    pub contract_end_date: Option<NaiveDate>,
}

impl From<CompensationProfileRequest> for CompensationProfile {
    fn from(req: CompensationProfileRequest) -> Self {
        CompensationProfile {
            base_salary: req.base_salary,
            allowances: req.allowances,
            currency: req.currency,
        }
    }
}

impl TryFrom<PayPeriodRequest> for PayPeriod {
    type Error = PayrollError;

    fn try_from(req: PayPeriodRequest) -> Result<Self, Self::Error> {
        PayPeriod::new(req.year, req.month)
    }
}

impl From<EmploymentWindowRequest> for EmploymentWindow {
    fn from(req: EmploymentWindowRequest) -> Self {
        EmploymentWindow {
            hire_date: req.hire_date,
            termination_date: req.termination_date,
            contract_end_date: req.contract_end_date,
        }
    }
}
