//! The salary computation orchestrator.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{
    AttendanceAdjustment, CompensationProfile, DeductionLineItems, EarningsLineItems,
    EmploymentWindow, ObligationInstallment, PayPeriod, SalaryComputationResult,
};

use super::deductions::aggregate_deductions;
use super::effective_window::determine_effective_window;
use super::proration::prorate_base_salary;
use super::working_days::calculate_working_days;

/// Computes a fully itemized salary for one employee and one pay period.
///
/// This is a pure function with no hidden state: two calls with identical
/// inputs (including identical ledger snapshots) return identical results.
/// Persisting the result, and mirroring it into a financial transaction
/// ledger, is the caller's responsibility.
///
/// The computation:
/// 1. validates every input (offending field named on failure),
/// 2. determines the effective employment window within the month,
/// 3. derives working days, failing hard when they reach zero,
/// 4. prorates the base salary over the working days,
/// 5. sums allowances and earnings add-ons into the gross salary,
/// 6. aggregates fixed, loan, and advance deductions with an itemized
///    breakdown,
/// 7. derives the net salary. A negative net is surfaced via the
///    `negative_net_pay` flag, never clamped; whether to block, zero, or
///    allow it is the caller's policy.
///
/// # Errors
///
/// * [`PayrollError::InvalidInput`] for negative or inconsistent inputs.
/// * [`PayrollError::ZeroWorkingDays`] when no working time remains.
///
/// [`PayrollError::InvalidInput`]: crate::error::PayrollError::InvalidInput
/// [`PayrollError::ZeroWorkingDays`]: crate::error::PayrollError::ZeroWorkingDays
#[allow(clippy::too_many_arguments)]
pub fn compute_salary(
    profile: &CompensationProfile,
    period: PayPeriod,
    attendance: &AttendanceAdjustment,
    employment_window: &EmploymentWindow,
    earnings: &EarningsLineItems,
    deductions: &DeductionLineItems,
    loan_installments: &[ObligationInstallment],
    advance_installments: &[ObligationInstallment],
) -> PayrollResult<SalaryComputationResult> {
    let total_days_in_month = period.days_in_month();

    profile.validate()?;
    attendance.validate(total_days_in_month)?;
    earnings.validate()?;
    let breakdown = aggregate_deductions(deductions, loan_installments, advance_installments)?;

    let window = determine_effective_window(employment_window, period);
    let working_days = calculate_working_days(&window, attendance)?;
    let prorated = prorate_base_salary(profile.base_salary, working_days, total_days_in_month);

    let total_allowances = profile.allowances.total();
    let total_earnings_add_ons = earnings.add_ons_total();
    let gross_salary = prorated.amount + total_allowances + total_earnings_add_ons;

    let total_deductions = breakdown.grand_total();
    let net_salary = gross_salary - total_deductions;

    Ok(SalaryComputationResult {
        currency: profile.currency.clone(),
        base_salary: profile.base_salary,
        daily_rate: prorated.daily_rate,
        base_salary_prorated: prorated.amount,
        total_allowances,
        total_earnings_add_ons,
        gross_salary,
        deductions: breakdown,
        total_deductions,
        negative_net_pay: net_salary < Decimal::ZERO,
        net_salary,
        working_days,
        total_days_in_month,
        effective_start_day: window.start_day,
        effective_end_day: window.end_day,
        is_prorated: window.is_prorated,
        proration_reason: window.reason,
    })
}

/// Computes a salary breakdown without committing to anything.
///
/// Identical to [`compute_salary`]; "preview" is a naming convention for a
/// caller that inspects the breakdown and chooses not to persist it. The
/// computation itself is already side-effect-free.
#[allow(clippy::too_many_arguments)]
pub fn preview_salary(
    profile: &CompensationProfile,
    period: PayPeriod,
    attendance: &AttendanceAdjustment,
    employment_window: &EmploymentWindow,
    earnings: &EarningsLineItems,
    deductions: &DeductionLineItems,
    loan_installments: &[ObligationInstallment],
    advance_installments: &[ObligationInstallment],
) -> PayrollResult<SalaryComputationResult> {
    compute_salary(
        profile,
        period,
        attendance,
        employment_window,
        earnings,
        deductions,
        loan_installments,
        advance_installments,
    )
}
