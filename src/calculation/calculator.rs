//! Calculator wired to the collaborator traits.

use std::sync::Arc;

use crate::error::PayrollResult;
use crate::ledger::{EmployeeDirectory, InstallmentLedger};
use crate::models::{
    AttendanceAdjustment, DeductionLineItems, EarningsLineItems, PayPeriod,
    SalaryComputationResult,
};

use super::compute::{compute_salary, preview_salary};

/// A salary calculator with injected collaborators.
///
/// Fetches the compensation profile, employment window, and due installments
/// for an employee, then runs the pure computation. Any collaborator failure
/// aborts the whole computation; a failed obligation lookup is never treated
/// as "no deduction".
pub struct PayrollCalculator {
    directory: Arc<dyn EmployeeDirectory>,
    loan_ledger: Arc<dyn InstallmentLedger>,
    advance_ledger: Arc<dyn InstallmentLedger>,
}

impl PayrollCalculator {
    /// Creates a calculator over the given collaborators.
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        loan_ledger: Arc<dyn InstallmentLedger>,
        advance_ledger: Arc<dyn InstallmentLedger>,
    ) -> Self {
        Self {
            directory,
            loan_ledger,
            advance_ledger,
        }
    }

    /// Computes the salary for an employee, fetching profile, employment
    /// window, and obligations from the collaborators.
    ///
    /// The returned result is not persisted; the caller records it through a
    /// [`ResultSink`](crate::ledger::ResultSink) if it commits the payment.
    pub fn calculate_for_employee(
        &self,
        employee_id: &str,
        period: PayPeriod,
        attendance: &AttendanceAdjustment,
        earnings: &EarningsLineItems,
        deductions: &DeductionLineItems,
    ) -> PayrollResult<SalaryComputationResult> {
        let profile = self.directory.compensation_profile(employee_id)?;
        let window = self.directory.employment_window(employee_id)?;
        let loans = self.loan_ledger.due_installments(employee_id, period)?;
        let advances = self.advance_ledger.due_installments(employee_id, period)?;

        compute_salary(
            &profile,
            period,
            attendance,
            &window,
            earnings,
            deductions,
            &loans,
            &advances,
        )
    }

    /// Previews the salary for an employee without committing to anything.
    ///
    /// Identical to [`calculate_for_employee`](Self::calculate_for_employee);
    /// the computation is already side-effect-free.
    pub fn preview_for_employee(
        &self,
        employee_id: &str,
        period: PayPeriod,
        attendance: &AttendanceAdjustment,
        earnings: &EarningsLineItems,
        deductions: &DeductionLineItems,
    ) -> PayrollResult<SalaryComputationResult> {
        let profile = self.directory.compensation_profile(employee_id)?;
        let window = self.directory.employment_window(employee_id)?;
        let loans = self.loan_ledger.due_installments(employee_id, period)?;
        let advances = self.advance_ledger.due_installments(employee_id, period)?;

        preview_salary(
            &profile,
            period,
            attendance,
            &window,
            earnings,
            deductions,
            &loans,
            &advances,
        )
    }
}
