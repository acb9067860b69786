//! Collaborator contracts consumed by the payroll engine.
//!
//! The engine itself is a pure computation; the employee directory, the
//! loan/advance ledgers, and the result sink live behind the traits in this
//! module so the calculator can be exercised without a network or database.
//! In-memory implementations suitable for tests and the demo API are
//! provided in [`memory`].

mod memory;

pub use memory::{
    InMemoryEmployeeDirectory, InMemoryInstallmentLedger, InMemoryResultSink, LedgerObligation,
    RecordedPayment, TransactionEntry,
};

use uuid::Uuid;

use crate::error::PayrollResult;
use crate::models::{
    CompensationProfile, EmploymentWindow, ObligationInstallment, PayPeriod,
    SalaryComputationResult,
};

/// Identifier assigned by a result sink when a payment is recorded.
pub type PersistedId = Uuid;

/// Provides compensation and employment data for employees.
///
/// Implementations fail with
/// [`PayrollError::EmployeeNotFound`](crate::error::PayrollError::EmployeeNotFound)
/// when the employee does not exist.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns an immutable snapshot of the employee's compensation profile.
    fn compensation_profile(&self, employee_id: &str) -> PayrollResult<CompensationProfile>;

    /// Returns the employee's employment window.
    fn employment_window(&self, employee_id: &str) -> PayrollResult<EmploymentWindow>;
}

/// Exposes outstanding installment obligations per employee and period.
///
/// One trait serves both the loan ledger and the advance ledger; each
/// returned amount is the lesser of the scheduled installment and the
/// obligation's remaining balance. The ledger must guarantee that the
/// amounts are final and not double-countable for this invocation; the
/// engine sums them verbatim.
pub trait InstallmentLedger: Send + Sync {
    /// Lists the installments due from the employee for the pay period.
    fn due_installments(
        &self,
        employee_id: &str,
        period: PayPeriod,
    ) -> PayrollResult<Vec<ObligationInstallment>>;
}

/// Persists computed salary results and mirrors them into a transaction
/// ledger for reporting.
///
/// The engine never calls this itself; the caller invokes it after
/// [`compute_salary`](crate::calculation::compute_salary) returns
/// successfully. Recorded results are immutable; a correction is a new
/// computation, optionally after deleting the prior record.
pub trait ResultSink: Send + Sync {
    /// Records a computed salary payment, returning its persisted id.
    fn record_salary_payment(
        &self,
        employee_id: &str,
        period: PayPeriod,
        result: &SalaryComputationResult,
    ) -> PayrollResult<PersistedId>;
}
