//! In-memory collaborator implementations.
//!
//! These back the integration tests and the demo HTTP surface. A deployment
//! replaces them with implementations over its own storage.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    CompensationProfile, EmploymentWindow, ObligationInstallment, PayPeriod,
    SalaryComputationResult,
};

use super::{EmployeeDirectory, InstallmentLedger, PersistedId, ResultSink};

/// An in-memory employee directory keyed by employee id.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: HashMap<String, (CompensationProfile, EmploymentWindow)>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee record.
    pub fn insert(
        &mut self,
        employee_id: impl Into<String>,
        profile: CompensationProfile,
        window: EmploymentWindow,
    ) {
        self.employees.insert(employee_id.into(), (profile, window));
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn compensation_profile(&self, employee_id: &str) -> PayrollResult<CompensationProfile> {
        self.employees
            .get(employee_id)
            .map(|(profile, _)| profile.clone())
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn employment_window(&self, employee_id: &str) -> PayrollResult<EmploymentWindow> {
        self.employees
            .get(employee_id)
            .map(|(_, window)| *window)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }
}

/// An outstanding obligation tracked by an in-memory ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerObligation {
    /// Identifier of the loan or advance.
    pub obligation_id: String,
    /// The employee owing the obligation.
    pub employee_id: String,
    /// The scheduled installment per pay period.
    pub monthly_installment: Decimal,
    /// The balance still outstanding.
    pub amount_remaining: Decimal,
}

/// An in-memory installment ledger for loans or advances.
///
/// The due amount for an obligation is the lesser of the scheduled
/// installment and the remaining balance; fully repaid obligations produce
/// no installment.
#[derive(Debug, Default)]
pub struct InMemoryInstallmentLedger {
    obligations: Vec<LedgerObligation>,
}

impl InMemoryInstallmentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an obligation to the ledger.
    pub fn add_obligation(&mut self, obligation: LedgerObligation) {
        self.obligations.push(obligation);
    }
}

impl InstallmentLedger for InMemoryInstallmentLedger {
    fn due_installments(
        &self,
        employee_id: &str,
        _period: PayPeriod,
    ) -> PayrollResult<Vec<ObligationInstallment>> {
        Ok(self
            .obligations
            .iter()
            .filter(|o| o.employee_id == employee_id && o.amount_remaining > Decimal::ZERO)
            .map(|o| ObligationInstallment {
                obligation_id: o.obligation_id.clone(),
                amount: o.monthly_installment.min(o.amount_remaining),
            })
            .collect())
    }
}

/// A salary payment recorded by the in-memory sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPayment {
    /// The persisted id assigned at record time.
    pub id: PersistedId,
    /// The employee the payment is for.
    pub employee_id: String,
    /// The pay period the payment covers.
    pub period: PayPeriod,
    /// The immutable computation result.
    pub result: SalaryComputationResult,
}

/// A financial transaction mirrored from a recorded salary payment.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionEntry {
    /// The recorded payment this transaction mirrors.
    pub payment_id: PersistedId,
    /// The employee the payment is for.
    pub employee_id: String,
    /// The net amount paid out.
    pub amount: Decimal,
    /// Human-readable description for reporting.
    pub description: String,
}

/// An in-memory result sink.
///
/// Stores recorded payments and mirrors each into a transaction list, the
/// way a deployment would mirror salary payments into its reporting ledger.
#[derive(Debug, Default)]
pub struct InMemoryResultSink {
    payments: Mutex<Vec<RecordedPayment>>,
    transactions: Mutex<Vec<TransactionEntry>>,
}

impl InMemoryResultSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded payments.
    pub fn payments(&self) -> Vec<RecordedPayment> {
        self.payments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns a snapshot of the mirrored transactions.
    pub fn transactions(&self) -> Vec<TransactionEntry> {
        self.transactions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Deletes a recorded payment and its mirrored transaction.
    ///
    /// Returns `true` when a payment with the given id existed. Deleting is
    /// how a caller corrects a payment: remove the record, then run a new
    /// computation.
    pub fn delete_payment(&self, id: PersistedId) -> bool {
        let mut payments = self
            .payments
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = payments.len();
        payments.retain(|p| p.id != id);
        let removed = payments.len() < before;
        if removed {
            self.transactions
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|t| t.payment_id != id);
        }
        removed
    }
}

impl ResultSink for InMemoryResultSink {
    fn record_salary_payment(
        &self,
        employee_id: &str,
        period: PayPeriod,
        result: &SalaryComputationResult,
    ) -> PayrollResult<PersistedId> {
        let id = Uuid::new_v4();
        self.payments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedPayment {
                id,
                employee_id: employee_id.to_string(),
                period,
                result: result.clone(),
            });
        self.transactions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(TransactionEntry {
                payment_id: id,
                employee_id: employee_id.to_string(),
                amount: result.net_salary,
                description: format!(
                    "Salary payment for {} {}-{:02}",
                    employee_id,
                    period.year(),
                    period.month()
                ),
            });
        Ok(id)
    }
}
