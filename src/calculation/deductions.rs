//! Deduction aggregation.
//!
//! Builds the itemized [`DeductionBreakdown`] from the caller-supplied fixed
//! line items and the installment lists retrieved from the loan and advance
//! ledgers. Installment amounts are summed verbatim; the engine never
//! adjusts them.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{DeductionBreakdown, DeductionLineItems, ObligationInstallment};

/// Aggregates all deductions into an itemized breakdown.
///
/// Fixed deductions, loan installments, and advance installments are summed
/// independently; the itemized installment lists are carried into the
/// breakdown for auditability.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidInput`] if any fixed line item or
/// installment amount is negative.
pub fn aggregate_deductions(
    fixed: &DeductionLineItems,
    loan_installments: &[ObligationInstallment],
    advance_installments: &[ObligationInstallment],
) -> PayrollResult<DeductionBreakdown> {
    fixed.validate()?;
    let loan_total = sum_installments("loan_installments", loan_installments)?;
    let advance_total = sum_installments("advance_installments", advance_installments)?;

    Ok(DeductionBreakdown {
        tax_deduction: fixed.tax_deduction,
        income_tax: fixed.income_tax,
        insurance_deduction: fixed.insurance_deduction,
        provident_fund: fixed.provident_fund,
        professional_tax: fixed.professional_tax,
        esi_deduction: fixed.esi_deduction,
        other_deductions: fixed.other_deductions,
        fixed_total: fixed.total(),
        loan_installments: loan_installments.to_vec(),
        loan_total,
        advance_installments: advance_installments.to_vec(),
        advance_total,
    })
}

fn sum_installments(field: &str, installments: &[ObligationInstallment]) -> PayrollResult<Decimal> {
    let mut total = Decimal::ZERO;
    for (index, installment) in installments.iter().enumerate() {
        if installment.amount < Decimal::ZERO {
            return Err(PayrollError::InvalidInput {
                field: format!("{}[{}].amount", field, index),
                message: format!(
                    "installment for obligation '{}' must not be negative",
                    installment.obligation_id
                ),
            });
        }
        total += installment.amount;
    }
    Ok(total)
}
