//! Obligation installment model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single loan or advance installment due for a pay period.
///
/// Installments are retrieved verbatim from the loan/advance ledgers; the
/// engine never invents or adjusts an amount. Each amount is the lesser of
/// the scheduled installment and the obligation's remaining balance, a
/// guarantee the ledger provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationInstallment {
    /// Identifier of the loan or advance this installment belongs to.
    pub obligation_id: String,
    /// The amount due this period.
    pub amount: Decimal,
}
