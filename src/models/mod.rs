//! Data models for the payroll computation engine.

mod attendance;
mod compensation;
mod computation_result;
mod employment;
mod line_items;
mod obligation;
mod pay_period;

pub use attendance::AttendanceAdjustment;
pub use compensation::{AllowanceBreakdown, CompensationProfile};
pub use computation_result::{DeductionBreakdown, SalaryComputationResult};
pub use employment::EmploymentWindow;
pub use line_items::{DeductionLineItems, EarningsLineItems};
pub use obligation::ObligationInstallment;
pub use pay_period::PayPeriod;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Rejects negative amounts, naming the offending field.
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO {
        return Err(PayrollError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}
