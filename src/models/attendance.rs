//! Attendance and leave adjustment model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::ensure_non_negative;

/// Leave taken during the pay period.
///
/// Leave days are decimals so half-day leave can be recorded. The total
/// leave is subtracted from the employed window to produce working days;
/// the paid/unpaid split is carried through to the result for reporting.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceAdjustment;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceAdjustment {
///     leave_days_total: Decimal::new(35, 1), // 3.5 days
///     paid_leave_days: Decimal::new(2, 0),
///     unpaid_leave_days: Decimal::new(15, 1),
/// };
/// assert!(attendance.validate(30).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceAdjustment {
    /// Total leave days taken in the period.
    #[serde(default)]
    pub leave_days_total: Decimal,
    /// Leave days that remain paid.
    #[serde(default)]
    pub paid_leave_days: Decimal,
    /// Leave days without pay.
    #[serde(default)]
    pub unpaid_leave_days: Decimal,
}

impl AttendanceAdjustment {
    /// Validates the leave counts against the period length.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] if any count is negative, the
    /// unpaid (or paid + unpaid) leave exceeds the total, or the total
    /// exceeds the number of days in the month.
    pub fn validate(&self, days_in_month: u32) -> PayrollResult<()> {
        ensure_non_negative("leave_days_total", self.leave_days_total)?;
        ensure_non_negative("paid_leave_days", self.paid_leave_days)?;
        ensure_non_negative("unpaid_leave_days", self.unpaid_leave_days)?;

        if self.unpaid_leave_days > self.leave_days_total {
            return Err(PayrollError::InvalidInput {
                field: "unpaid_leave_days".to_string(),
                message: "must not exceed leave_days_total".to_string(),
            });
        }
        if self.paid_leave_days + self.unpaid_leave_days > self.leave_days_total {
            return Err(PayrollError::InvalidInput {
                field: "paid_leave_days".to_string(),
                message: "paid and unpaid leave together must not exceed leave_days_total"
                    .to_string(),
            });
        }
        if self.leave_days_total > Decimal::from(days_in_month) {
            return Err(PayrollError::InvalidInput {
                field: "leave_days_total".to_string(),
                message: format!("must not exceed the {} days in the month", days_in_month),
            });
        }
        Ok(())
    }
}
