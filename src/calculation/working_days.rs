//! Working-day accounting.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::AttendanceAdjustment;

use super::effective_window::EffectiveWindow;

/// Computes the working days for a pay period.
///
/// `working_days = (effective_end_day - effective_start_day + 1) -
/// leave_days_total`, clamped to zero. A result of zero is a hard error: a
/// payment with no worked time is almost always a caller mistake, and the
/// engine must not record it silently.
///
/// # Errors
///
/// Returns [`PayrollError::ZeroWorkingDays`] when the leave days consume the
/// entire employed window, or the window itself is empty.
pub fn calculate_working_days(
    window: &EffectiveWindow,
    attendance: &AttendanceAdjustment,
) -> PayrollResult<Decimal> {
    let employed = Decimal::from(window.employed_days);
    let working = (employed - attendance.leave_days_total).max(Decimal::ZERO);

    if working <= Decimal::ZERO {
        return Err(PayrollError::ZeroWorkingDays {
            employed_days: window.employed_days,
            leave_days: attendance.leave_days_total,
        });
    }
    Ok(working)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn window(employed_days: u32) -> EffectiveWindow {
        EffectiveWindow {
            start_day: 1,
            end_day: employed_days,
            is_prorated: false,
            reason: None,
            employed_days,
        }
    }

    fn leave(days: &str) -> AttendanceAdjustment {
        AttendanceAdjustment {
            leave_days_total: dec(days),
            paid_leave_days: Decimal::ZERO,
            unpaid_leave_days: dec(days),
        }
    }

    #[test]
    fn test_no_leave_gives_full_window() {
        let result = calculate_working_days(&window(30), &AttendanceAdjustment::default());
        assert_eq!(result.unwrap(), dec("30"));
    }

    #[test]
    fn test_leave_subtracted_from_window() {
        let result = calculate_working_days(&window(30), &leave("4"));
        assert_eq!(result.unwrap(), dec("26"));
    }

    #[test]
    fn test_half_day_leave_gives_fractional_working_days() {
        let result = calculate_working_days(&window(30), &leave("2.5"));
        assert_eq!(result.unwrap(), dec("27.5"));
    }

    #[test]
    fn test_leave_consuming_full_window_fails() {
        let result = calculate_working_days(&window(30), &leave("30"));
        match result.unwrap_err() {
            PayrollError::ZeroWorkingDays {
                employed_days,
                leave_days,
            } => {
                assert_eq!(employed_days, 30);
                assert_eq!(leave_days, dec("30"));
            }
            other => panic!("Expected ZeroWorkingDays, got {:?}", other),
        }
    }

    #[test]
    fn test_leave_exceeding_window_fails_without_going_negative() {
        let result = calculate_working_days(&window(10), &leave("15"));
        assert!(matches!(result, Err(PayrollError::ZeroWorkingDays { .. })));
    }

    #[test]
    fn test_empty_window_fails() {
        let result = calculate_working_days(&window(0), &AttendanceAdjustment::default());
        assert!(matches!(
            result,
            Err(PayrollError::ZeroWorkingDays {
                employed_days: 0,
                ..
            })
        ));
    }
}
