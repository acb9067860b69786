//! Error types for the payroll computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a salary computation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll computation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidInput {
///     field: "base_salary".to_string(),
///     message: "must be greater than 0".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input field 'base_salary': must be greater than 0");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An input value was malformed or out of range.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The pay period did not resolve to a valid calendar month.
    #[error("Invalid pay period: {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (1-12 when valid).
        month: u32,
    },

    /// The computed working days were zero or negative.
    ///
    /// A zero-day payment is almost always a caller mistake (termination
    /// before hire, or leave days exceeding the employed window), so the
    /// engine refuses to produce a result instead of returning zero pay.
    #[error("Zero working days: {employed_days} employed days minus {leave_days} leave days")]
    ZeroWorkingDays {
        /// Calendar days the employee was employed within the period.
        employed_days: u32,
        /// Leave days subtracted from the employed window.
        leave_days: Decimal,
    },

    /// The employee was not found by the employee directory.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        employee_id: String,
    },

    /// A collaborator ledger query failed.
    ///
    /// A failed obligation lookup aborts the whole computation; treating it
    /// as "no deduction" would overpay.
    #[error("Ledger '{ledger}' query failed: {message}")]
    LedgerUnavailable {
        /// The ledger that failed (e.g., "loan", "advance").
        ledger: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = PayrollError::InvalidInput {
            field: "overtime_pay".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'overtime_pay': must not be negative"
        );
    }

    #[test]
    fn test_invalid_period_displays_zero_padded_month() {
        let error = PayrollError::InvalidPeriod {
            year: 2026,
            month: 3,
        };
        assert_eq!(error.to_string(), "Invalid pay period: 2026-03");
    }

    #[test]
    fn test_zero_working_days_displays_counts() {
        let error = PayrollError::ZeroWorkingDays {
            employed_days: 30,
            leave_days: Decimal::from_str("30").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Zero working days: 30 employed days minus 30 leave days"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = PayrollError::EmployeeNotFound {
            employee_id: "emp_042".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: emp_042");
    }

    #[test]
    fn test_ledger_unavailable_displays_ledger_and_message() {
        let error = PayrollError::LedgerUnavailable {
            ledger: "loan".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Ledger 'loan' query failed: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::EmployeeNotFound {
                employee_id: "missing".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
