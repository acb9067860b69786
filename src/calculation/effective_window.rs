//! Effective employment window determination.
//!
//! Resolves the 1-indexed span of days within a pay period that an employee
//! was actually employed, flagging proration for mid-month hires and
//! terminations.

use crate::models::{EmploymentWindow, PayPeriod};

/// The portion of a pay period an employee was employed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveWindow {
    /// First employed day of the month (1-indexed).
    pub start_day: u32,
    /// Last employed day of the month (1-indexed).
    pub end_day: u32,
    /// Whether the window covers less than the full month.
    pub is_prorated: bool,
    /// Human-readable reason for proration, when applicable.
    pub reason: Option<String>,
    /// Calendar days the employee was employed within the period.
    /// Zero when the window is empty (hired after the period, or
    /// terminated before it).
    pub employed_days: u32,
}

/// Determines the effective employment window within a pay period.
///
/// The window starts at day 1 unless the hire date falls after the first of
/// the month, and ends at the last day unless employment ended before it.
/// An employment end before the hire date, or entirely outside the period,
/// yields an empty window (`employed_days == 0`), which the working-day
/// calculation turns into a hard error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::determine_effective_window;
/// use payroll_engine::models::{EmploymentWindow, PayPeriod};
/// use chrono::NaiveDate;
///
/// let window = EmploymentWindow {
///     hire_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
///     termination_date: None,
///     contract_end_date: None,
/// };
/// let period = PayPeriod::new(2026, 6).unwrap();
/// let effective = determine_effective_window(&window, period);
/// assert_eq!(effective.start_day, 15);
/// assert_eq!(effective.end_day, 30);
/// assert!(effective.is_prorated);
/// ```
pub fn determine_effective_window(window: &EmploymentWindow, period: PayPeriod) -> EffectiveWindow {
    use chrono::Datelike;

    let days_in_month = period.days_in_month();
    let mut start_day = 1u32;
    let mut end_day = days_in_month;
    let mut is_prorated = false;
    let mut reasons: Vec<String> = Vec::new();

    if window.hire_date > period.last_day() {
        // Hired after the period ended; nothing is owed for this month.
        return EffectiveWindow {
            start_day: 1,
            end_day: days_in_month,
            is_prorated: true,
            reason: Some(format!("employee joined on {}", window.hire_date)),
            employed_days: 0,
        };
    }
    if window.hire_date > period.first_day() {
        start_day = window.hire_date.day();
        is_prorated = true;
        reasons.push(format!("employee joined on {}", window.hire_date));
    }

    if let Some(end_date) = window.end_of_employment() {
        if end_date < period.first_day() {
            // Employment ended before the period started.
            return EffectiveWindow {
                start_day,
                end_day,
                is_prorated: true,
                reason: Some(format!("employee left on {}", end_date)),
                employed_days: 0,
            };
        }
        if end_date < period.last_day() {
            end_day = end_date.day();
            is_prorated = true;
            reasons.push(format!("employee left on {}", end_date));
        }
    }

    let employed_days = if end_day >= start_day {
        end_day - start_day + 1
    } else {
        0
    };

    EffectiveWindow {
        start_day,
        end_day,
        is_prorated,
        reason: if reasons.is_empty() {
            None
        } else {
            Some(reasons.join("; "))
        },
        employed_days,
    }
}
