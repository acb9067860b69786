//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: a single calendar month that
//! defines the window a salary is computed over.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A calendar month that a salary payment covers.
///
/// A pay period can only be obtained through [`PayPeriod::new`], which
/// rejects months that do not resolve to a real calendar month. Because the
/// first and last day are resolved at construction, the day-count accessors
/// never fail.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(2026, 2).unwrap();
/// assert_eq!(period.days_in_month(), 28);
/// assert!(PayPeriod::new(2026, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPayPeriod", into = "RawPayPeriod")]
pub struct PayPeriod {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

/// Serialized form of a pay period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPayPeriod {
    year: i32,
    month: u32,
}

impl PayPeriod {
    /// Creates a pay period for the given year and month.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidPeriod`] if the year/month combination
    /// does not resolve to a valid calendar month.
    pub fn new(year: i32, month: u32) -> PayrollResult<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PayrollError::InvalidPeriod { year, month })?;
        let last_day = first_day
            .checked_add_months(chrono::Months::new(1))
            .and_then(|d| d.pred_opt())
            .ok_or(PayrollError::InvalidPeriod { year, month })?;
        Ok(Self {
            first_day,
            last_day,
        })
    }

    /// The year this period falls in.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month this period covers (1-12).
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month (inclusive).
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// The number of calendar days in this month (28-31).
    ///
    /// The daily rate for proration is `base_salary / days_in_month`.
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both the first and last day.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::new(2026, 1).unwrap();
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}

impl TryFrom<RawPayPeriod> for PayPeriod {
    type Error = PayrollError;

    fn try_from(raw: RawPayPeriod) -> PayrollResult<Self> {
        PayPeriod::new(raw.year, raw.month)
    }
}

impl From<PayPeriod> for RawPayPeriod {
    fn from(period: PayPeriod) -> Self {
        RawPayPeriod {
            year: period.year(),
            month: period.month(),
        }
    }
}
