//! Semi-monthly pay period model.
//!
//! Payroll runs on a semi-monthly cycle: days 1-15 form the first half of a
//! month and day 16 through end-of-month the second. Periods are derived
//! purely from a calendar date, so they are stateless and reconstructible.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A half-month pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::containing(NaiveDate::from_ymd_opt(2025, 2, 20).unwrap());
/// assert_eq!(period.half, 2);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 2, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The calendar year of the period.
    pub year: i32,
    /// The calendar month of the period (1-12).
    pub month: u32,
    /// The period number within the month: 1 = days 1-15, 2 = day 16 to end-of-month.
    pub half: u8,
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Returns the last day of the given month, handling 28/29/30/31-day months.
fn end_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // The first of the next month always exists; stepping back one day gives
    // the last day of this month.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(NaiveDate::MAX)
}

impl PayPeriod {
    /// Constructs the pay period for a given year, month, and half.
    ///
    /// The half is clamped to 1 or 2.
    pub fn new(year: i32, month: u32, half: u8) -> PayPeriod {
        let half = half.clamp(1, 2);
        let (start_date, end_date) = if half == 1 {
            (
                NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN),
                NaiveDate::from_ymd_opt(year, month, 15).unwrap_or(NaiveDate::MIN),
            )
        } else {
            (
                NaiveDate::from_ymd_opt(year, month, 16).unwrap_or(NaiveDate::MIN),
                end_of_month(year, month),
            )
        };
        PayPeriod {
            year,
            month,
            half,
            start_date,
            end_date,
        }
    }

    /// Returns the pay period containing the given date.
    pub fn containing(date: NaiveDate) -> PayPeriod {
        let half = if date.day() <= 15 { 1 } else { 2 };
        PayPeriod::new(date.year(), date.month(), half)
    }

    /// Returns the immediately preceding pay period.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    ///
    /// let period = PayPeriod::new(2025, 1, 1);
    /// let previous = period.previous();
    /// assert_eq!((previous.year, previous.month, previous.half), (2024, 12, 2));
    /// ```
    pub fn previous(&self) -> PayPeriod {
        match (self.half, self.month) {
            (2, month) => PayPeriod::new(self.year, month, 1),
            (_, 1) => PayPeriod::new(self.year - 1, 12, 2),
            (_, month) => PayPeriod::new(self.year, month - 1, 2),
        }
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PP-001: first half runs days 1-15
    #[test]
    fn test_first_half_runs_days_1_to_15() {
        let period = PayPeriod::new(2025, 3, 1);
        assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    }

    /// PP-002: second half ends at end-of-month (31-day month)
    #[test]
    fn test_second_half_ends_at_end_of_31_day_month() {
        let period = PayPeriod::new(2025, 3, 2);
        assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 3, 16).unwrap());
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    /// PP-003: second half of February in a non-leap year
    #[test]
    fn test_february_non_leap_year() {
        let period = PayPeriod::new(2025, 2, 2);
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    /// PP-004: second half of February in a leap year
    #[test]
    fn test_february_leap_year() {
        let period = PayPeriod::new(2024, 2, 2);
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    /// PP-005: second half of a 30-day month
    #[test]
    fn test_30_day_month() {
        let period = PayPeriod::new(2025, 4, 2);
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
    }

    /// PP-006: December second half crosses into the new year when stepped back from January
    #[test]
    fn test_previous_from_january_first_half() {
        let period = PayPeriod::new(2025, 1, 1);
        let previous = period.previous();
        assert_eq!((previous.year, previous.month, previous.half), (2024, 12, 2));
        assert_eq!(
            previous.end_date,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_previous_from_second_half_stays_in_month() {
        let period = PayPeriod::new(2025, 7, 2);
        let previous = period.previous();
        assert_eq!((previous.year, previous.month, previous.half), (2025, 7, 1));
    }

    #[test]
    fn test_containing_day_15_is_first_half() {
        let period = PayPeriod::containing(NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());
        assert_eq!(period.half, 1);
    }

    #[test]
    fn test_containing_day_16_is_second_half() {
        let period = PayPeriod::containing(NaiveDate::from_ymd_opt(2025, 5, 16).unwrap());
        assert_eq!(period.half, 2);
    }

    #[test]
    fn test_contains_date_bounds_are_inclusive() {
        let period = PayPeriod::new(2025, 5, 1);
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 16).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()));
    }

    #[test]
    fn test_half_is_clamped() {
        let period = PayPeriod::new(2025, 5, 7);
        assert_eq!(period.half, 2);
    }

    #[test]
    fn test_serialization_round_trip() {
        let period = PayPeriod::new(2025, 2, 2);
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: PayPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
