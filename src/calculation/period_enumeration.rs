//! Semi-monthly pay period enumeration.

use chrono::NaiveDate;

use crate::models::PayPeriod;

/// Produces consecutive semi-monthly pay periods ending at or before a date.
///
/// Walks backwards from the most recent period whose end date is at or
/// before `reference`, collecting `count` periods, and returns them in
/// chronological order. Each month contributes exactly two periods (days
/// 1-15 and 16 to end-of-month).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::periods_back;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
/// let periods = periods_back(reference, 3);
///
/// assert_eq!(periods.len(), 3);
/// // Chronological order; the period containing the reference is excluded
/// // because it has not ended yet.
/// assert_eq!((periods[0].year, periods[0].month, periods[0].half), (2024, 12, 1));
/// assert_eq!((periods[1].year, periods[1].month, periods[1].half), (2024, 12, 2));
/// assert_eq!((periods[2].year, periods[2].month, periods[2].half), (2025, 1, 1));
/// ```
pub fn periods_back(reference: NaiveDate, count: usize) -> Vec<PayPeriod> {
    let mut period = PayPeriod::containing(reference);
    if period.end_date > reference {
        period = period.previous();
    }

    let mut periods = Vec::with_capacity(count);
    for _ in 0..count {
        periods.push(period);
        period = period.previous();
    }
    periods.reverse();
    periods
}
