//! Shift hour classification.
//!
//! Splits one attendance record's worked minutes into the pay buckets the
//! aggregator prices: regular and overtime on ordinary days, or their
//! regular-holiday / special-holiday counterparts, with night-differential
//! minutes reported as an overlay.

use tracing::warn;

use crate::models::{AttendanceRecord, ClassifiedHours, HolidayCategory};

use super::night_differential::night_differential_hours;

/// The standard shift length in minutes (8 hours).
///
/// Worked minutes up to this threshold are regular time; the excess is
/// overtime regardless of the shift's start time. Shift length is fixed by
/// organization policy, not per-employee schedule.
pub const STANDARD_SHIFT_MINUTES: i64 = 480;

/// Classifies one attendance record's worked minutes into pay buckets.
///
/// Worked minutes (elapsed minus breaks, floored at zero) are split at the
/// 8-hour standard shift into a regular and an overtime portion. The holiday
/// category of the record's date then routes that pair: on a regular holiday
/// it lands in the holiday-regular/holiday-overtime buckets, on a special
/// holiday in the special-holiday buckets, and on an ordinary day it stays in
/// regular/overtime. Night-differential minutes are computed independently
/// over the clock session and overlay the exclusive buckets.
///
/// Anomalous records (still open, time-out before time-in, negative break
/// minutes) clamp to zero rather than failing: a payroll run must not abort
/// on one bad historical record. Anomalies are reported through `tracing`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify;
/// use payroll_engine::models::{AttendanceRecord, HolidayCategory};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     time_in: NaiveDateTime::parse_from_str("2025-03-10 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     time_out: Some(NaiveDateTime::parse_from_str("2025-03-10 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     break_minutes: 0,
///     breaks: vec![],
/// };
///
/// let hours = classify(&record, HolidayCategory::None);
/// assert_eq!(hours.regular_minutes, 480);
/// assert_eq!(hours.overtime_minutes, 60);
/// ```
pub fn classify(record: &AttendanceRecord, category: HolidayCategory) -> ClassifiedHours {
    report_anomalies(record);

    let worked_minutes = record.worked_minutes();
    let regular = worked_minutes.min(STANDARD_SHIFT_MINUTES);
    let overtime = (worked_minutes - STANDARD_SHIFT_MINUTES).max(0);

    let night_diff_minutes = match record.time_out {
        Some(time_out) => night_differential_hours(record.time_in, time_out) * 60,
        None => 0,
    };

    match category {
        HolidayCategory::None => ClassifiedHours {
            regular_minutes: regular,
            overtime_minutes: overtime,
            night_diff_minutes,
            ..ClassifiedHours::default()
        },
        HolidayCategory::Regular => ClassifiedHours {
            holiday_regular_minutes: regular,
            holiday_overtime_minutes: overtime,
            night_diff_minutes,
            ..ClassifiedHours::default()
        },
        HolidayCategory::Special => ClassifiedHours {
            special_holiday_minutes: regular,
            special_holiday_overtime_minutes: overtime,
            night_diff_minutes,
            ..ClassifiedHours::default()
        },
    }
}

/// Reports malformed attendance data without failing the run.
fn report_anomalies(record: &AttendanceRecord) {
    if record.break_minutes < 0 {
        warn!(
            employee_id = %record.employee_id,
            date = %record.date,
            break_minutes = record.break_minutes,
            "negative break minutes clamped to zero"
        );
    }
    match record.time_out {
        None => warn!(
            employee_id = %record.employee_id,
            date = %record.date,
            "open attendance session classified as zero worked minutes"
        ),
        Some(time_out) if time_out <= record.time_in => warn!(
            employee_id = %record.employee_id,
            date = %record.date,
            "time-out at or before time-in clamped to zero worked minutes"
        ),
        Some(_) => {}
    }
}
