//! Attendance record model and related types.
//!
//! This module defines the AttendanceRecord and BreakInterval structs for
//! representing clock sessions as supplied by the persistence layer.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The category of a break within an attendance session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakCategory {
    /// A meal break.
    Meal,
    /// A short rest break.
    Regular,
}

/// Represents one break within an attendance session.
///
/// Owned exclusively by its parent [`AttendanceRecord`]. The end instant is
/// `None` while the break is still open; open breaks contribute no minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakInterval {
    /// The instant the break started.
    pub start_time: NaiveDateTime,
    /// The instant the break ended, or `None` while the break is open.
    pub end_time: Option<NaiveDateTime>,
    /// The category of the break.
    pub category: BreakCategory,
}

impl BreakInterval {
    /// Returns the duration of the break in minutes, or 0 while it is open.
    pub fn duration_minutes(&self) -> i64 {
        match self.end_time {
            Some(end) => (end - self.start_time).num_minutes().max(0),
            None => 0,
        }
    }
}

/// Represents one real clock session for an employee.
///
/// Created on clock-in with `time_out` unset, mutated by the surrounding
/// application on break start/end and clock-out, and immutable thereafter.
/// The accumulated `break_minutes` field is authoritative for classification;
/// the owned `breaks` list is carried for audit display.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     time_in: NaiveDateTime::parse_from_str("2025-03-10 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     time_out: Some(NaiveDateTime::parse_from_str("2025-03-10 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     break_minutes: 60,
///     breaks: vec![],
/// };
/// assert_eq!(record.worked_minutes(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The identifier of the employee who clocked in.
    pub employee_id: String,
    /// The calendar date of the session (used for holiday resolution).
    pub date: NaiveDate,
    /// The clock-in instant.
    pub time_in: NaiveDateTime,
    /// The clock-out instant, or `None` while the session is open.
    pub time_out: Option<NaiveDateTime>,
    /// Accumulated break minutes across the session.
    pub break_minutes: i64,
    /// Breaks taken during the session.
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
}

impl AttendanceRecord {
    /// Returns true if the session has not been clocked out yet.
    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }

    /// Returns the worked minutes for the session.
    ///
    /// Worked minutes are the elapsed minutes between clock-in and clock-out
    /// minus the accumulated break minutes, floored at zero. An open session
    /// reports zero worked minutes (the figure is not authoritative until
    /// clock-out). Negative break minutes in historical data are treated as
    /// zero rather than inflating the total.
    pub fn worked_minutes(&self) -> i64 {
        let Some(time_out) = self.time_out else {
            return 0;
        };
        let elapsed = (time_out - self.time_in).num_minutes();
        (elapsed - self.break_minutes.max(0)).max(0)
    }
}
