//! Holiday model and holiday category types.
//!
//! Philippine labor law distinguishes two statutory holiday categories,
//! regular holidays and special (non-working) holidays, each carrying its own
//! pay multipliers. Holidays are keyed by calendar date only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The statutory category of a holiday definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// A regular holiday (e.g., Independence Day).
    Regular,
    /// A special non-working holiday (e.g., Ninoy Aquino Day).
    Special,
}

/// A holiday definition supplied by the surrounding application.
///
/// At most one holiday should exist per date; if the collaborator supplies
/// duplicates, the first entry in list order wins during resolution.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayKind};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
///     name: "Independence Day".to_string(),
///     kind: HolidayKind::Regular,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date of the holiday (time-of-day is never considered).
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Independence Day").
    pub name: String,
    /// The statutory category of the holiday.
    pub kind: HolidayKind,
}

/// The holiday category resolved for a calendar date.
///
/// This is the output of holiday resolution and the input to shift hour
/// classification: it decides whether worked minutes land in the ordinary,
/// regular-holiday, or special-holiday buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCategory {
    /// An ordinary working day.
    None,
    /// A regular holiday.
    Regular,
    /// A special non-working holiday.
    Special,
}

impl From<HolidayKind> for HolidayCategory {
    fn from(kind: HolidayKind) -> Self {
        match kind {
            HolidayKind::Regular => HolidayCategory::Regular,
            HolidayKind::Special => HolidayCategory::Special,
        }
    }
}
