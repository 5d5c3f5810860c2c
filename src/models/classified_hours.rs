//! Classified hours model.
//!
//! The per-record output of shift hour classification: worked minutes split
//! into mutually exclusive pay buckets, plus the night-differential overlay.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// The classified work minutes for one attendance record.
///
/// The regular/overtime/holiday buckets are mutually exclusive and together
/// sum to the record's worked minutes. Night-differential minutes are an
/// overlay, not a bucket: a minute can be simultaneously "regular" and
/// "night differential".
///
/// # Example
///
/// ```
/// use payroll_engine::models::ClassifiedHours;
///
/// let mut total = ClassifiedHours::default();
/// total += ClassifiedHours {
///     regular_minutes: 480,
///     overtime_minutes: 60,
///     ..ClassifiedHours::default()
/// };
/// assert_eq!(total.exclusive_minutes(), 540);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedHours {
    /// Minutes worked within the standard shift on an ordinary day.
    pub regular_minutes: i64,
    /// Minutes worked beyond the standard shift on an ordinary day.
    pub overtime_minutes: i64,
    /// Minutes falling inside the 22:00-06:00 night window (overlay).
    pub night_diff_minutes: i64,
    /// Standard-shift minutes worked on a regular holiday.
    pub holiday_regular_minutes: i64,
    /// Overtime minutes worked on a regular holiday.
    pub holiday_overtime_minutes: i64,
    /// Standard-shift minutes worked on a special non-working holiday.
    pub special_holiday_minutes: i64,
    /// Overtime minutes worked on a special non-working holiday.
    pub special_holiday_overtime_minutes: i64,
}

impl ClassifiedHours {
    /// Returns the sum of the mutually exclusive buckets.
    ///
    /// This equals the record's worked minutes; the night-differential
    /// overlay is deliberately excluded.
    pub fn exclusive_minutes(&self) -> i64 {
        self.regular_minutes
            + self.overtime_minutes
            + self.holiday_regular_minutes
            + self.holiday_overtime_minutes
            + self.special_holiday_minutes
            + self.special_holiday_overtime_minutes
    }
}

impl Add for ClassifiedHours {
    type Output = ClassifiedHours;

    fn add(self, other: ClassifiedHours) -> ClassifiedHours {
        ClassifiedHours {
            regular_minutes: self.regular_minutes + other.regular_minutes,
            overtime_minutes: self.overtime_minutes + other.overtime_minutes,
            night_diff_minutes: self.night_diff_minutes + other.night_diff_minutes,
            holiday_regular_minutes: self.holiday_regular_minutes + other.holiday_regular_minutes,
            holiday_overtime_minutes: self.holiday_overtime_minutes
                + other.holiday_overtime_minutes,
            special_holiday_minutes: self.special_holiday_minutes + other.special_holiday_minutes,
            special_holiday_overtime_minutes: self.special_holiday_overtime_minutes
                + other.special_holiday_overtime_minutes,
        }
    }
}

impl AddAssign for ClassifiedHours {
    fn add_assign(&mut self, other: ClassifiedHours) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let hours = ClassifiedHours::default();
        assert_eq!(hours.exclusive_minutes(), 0);
        assert_eq!(hours.night_diff_minutes, 0);
    }

    #[test]
    fn test_exclusive_minutes_excludes_night_overlay() {
        let hours = ClassifiedHours {
            regular_minutes: 480,
            overtime_minutes: 60,
            night_diff_minutes: 480,
            ..ClassifiedHours::default()
        };
        assert_eq!(hours.exclusive_minutes(), 540);
    }

    #[test]
    fn test_add_accumulates_every_bucket() {
        let a = ClassifiedHours {
            regular_minutes: 480,
            overtime_minutes: 30,
            night_diff_minutes: 120,
            holiday_regular_minutes: 0,
            holiday_overtime_minutes: 0,
            special_holiday_minutes: 240,
            special_holiday_overtime_minutes: 0,
        };
        let b = ClassifiedHours {
            regular_minutes: 240,
            overtime_minutes: 0,
            night_diff_minutes: 60,
            holiday_regular_minutes: 480,
            holiday_overtime_minutes: 90,
            special_holiday_minutes: 0,
            special_holiday_overtime_minutes: 15,
        };

        let sum = a + b;
        assert_eq!(sum.regular_minutes, 720);
        assert_eq!(sum.overtime_minutes, 30);
        assert_eq!(sum.night_diff_minutes, 180);
        assert_eq!(sum.holiday_regular_minutes, 480);
        assert_eq!(sum.holiday_overtime_minutes, 90);
        assert_eq!(sum.special_holiday_minutes, 240);
        assert_eq!(sum.special_holiday_overtime_minutes, 15);
    }

    #[test]
    fn test_add_assign_matches_add() {
        let a = ClassifiedHours {
            regular_minutes: 480,
            ..ClassifiedHours::default()
        };
        let b = ClassifiedHours {
            overtime_minutes: 45,
            ..ClassifiedHours::default()
        };

        let mut accumulated = a;
        accumulated += b;
        assert_eq!(accumulated, a + b);
    }

    #[test]
    fn test_serialization_round_trip() {
        let hours = ClassifiedHours {
            regular_minutes: 480,
            overtime_minutes: 60,
            night_diff_minutes: 120,
            holiday_regular_minutes: 0,
            holiday_overtime_minutes: 0,
            special_holiday_minutes: 0,
            special_holiday_overtime_minutes: 0,
        };

        let json = serde_json::to_string(&hours).unwrap();
        let deserialized: ClassifiedHours = serde_json::from_str(&json).unwrap();
        assert_eq!(hours, deserialized);
    }
}
