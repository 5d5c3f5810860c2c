//! Holiday resolution for attendance dates.

use chrono::NaiveDate;

use crate::models::{Holiday, HolidayCategory};

/// Resolves the holiday category for a calendar date.
///
/// Scans the holiday list in order and returns the category of the first
/// entry whose date matches, or [`HolidayCategory::None`] when no entry
/// matches. Comparison is date-only; the collaborator supplying the list is
/// expected to keep at most one holiday per date, and when it does not, the
/// first entry in list order wins.
///
/// Call this once per attendance record's date; the list may be unsorted.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::holiday_category;
/// use payroll_engine::models::{Holiday, HolidayCategory, HolidayKind};
/// use chrono::NaiveDate;
///
/// let holidays = vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
///     name: "Independence Day".to_string(),
///     kind: HolidayKind::Regular,
/// }];
///
/// let category = holiday_category(NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(), &holidays);
/// assert_eq!(category, HolidayCategory::Regular);
///
/// let category = holiday_category(NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(), &holidays);
/// assert_eq!(category, HolidayCategory::None);
/// ```
pub fn holiday_category(date: NaiveDate, holidays: &[Holiday]) -> HolidayCategory {
    holidays
        .iter()
        .find(|holiday| holiday.date == date)
        .map(|holiday| holiday.kind.into())
        .unwrap_or(HolidayCategory::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayKind;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holiday(date_str: &str, name: &str, kind: HolidayKind) -> Holiday {
        Holiday {
            date: make_date(date_str),
            name: name.to_string(),
            kind,
        }
    }

    /// HR-001: matching regular holiday
    #[test]
    fn test_regular_holiday_match() {
        let holidays = vec![holiday("2025-06-12", "Independence Day", HolidayKind::Regular)];
        assert_eq!(
            holiday_category(make_date("2025-06-12"), &holidays),
            HolidayCategory::Regular
        );
    }

    /// HR-002: matching special holiday
    #[test]
    fn test_special_holiday_match() {
        let holidays = vec![holiday("2025-08-21", "Ninoy Aquino Day", HolidayKind::Special)];
        assert_eq!(
            holiday_category(make_date("2025-08-21"), &holidays),
            HolidayCategory::Special
        );
    }

    /// HR-003: no match resolves to none
    #[test]
    fn test_no_match_is_none() {
        let holidays = vec![holiday("2025-06-12", "Independence Day", HolidayKind::Regular)];
        assert_eq!(
            holiday_category(make_date("2025-06-13"), &holidays),
            HolidayCategory::None
        );
    }

    /// HR-004: empty list resolves to none
    #[test]
    fn test_empty_list_is_none() {
        assert_eq!(
            holiday_category(make_date("2025-06-12"), &[]),
            HolidayCategory::None
        );
    }

    /// HR-005: first entry wins on duplicate dates
    #[test]
    fn test_first_match_wins_on_duplicates() {
        let holidays = vec![
            holiday("2025-12-08", "Feast Day", HolidayKind::Special),
            holiday("2025-12-08", "Proclaimed Holiday", HolidayKind::Regular),
        ];
        assert_eq!(
            holiday_category(make_date("2025-12-08"), &holidays),
            HolidayCategory::Special
        );
    }

    /// HR-006: unsorted lists are scanned in supplied order
    #[test]
    fn test_unsorted_list_is_scanned_linearly() {
        let holidays = vec![
            holiday("2025-12-25", "Christmas Day", HolidayKind::Regular),
            holiday("2025-01-01", "New Year's Day", HolidayKind::Regular),
            holiday("2025-08-21", "Ninoy Aquino Day", HolidayKind::Special),
        ];
        assert_eq!(
            holiday_category(make_date("2025-08-21"), &holidays),
            HolidayCategory::Special
        );
        assert_eq!(
            holiday_category(make_date("2025-01-01"), &holidays),
            HolidayCategory::Regular
        );
    }
}
