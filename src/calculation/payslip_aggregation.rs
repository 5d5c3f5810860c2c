//! Payslip aggregation.
//!
//! Reduces a pay period's classified attendance into a single payslip:
//! accumulated hour buckets, priced earnings components, statutory
//! deductions, and net pay.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::PayrollConfig;
use crate::models::{
    AttendanceRecord, ClassifiedHours, Deductions, HolidayCategory, PayPeriod, Payslip,
};

use super::contributions::{pagibig_contribution, philhealth_contribution, sss_contribution};
use super::shift_classification::classify;

/// Aggregates one employee's attendance for a pay period into a payslip.
///
/// Every record is classified and the seven hour buckets accumulated across
/// the period. Earnings are priced from the base hourly rate and the policy
/// multipliers, the fixed allowance is added, and the statutory deductions
/// are looked up against **gross pay** (not basic pay; this is a deliberate
/// policy choice). Net pay is gross minus deductions, floored at zero.
///
/// All intermediate math is exact decimal arithmetic; each money figure is
/// rounded half-up to centavos only at finalization, and total deductions
/// and net pay are derived from the rounded figures so the persisted payslip
/// is internally consistent.
///
/// An empty record list yields an all-zero payslip rather than an error: an
/// employee with no attendance still receives a payslip record for audit
/// completeness, with no allowance and no deductions applied.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{AttendanceRecord, HolidayCategory, PayPeriod};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let period = PayPeriod::new(2025, 3, 1);
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     time_in: NaiveDateTime::parse_from_str("2025-03-10 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     time_out: Some(NaiveDateTime::parse_from_str("2025-03-10 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     break_minutes: 0,
///     breaks: vec![],
/// };
///
/// // One 9-hour session at 58.75/hour: 8h basic, 1h overtime at 1.25.
/// let rate = Decimal::new(58_75, 2);
/// let payslip = aggregate("emp_001", &period, rate, &[(record, HolidayCategory::None)], &config);
///
/// assert_eq!(payslip.basic_pay, 47_000); // 470.00
/// assert_eq!(payslip.overtime_pay, 7_344); // 73.4375 rounded half-up
/// ```
pub fn aggregate(
    employee_id: &str,
    period: &PayPeriod,
    hourly_rate: Decimal,
    records: &[(AttendanceRecord, HolidayCategory)],
    config: &PayrollConfig,
) -> Payslip {
    if records.is_empty() {
        debug!(employee_id, "no attendance in period, issuing zero payslip");
        return Payslip::zero(employee_id, *period);
    }

    let mut totals = ClassifiedHours::default();
    for (record, category) in records {
        totals += classify(record, *category);
    }

    let regular_hours = minutes_to_hours(totals.regular_minutes);
    let overtime_hours = minutes_to_hours(totals.overtime_minutes);
    let night_diff_hours = minutes_to_hours(totals.night_diff_minutes);
    let holiday_regular_hours = minutes_to_hours(totals.holiday_regular_minutes);
    let holiday_overtime_hours = minutes_to_hours(totals.holiday_overtime_minutes);
    let special_holiday_hours = minutes_to_hours(totals.special_holiday_minutes);
    let special_holiday_overtime_hours =
        minutes_to_hours(totals.special_holiday_overtime_minutes);

    let multipliers = &config.policy.multipliers;
    let basic_pay = regular_hours * hourly_rate;
    let overtime_pay = overtime_hours * hourly_rate * multipliers.overtime;
    let night_diff_pay = night_diff_hours * hourly_rate * multipliers.night_differential;
    let holiday_pay = holiday_regular_hours * hourly_rate * multipliers.regular_holiday
        + holiday_overtime_hours * hourly_rate * multipliers.regular_holiday_overtime
        + special_holiday_hours * hourly_rate * multipliers.special_holiday
        + special_holiday_overtime_hours * hourly_rate * multipliers.special_holiday_overtime;

    let allowance = config.policy.fixed_allowance;
    let gross_pay = basic_pay + overtime_pay + night_diff_pay + holiday_pay + allowance;

    // Statutory lookups run against gross pay, not basic pay.
    let sss = sss_contribution(&config.contributions.sss, gross_pay);
    let philhealth = philhealth_contribution(&config.contributions.philhealth, gross_pay);
    let pagibig = pagibig_contribution(&config.contributions.pagibig, gross_pay);
    // Zero unless a tax policy is supplied externally.
    let tax = Decimal::ZERO;

    let gross_centavos = to_centavos(gross_pay);
    let deductions = {
        let sss = to_centavos(sss);
        let philhealth = to_centavos(philhealth);
        let pagibig = to_centavos(pagibig);
        let tax = to_centavos(tax);
        Deductions {
            sss,
            philhealth,
            pagibig,
            tax,
            total: sss + philhealth + pagibig + tax,
        }
    };
    let net_centavos = (gross_centavos - deductions.total).max(0);

    debug!(
        employee_id,
        gross = gross_centavos,
        net = net_centavos,
        "payslip aggregated"
    );

    let mut payslip = Payslip::zero(employee_id, *period);
    payslip.regular_hours = regular_hours;
    payslip.overtime_hours = overtime_hours;
    payslip.night_diff_hours = night_diff_hours;
    payslip.holiday_regular_hours = holiday_regular_hours;
    payslip.holiday_overtime_hours = holiday_overtime_hours;
    payslip.special_holiday_hours = special_holiday_hours;
    payslip.special_holiday_overtime_hours = special_holiday_overtime_hours;
    payslip.basic_pay = to_centavos(basic_pay);
    payslip.overtime_pay = to_centavos(overtime_pay);
    payslip.night_diff_pay = to_centavos(night_diff_pay);
    payslip.holiday_pay = to_centavos(holiday_pay);
    payslip.allowance = to_centavos(allowance);
    payslip.gross_pay = gross_centavos;
    payslip.deductions = deductions;
    payslip.net_pay = net_centavos;
    payslip
}

/// Converts accumulated minutes to fractional hours.
fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Rounds a peso amount half-up to whole centavos.
fn to_centavos(amount: Decimal) -> i64 {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        // Centavo totals beyond i64 are not representable payroll figures.
        .unwrap_or(i64::MAX)
}
