//! Payslip model.
//!
//! The final output of a payroll computation for one employee and one pay
//! period. All money fields are integers in centavos to keep persisted
//! payroll figures free of floating-point drift; hour totals stay fractional.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// Itemized statutory deductions, in centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// SSS employee share.
    pub sss: i64,
    /// PhilHealth employee share.
    pub philhealth: i64,
    /// Pag-IBIG employee contribution.
    pub pagibig: i64,
    /// Withholding tax (zero unless a tax policy is supplied externally).
    pub tax: i64,
    /// Sum of the itemized deductions.
    pub total: i64,
}

/// One employee's payroll result for one pay period.
///
/// Created once per employee per period by the aggregator and immutable once
/// persisted, except through an administrative correction path owned by the
/// surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub payslip_id: Uuid,
    /// The employee the payslip is for.
    pub employee_id: String,
    /// The pay period the payslip covers.
    pub period: PayPeriod,
    /// When the payslip was computed.
    pub computed_at: DateTime<Utc>,

    /// Total regular hours worked in the period.
    pub regular_hours: Decimal,
    /// Total overtime hours worked in the period.
    pub overtime_hours: Decimal,
    /// Total night-differential hours (overlay) in the period.
    pub night_diff_hours: Decimal,
    /// Total standard-shift hours worked on regular holidays.
    pub holiday_regular_hours: Decimal,
    /// Total overtime hours worked on regular holidays.
    pub holiday_overtime_hours: Decimal,
    /// Total standard-shift hours worked on special holidays.
    pub special_holiday_hours: Decimal,
    /// Total overtime hours worked on special holidays.
    pub special_holiday_overtime_hours: Decimal,

    /// Basic pay (regular hours at the base rate), in centavos.
    pub basic_pay: i64,
    /// Overtime pay, in centavos.
    pub overtime_pay: i64,
    /// Night-differential premium, in centavos.
    pub night_diff_pay: i64,
    /// Holiday pay across all four holiday components, in centavos.
    pub holiday_pay: i64,
    /// Fixed per-period allowance, in centavos.
    pub allowance: i64,
    /// Gross pay, in centavos.
    pub gross_pay: i64,
    /// Itemized statutory deductions.
    pub deductions: Deductions,
    /// Net pay after deductions, in centavos.
    pub net_pay: i64,
}

impl Payslip {
    /// Returns an all-zero payslip for the given employee and period.
    ///
    /// An employee with no attendance in a period still receives a payslip
    /// record for audit completeness.
    pub fn zero(employee_id: &str, period: PayPeriod) -> Payslip {
        Payslip {
            payslip_id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            period,
            computed_at: Utc::now(),
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_diff_hours: Decimal::ZERO,
            holiday_regular_hours: Decimal::ZERO,
            holiday_overtime_hours: Decimal::ZERO,
            special_holiday_hours: Decimal::ZERO,
            special_holiday_overtime_hours: Decimal::ZERO,
            basic_pay: 0,
            overtime_pay: 0,
            night_diff_pay: 0,
            holiday_pay: 0,
            allowance: 0,
            gross_pay: 0,
            deductions: Deductions::default(),
            net_pay: 0,
        }
    }
}
