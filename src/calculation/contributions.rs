//! Statutory contribution lookups.
//!
//! SSS, PhilHealth, and Pag-IBIG employee contributions are computed against
//! an income figure using configuration-supplied tables. The lookup shapes
//! (first-match bracket scan, clamp-then-halve, threshold-selected rate) are
//! normative for numeric parity with prior payroll runs.

use rust_decimal::Decimal;

use crate::config::{PagIbigConfig, PhilHealthConfig, SssTable};

/// Looks up the SSS employee share for an income figure.
///
/// Scans the ordered bracket table and returns the employee share of the
/// first bracket satisfying `min <= income <= max`. When no bracket matches
/// (income exceeds the table's top bound), the table's maximum employee share
/// is returned as a ceiling; that fallback is deliberate, not a failure.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sss_contribution;
/// use payroll_engine::config::SssTable;
/// use rust_decimal::Decimal;
///
/// let table = SssTable::default();
/// let share = sss_contribution(&table, Decimal::new(7_300, 0));
/// assert_eq!(share, Decimal::new(375_00, 2));
/// ```
pub fn sss_contribution(table: &SssTable, income: Decimal) -> Decimal {
    table
        .brackets
        .iter()
        .find(|bracket| income >= bracket.min && income <= bracket.max)
        .map(|bracket| bracket.employee_share)
        .unwrap_or_else(|| table.max_employee_share())
}

/// Computes the PhilHealth employee share for an income figure.
///
/// Income is clamped to the configured salary floor and ceiling, the premium
/// rate is applied, and the result is halved: the employee pays half the
/// total premium.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::philhealth_contribution;
/// use payroll_engine::config::PhilHealthConfig;
/// use rust_decimal::Decimal;
///
/// let config = PhilHealthConfig::default();
/// let share = philhealth_contribution(&config, Decimal::new(12_000, 0));
/// assert_eq!(share, Decimal::new(300_0000, 4)); // (12000 * 0.05) / 2
/// ```
pub fn philhealth_contribution(config: &PhilHealthConfig, income: Decimal) -> Decimal {
    let clamped = income.clamp(config.salary_floor, config.salary_ceiling);
    clamped * config.rate / Decimal::TWO
}

/// Computes the Pag-IBIG employee contribution for an income figure.
///
/// Incomes at or below the threshold contribute at the low rate, above it at
/// the high rate; in both cases the rate is applied to income capped at the
/// fund salary cap.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::pagibig_contribution;
/// use payroll_engine::config::PagIbigConfig;
/// use rust_decimal::Decimal;
///
/// let config = PagIbigConfig::default();
/// let share = pagibig_contribution(&config, Decimal::new(500, 0));
/// assert_eq!(share, Decimal::new(5_00, 2));
/// ```
pub fn pagibig_contribution(config: &PagIbigConfig, income: Decimal) -> Decimal {
    let rate = if income <= config.threshold {
        config.low_rate
    } else {
        config.high_rate
    };
    income.min(config.salary_cap) * rate
}
