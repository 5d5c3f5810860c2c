//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files. The `Default` implementations
//! carry the statutory defaults so the engine is usable without external
//! files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Pay-rate multipliers applied on top of the base hourly rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateMultipliers {
    /// Multiplier for overtime hours on an ordinary day.
    pub overtime: Decimal,
    /// Premium multiplier for hours in the 22:00-06:00 night window.
    pub night_differential: Decimal,
    /// Multiplier for standard-shift hours on a regular holiday.
    pub regular_holiday: Decimal,
    /// Multiplier for overtime hours on a regular holiday.
    pub regular_holiday_overtime: Decimal,
    /// Multiplier for standard-shift hours on a special holiday.
    pub special_holiday: Decimal,
    /// Multiplier for overtime hours on a special holiday.
    pub special_holiday_overtime: Decimal,
}

impl Default for RateMultipliers {
    fn default() -> Self {
        RateMultipliers {
            overtime: Decimal::new(125, 2),
            night_differential: Decimal::new(10, 2),
            regular_holiday: Decimal::new(200, 2),
            regular_holiday_overtime: Decimal::new(260, 2),
            special_holiday: Decimal::new(130, 2),
            special_holiday_overtime: Decimal::new(169, 2),
        }
    }
}

/// The pay policy applied by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayPolicy {
    /// Rate multipliers for the premium pay categories.
    #[serde(default)]
    pub multipliers: RateMultipliers,
    /// Flat per-period allowance added to gross pay, in pesos.
    #[serde(default = "default_fixed_allowance")]
    pub fixed_allowance: Decimal,
}

fn default_fixed_allowance() -> Decimal {
    Decimal::new(500_00, 2)
}

impl Default for PayPolicy {
    fn default() -> Self {
        PayPolicy {
            multipliers: RateMultipliers::default(),
            fixed_allowance: default_fixed_allowance(),
        }
    }
}

/// One bracket of the SSS contribution table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SssBracket {
    /// The lowest income covered by the bracket (inclusive).
    pub min: Decimal,
    /// The highest income covered by the bracket (inclusive).
    pub max: Decimal,
    /// The employee share for incomes in this bracket, in pesos.
    pub employee_share: Decimal,
}

/// The ordered SSS contribution bracket table.
///
/// The lookup scans brackets in order and returns the first match. Incomes
/// above the table's top bound fall back to the maximum employee share.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SssTable {
    /// The brackets, ordered by ascending income.
    pub brackets: Vec<SssBracket>,
}

impl SssTable {
    /// Returns the largest employee share in the table.
    ///
    /// Used as the ceiling when an income exceeds the top bracket.
    pub fn max_employee_share(&self) -> Decimal {
        self.brackets
            .iter()
            .map(|b| b.employee_share)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for SssTable {
    fn default() -> Self {
        // Brackets are generated from the monthly salary credit schedule:
        // MSC 4000 through 30000 in steps of 500, employee share 5% of MSC.
        let mut brackets = Vec::new();
        let mut msc: i64 = 4_000;
        while msc <= 30_000 {
            let min = if msc == 4_000 {
                Decimal::ZERO
            } else {
                Decimal::new(msc - 250, 0)
            };
            let max = Decimal::new((msc + 250) * 100 - 1, 2);
            brackets.push(SssBracket {
                min,
                max,
                employee_share: Decimal::new(msc * 5, 2),
            });
            msc += 500;
        }
        SssTable { brackets }
    }
}

/// PhilHealth premium configuration.
///
/// The contribution clamps income to the salary floor/ceiling, applies the
/// premium rate, and halves the result (the employee pays half the premium).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhilHealthConfig {
    /// The total premium rate against clamped income.
    pub rate: Decimal,
    /// The lowest income the premium is computed against.
    pub salary_floor: Decimal,
    /// The highest income the premium is computed against.
    pub salary_ceiling: Decimal,
}

impl Default for PhilHealthConfig {
    fn default() -> Self {
        PhilHealthConfig {
            rate: Decimal::new(5, 2),
            salary_floor: Decimal::new(10_000, 0),
            salary_ceiling: Decimal::new(100_000, 0),
        }
    }
}

/// Pag-IBIG contribution configuration.
///
/// Incomes at or below the threshold contribute at the low rate, above it at
/// the high rate, in both cases against income capped at the fund salary cap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagIbigConfig {
    /// The income threshold separating the two rates.
    pub threshold: Decimal,
    /// The rate applied at or below the threshold.
    pub low_rate: Decimal,
    /// The rate applied above the threshold.
    pub high_rate: Decimal,
    /// The maximum income the contribution is computed against.
    pub salary_cap: Decimal,
}

impl Default for PagIbigConfig {
    fn default() -> Self {
        PagIbigConfig {
            threshold: Decimal::new(1_500, 0),
            low_rate: Decimal::new(1, 2),
            high_rate: Decimal::new(2, 2),
            salary_cap: Decimal::new(5_000, 0),
        }
    }
}

/// The statutory contribution tables consulted by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContributionTables {
    /// The SSS bracket table.
    #[serde(default)]
    pub sss: SssTable,
    /// The PhilHealth premium configuration.
    #[serde(default)]
    pub philhealth: PhilHealthConfig,
    /// The Pag-IBIG contribution configuration.
    #[serde(default)]
    pub pagibig: PagIbigConfig,
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollConfig {
    /// The pay policy (multipliers and allowance).
    pub policy: PayPolicy,
    /// The statutory contribution tables.
    pub contributions: ContributionTables,
}
