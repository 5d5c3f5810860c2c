//! Calculation logic for the payroll engine.
//!
//! This module contains the computation pipeline: night-differential hour
//! counting, holiday resolution, shift hour classification, statutory
//! contribution lookups, semi-monthly period enumeration, and the payslip
//! aggregator that ties them together.

mod contributions;
mod holiday_resolution;
mod night_differential;
mod payslip_aggregation;
mod period_enumeration;
mod shift_classification;

pub use contributions::{pagibig_contribution, philhealth_contribution, sss_contribution};
pub use holiday_resolution::holiday_category;
pub use night_differential::{
    NIGHT_WINDOW_END_HOUR, NIGHT_WINDOW_START_HOUR, night_differential_hours,
};
pub use payslip_aggregation::aggregate;
pub use period_enumeration::periods_back;
pub use shift_classification::{STANDARD_SHIFT_MINUTES, classify};
