//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod classified_hours;
mod holiday;
mod pay_period;
mod payslip;

pub use attendance::{AttendanceRecord, BreakCategory, BreakInterval};
pub use classified_hours::ClassifiedHours;
pub use holiday::{Holiday, HolidayCategory, HolidayKind};
pub use pay_period::PayPeriod;
pub use payslip::{Deductions, Payslip};
