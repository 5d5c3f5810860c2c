//! Attendance-to-payslip computation engine for Philippine semi-monthly payroll.
//!
//! This crate converts raw clock-in/clock-out attendance records and a holiday
//! calendar into classified work hours (regular, overtime, night differential,
//! regular-holiday and special-holiday variants), then reduces those hours plus
//! the government contribution tables (SSS, PhilHealth, Pag-IBIG) into a payslip.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
