//! Configuration for the payroll engine.
//!
//! Rate multipliers, the fixed allowance, and the statutory contribution
//! tables are configuration data, not logic. They are passed into the
//! aggregator at call time; there is no process-wide state.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionTables, PagIbigConfig, PayPolicy, PayrollConfig, PhilHealthConfig, RateMultipliers,
    SssBracket, SssTable,
};
