//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{ContributionTables, PayPolicy, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── policy.yaml         # Rate multipliers and fixed allowance
/// └── contributions.yaml  # SSS, PhilHealth, and Pag-IBIG tables
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let config = loader.config();
/// assert!(!config.contributions.sss.brackets.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - The contribution tables fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PayPolicy>(&policy_path)?;

        let contributions_path = path.join("contributions.yaml");
        let contributions = Self::load_yaml::<ContributionTables>(&contributions_path)?;

        let config = PayrollConfig {
            policy,
            contributions,
        };
        validate(&config)?;

        debug!(
            sss_brackets = config.contributions.sss.brackets.len(),
            "payroll configuration loaded"
        );
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

/// Validates the loaded configuration.
///
/// The SSS table must be non-empty with well-formed, ascending brackets, and
/// the PhilHealth floor must not exceed its ceiling. The first-match bracket
/// scan and the ceiling fallback both rely on this ordering.
fn validate(config: &PayrollConfig) -> PayrollResult<()> {
    let sss = &config.contributions.sss;
    if sss.brackets.is_empty() {
        return Err(PayrollError::InvalidTable {
            table: "sss".to_string(),
            message: "brackets are empty".to_string(),
        });
    }
    for bracket in &sss.brackets {
        if bracket.min > bracket.max {
            return Err(PayrollError::InvalidTable {
                table: "sss".to_string(),
                message: format!("bracket min {} exceeds max {}", bracket.min, bracket.max),
            });
        }
    }
    for pair in sss.brackets.windows(2) {
        if pair[1].min <= pair[0].max {
            return Err(PayrollError::InvalidTable {
                table: "sss".to_string(),
                message: "brackets are not in ascending, non-overlapping order".to_string(),
            });
        }
    }

    let philhealth = &config.contributions.philhealth;
    if philhealth.salary_floor > philhealth.salary_ceiling {
        return Err(PayrollError::InvalidTable {
            table: "philhealth".to_string(),
            message: "salary floor exceeds salary ceiling".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{SssBracket, SssTable};
    use rust_decimal::Decimal;

    #[test]
    fn test_load_from_repository_config_dir() {
        let loader = ConfigLoader::load("./config/payroll").unwrap();
        // The shipped YAML mirrors the statutory defaults.
        assert_eq!(*loader.config(), PayrollConfig::default());
    }

    #[test]
    fn test_load_missing_directory_is_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");
        assert!(matches!(
            result,
            Err(PayrollError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_default_config_passes_validation() {
        assert!(validate(&PayrollConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_sss_table_fails_validation() {
        let mut config = PayrollConfig::default();
        config.contributions.sss.brackets.clear();
        assert!(matches!(
            validate(&config),
            Err(PayrollError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_inverted_bracket_fails_validation() {
        let mut config = PayrollConfig::default();
        config.contributions.sss = SssTable {
            brackets: vec![SssBracket {
                min: Decimal::new(5_000, 0),
                max: Decimal::new(4_000, 0),
                employee_share: Decimal::new(200, 0),
            }],
        };
        assert!(matches!(
            validate(&config),
            Err(PayrollError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_overlapping_brackets_fail_validation() {
        let mut config = PayrollConfig::default();
        config.contributions.sss = SssTable {
            brackets: vec![
                SssBracket {
                    min: Decimal::ZERO,
                    max: Decimal::new(5_000, 0),
                    employee_share: Decimal::new(200, 0),
                },
                SssBracket {
                    min: Decimal::new(4_000, 0),
                    max: Decimal::new(6_000, 0),
                    employee_share: Decimal::new(250, 0),
                },
            ],
        };
        assert!(matches!(
            validate(&config),
            Err(PayrollError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_inverted_philhealth_bounds_fail_validation() {
        let mut config = PayrollConfig::default();
        config.contributions.philhealth.salary_floor = Decimal::new(200_000, 0);
        assert!(matches!(
            validate(&config),
            Err(PayrollError::InvalidTable { table, .. }) if table == "philhealth"
        ));
    }
}
