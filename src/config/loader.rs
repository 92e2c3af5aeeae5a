//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AccountingRules, LedgerConfig, StatusLabels};

/// Loads and provides access to ledger configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── accounting.yaml  # Minute thresholds
/// └── labels.yaml      # Holiday label, leave markers, weekend markers
/// ```
///
/// # Example
///
/// ```no_run
/// use comp_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Overtime after {} minutes", loader.rules().overtime_threshold_minutes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds a value the accounting rules cannot work with.
    ///
    /// ```no_run
    /// use comp_ledger::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), comp_ledger::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<AccountingRules>(&path.join("accounting.yaml"))?;
        let labels = Self::load_yaml::<StatusLabels>(&path.join("labels.yaml"))?;

        Self::from_config(LedgerConfig::new(rules, labels))
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: LedgerConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &LedgerConfig) -> EngineResult<()> {
        let rules = config.rules();
        if rules.comp_day_minutes == 0 {
            return Err(EngineError::InvalidConfig {
                field: "comp_day_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if rules.minutes_per_day == 0 {
            return Err(EngineError::InvalidConfig {
                field: "minutes_per_day".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let labels = config.labels();
        if labels.holiday.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "holiday".to_string(),
                message: "holiday label must not be empty".to_string(),
            });
        }
        // An empty marker would match every label.
        let markers = [
            ("full_day_leave_marker", &labels.full_day_leave_marker),
            ("half_day_leave_marker", &labels.half_day_leave_marker),
            ("weekly_subtotal_marker", &labels.weekly_subtotal_marker),
        ];
        for (field, marker) in markers {
            if marker.is_empty() {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: "marker must not be empty".to_string(),
                });
            }
        }
        if labels.weekend_markers.iter().any(String::is_empty) {
            return Err(EngineError::InvalidConfig {
                field: "weekend_markers".to_string(),
                message: "marker must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying ledger configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the accounting rules.
    pub fn rules(&self) -> &AccountingRules {
        self.config.rules()
    }

    /// Returns the status labels.
    pub fn labels(&self) -> &StatusLabels {
        self.config.labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "comp_ledger_{}_{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_bundled_default_config() {
        let loader = ConfigLoader::load("./config/default").expect("Failed to load config");

        assert_eq!(loader.rules(), &AccountingRules::default());
        assert_eq!(loader.labels(), &StatusLabels::default());
    }

    #[test]
    fn test_load_missing_directory_reports_path() {
        let err = ConfigLoader::load("./config/does_not_exist").unwrap_err();

        match err {
            EngineError::ConfigNotFound { path } => assert!(path.contains("accounting.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_reports_parse_error() {
        let dir = scratch_dir("bad_yaml");
        fs::write(dir.join("accounting.yaml"), "ordinary_day_minutes: [not a number").unwrap();
        fs::write(dir.join("labels.yaml"), "{}").unwrap();

        let err = ConfigLoader::load(&dir).unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_overrides_thresholds() {
        let dir = scratch_dir("override");
        fs::write(dir.join("accounting.yaml"), "overtime_threshold_minutes: 600\n").unwrap();
        fs::write(dir.join("labels.yaml"), "holiday: \"holiday\"\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.rules().overtime_threshold_minutes, 600);
        assert_eq!(loader.rules().ordinary_day_minutes, 480);
        assert_eq!(loader.labels().holiday, "holiday");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_zero_comp_day_rejected() {
        let mut config = LedgerConfig::default();
        config.rules.comp_day_minutes = 0;

        let err = ConfigLoader::from_config(config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { ref field, .. } if field == "comp_day_minutes"));
    }

    #[test]
    fn test_empty_weekend_marker_rejected() {
        let mut config = LedgerConfig::default();
        config.labels.weekend_markers.push(String::new());

        let err = ConfigLoader::from_config(config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { ref field, .. } if field == "weekend_markers"));
    }

    #[test]
    fn test_default_loader_uses_default_config() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config(), &LedgerConfig::default());
    }
}
