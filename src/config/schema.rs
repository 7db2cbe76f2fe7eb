//! Configuration schema
//!
//! `cloak.toml` only carries run defaults that would otherwise be repeated
//! on every invocation; every value can be overridden by a CLI flag.

use crate::domain::{CloakError, Metric, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloakConfig {
    /// Default option values applied when the matching flag is absent
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Run defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Field separator option: a single character or `DETECT`
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Information-loss metric name
    #[serde(default = "default_metric")]
    pub metric: String,

    /// Allowed fraction of suppressed (outlier) records, in [0, 1]
    #[serde(default)]
    pub suppression: f64,
}

fn default_separator() -> String {
    ";".to_string()
}

fn default_metric() -> String {
    "ENTROPY".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            metric: default_metric(),
            suppression: 0.0,
        }
    }
}

impl CloakConfig {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        let separator = &self.defaults.separator;
        if separator.chars().count() != 1 && !separator.eq_ignore_ascii_case("DETECT") {
            return Err(CloakError::Configuration(format!(
                "defaults.separator must be a single character or DETECT, got: {separator}"
            )));
        }

        self.defaults.metric.parse::<Metric>()?;

        if !(0.0..=1.0).contains(&self.defaults.suppression) {
            return Err(CloakError::Configuration(format!(
                "defaults.suppression must be within [0, 1], got: {}",
                self.defaults.suppression
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CloakConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.defaults.separator, ";");
        assert_eq!(config.defaults.metric, "ENTROPY");
        assert_eq!(config.defaults.suppression, 0.0);
    }

    #[test]
    fn test_detect_separator_is_valid() {
        let mut config = CloakConfig::default();
        config.defaults.separator = "detect".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multi_character_separator_rejected() {
        let mut config = CloakConfig::default();
        config.defaults.separator = ";;".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let mut config = CloakConfig::default();
        config.defaults.metric = "LOSS".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_suppression_out_of_range_rejected() {
        let mut config = CloakConfig::default();
        config.defaults.suppression = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_file() {
        let config: CloakConfig = toml::from_str("[defaults]\nmetric = \"AECS\"\n").unwrap();
        assert_eq!(config.defaults.metric, "AECS");
        assert_eq!(config.defaults.separator, ";");
    }
}
