//! Configuration management for Cloak.
//!
//! Cloak reads an optional `cloak.toml` with run defaults (field separator,
//! information-loss metric, suppression limit). A missing file is not an
//! error; built-in defaults apply. A present file must parse and validate.

pub mod schema;

pub use schema::{CloakConfig, DefaultsConfig};

use crate::domain::Result;
use std::path::Path;

/// Loads and validates the configuration file.
///
/// Falls back to [`CloakConfig::default`] when the file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<CloakConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(CloakConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: CloakConfig = toml::from_str(&content)?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}
