//! Init command implementation
//!
//! Generates a sample `cloak.toml` with the built-in defaults spelled out.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cloak.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        fs::write(&self.output, Self::sample_config())?;
        println!("✅ Configuration file created: {}", self.output);
        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your run defaults", self.output);
        println!("  2. Run 'cloak check' with your criteria and hierarchies");
        Ok(0)
    }

    fn sample_config() -> &'static str {
        r#"# Cloak run defaults. Every value can be overridden on the command line.

[defaults]
# Field separator of the input files: a single character or "DETECT"
separator = ";"

# Information-loss metric: AECS, DM, DMSTAR, ENTROPY, HEIGHT, NMENTROPY, PREC or NMPREC
metric = "ENTROPY"

# Allowed fraction of suppressed (outlier) records, in [0, 1]
suppression = 0.0
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cloak.toml");
        let init = InitArgs {
            output: path.display().to_string(),
            force: false,
        };

        assert_eq!(init.execute().unwrap(), 0);
        let config = load_config(&path).unwrap();
        assert_eq!(config.defaults.separator, ";");
        assert_eq!(config.defaults.metric, "ENTROPY");
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cloak.toml");
        std::fs::write(&path, "existing").unwrap();

        let init = InitArgs {
            output: path.display().to_string(),
            force: false,
        };
        assert_eq!(init.execute().unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cloak.toml");
        std::fs::write(&path, "existing").unwrap();

        let init = InitArgs {
            output: path.display().to_string(),
            force: true,
        };
        assert_eq!(init.execute().unwrap(), 0);
        assert!(std::fs::read_to_string(&path).unwrap().contains("[defaults]"));
    }
}
