//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Cloak using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Cloak - data anonymization front end
#[derive(Parser, Debug)]
#[command(name = "cloak")]
#[command(version, about, long_about = None)]
#[command(author = "Cloak Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "cloak.toml", env = "CLOAK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLOAK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate all anonymization options and print the run plan
    Check(commands::check::CheckArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
