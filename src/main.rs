// Cloak - data anonymization front end
// Copyright (c) 2025 Cloak Contributors
// Licensed under the MIT License

use clap::Parser;
use cloak::cli::{Cli, Commands};
use cloak::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Cloak - data anonymization front end"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Check(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
