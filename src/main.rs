// FBX Exporter - Batch export of 3D views to FBX
// Copyright (c) 2025 FBX Exporter Contributors
// Licensed under the MIT License

use clap::Parser;
use fbx_exporter::cli::commands::{EXIT_CONFIG_ERROR, EXIT_FATAL};
use fbx_exporter::cli::{Cli, Commands};
use fbx_exporter::config::{load_config_or_default, AppConfig};
use fbx_exporter::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            if let Some(cause) = e.cause() {
                eprintln!("   Cause: {cause}");
            }
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);

    // Keep the guard alive so file logs are flushed on exit
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "FBX Exporter - Batch export of 3D views to FBX"
    );

    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };

    drop(_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &AppConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(config),
        Commands::ValidateParams(args) => args.execute(config),
        Commands::ListViews(args) => args.execute(),
    }
}
