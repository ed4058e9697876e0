//! Validate params command implementation
//!
//! This module implements the `validate-params` command for checking an
//! export parameter file without touching a document.

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::params::{load_params, ViewSelection};
use crate::config::AppConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate-params command
#[derive(Args, Debug)]
pub struct ValidateParamsArgs {
    /// Params file (defaults to export.params_file)
    #[arg(short, long)]
    pub params: Option<PathBuf>,
}

impl ValidateParamsArgs {
    /// Execute the validate-params command
    pub fn execute(&self, config: &AppConfig) -> anyhow::Result<i32> {
        let path = self
            .params
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.export.params_file));

        tracing::info!(params = %path.display(), "Validating export params");
        println!("🔍 Validating params file: {}", path.display());
        println!();

        let params = match load_params(&path) {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Params file is invalid");
                println!("   Error: {e}");
                if let Some(cause) = e.cause() {
                    println!("   Cause: {cause}");
                }
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("✅ Params file is valid");
        println!();
        println!("Params Summary:");
        match &params.selection {
            ViewSelection::All => println!("  Selection: all 3D views"),
            ViewSelection::Ids(ids) => {
                println!("  Selection: {} view id(s)", ids.len());
                for id in ids {
                    println!("    - {id}");
                }
            }
        }
        if !params.export_all_specified {
            println!("  Note: exportAll is absent; only the listed viewIds are exported");
        }
        let policy = match params.stop_on_first_error {
            Some(true) => "stop on first error",
            Some(false) => "best effort",
            None => "from configuration",
        };
        println!("  Failure policy: {policy}");
        println!();

        Ok(EXIT_SUCCESS)
    }
}
