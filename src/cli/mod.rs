//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// FBX Exporter - batch export of 3D views to FBX
#[derive(Parser, Debug)]
#[command(name = "fbx-exporter")]
#[command(version, about, long_about = None)]
#[command(author = "FBX Exporter Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, env = "FBX_EXPORTER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FBX_EXPORTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the selected 3D views of a scene document to FBX files
    Export(commands::export::ExportArgs),

    /// Validate an export parameter file
    ValidateParams(commands::validate::ValidateParamsArgs),

    /// List the 3D views of a scene document
    ListViews(commands::list::ListViewsArgs),
}
