//! Export command implementation
//!
//! This module implements the `export` command: load a scene document,
//! read the export params and write one FBX file per selected view.

use super::{EXIT_CONFIG_ERROR, EXIT_EXPORT_FAILED, EXIT_SUCCESS};
use crate::adapters::exporter::{CommandExporter, DryRunExporter};
use crate::adapters::host::SceneExporter;
use crate::adapters::scene::load_scene_manifest;
use crate::config::schema::validate_output_dir;
use crate::config::AppConfig;
use crate::core::export::{ExportCoordinator, ExportOutcome, RunSettings};
use crate::domain::errors::ErrorKind;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Scene manifest describing the document to export
    #[arg(short, long)]
    pub document: String,

    /// Params file (overrides export.params_file)
    #[arg(short, long)]
    pub params: Option<String>,

    /// Output directory name under the working directory
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Working directory (defaults to the current directory)
    #[arg(short, long)]
    pub working_dir: Option<PathBuf>,

    /// Model file passed to the exporter command as {model}
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Keep exporting after a failed view; the run still fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Dry run mode - resolve views and file names without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &AppConfig) -> anyhow::Result<i32> {
        tracing::info!(document = %self.document, "Starting export command");

        if let Some(output_dir) = &self.output_dir {
            if let Err(e) = validate_output_dir(output_dir) {
                eprintln!("Invalid --output-dir: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        }

        let document = match load_scene_manifest(&self.document) {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load scene document");
                eprintln!("Failed to load scene document: {e}");
                if let Some(cause) = e.cause() {
                    eprintln!("   Cause: {cause}");
                }
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let working_dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine working directory")?,
        };

        let settings = self.run_settings(config, working_dir);

        let model_path = self
            .model
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.document));

        let dry_run_exporter;
        let command_exporter;
        let exporter: &dyn SceneExporter = if self.dry_run {
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
            dry_run_exporter = DryRunExporter::new();
            &dry_run_exporter
        } else {
            match CommandExporter::from_config(&config.exporter, model_path) {
                Some(e) => {
                    command_exporter = e;
                    &command_exporter
                }
                None => {
                    eprintln!("No exporter command configured (set exporter.command or use --dry-run)");
                    return Ok(EXIT_CONFIG_ERROR);
                }
            }
        };

        let coordinator = ExportCoordinator::new(settings, exporter);
        println!("🚀 Starting export...");
        println!();

        let outcome = coordinator.execute_from_params_file(&document);
        print_summary(&outcome);

        Ok(exit_code(&outcome))
    }

    fn run_settings(&self, config: &AppConfig, working_dir: PathBuf) -> RunSettings {
        let mut settings = RunSettings::from_config(&config.export, working_dir);

        if let Some(params) = &self.params {
            tracing::info!(params = %params, "Overriding params file from CLI");
            settings = settings.with_params_file(params);
        }

        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            settings = settings.with_output_dir_name(output_dir);
        }

        if self.continue_on_error {
            tracing::info!("Enabling best-effort export from CLI");
            settings = settings.with_stop_on_first_error(false);
        }

        settings
    }
}

/// Maps a run outcome to the process exit code
pub fn exit_code(outcome: &ExportOutcome) -> i32 {
    if outcome.is_successful() {
        return EXIT_SUCCESS;
    }
    match outcome.error_kind() {
        Some(kind) if kind.is_configuration() => EXIT_CONFIG_ERROR,
        _ => EXIT_EXPORT_FAILED,
    }
}

fn print_summary(outcome: &ExportOutcome) {
    println!();
    println!("📊 Export Summary:");
    println!("  Run ID: {}", outcome.run_id);
    if let Some(dir) = &outcome.output_dir {
        println!("  Output Directory: {}", dir.display());
    }
    println!("  Selected Views: {}", outcome.selected_views);
    println!("  Exported: {}", outcome.exported.len());
    println!("  Failed: {}", outcome.failures.len());
    println!("  Duration: {:.2}s", outcome.duration.as_secs_f64());
    println!();

    if !outcome.exported.is_empty() {
        let verb = if outcome.dry_run { "Planned" } else { "Written" };
        println!("📁 {verb} files:");
        for file in &outcome.exported {
            println!("  - {} ({})", file.file_name, file.view.id);
        }
        println!();
    }

    if let Some(report) = &outcome.verification {
        println!("🔍 {}", report.format_summary());
    }

    if !outcome.failures.is_empty() {
        println!("⚠️  Failed views:");
        for failure in &outcome.failures {
            println!("  - {} ({}): {}", failure.view.name, failure.view.id, failure.error.message());
            if let Some(cause) = failure.error.cause() {
                println!("    Cause: {cause}");
            }
        }
        println!();
    }

    match &outcome.error {
        None => println!("✅ Export completed successfully!"),
        Some(e) if e.kind() == ErrorKind::EmptySelection => {
            println!("⚠️  Nothing to export: {}", e.message());
        }
        Some(e) => {
            println!("❌ Export failed: {e}");
            if let Some(cause) = e.cause() {
                println!("   Cause: {cause}");
            }
        }
    }
}
