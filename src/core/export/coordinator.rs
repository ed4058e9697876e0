//! Export coordinator - main orchestrator for an export run
//!
//! The coordinator drives one run through its lifecycle: resolve the
//! requested views, create the output directory, call the export capability
//! once per view, then verify what was written. It owns no host state; the
//! document and the exporter are injected by the caller.

use crate::adapters::host::{Document, FbxExportOptions, SceneExporter, ViewSet};
use crate::config::params::{load_params, ExportParams, ViewSelection};
use crate::config::schema::ExportSettings;
use crate::core::export::outcome::{ExportOutcome, ExportedFile, RunState, ViewFailure};
use crate::core::sanitize::fbx_file_name;
use crate::core::select::select_views;
use crate::core::verification::verify_exports;
use crate::domain::errors::{ErrorKind, FbxError, HostError};
use crate::domain::ids::RunId;
use crate::domain::view::ResolvedView;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Settings for a single run, resolved from configuration and CLI flags
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Directory the params file and output directory are relative to
    pub working_dir: PathBuf,

    /// Params file, relative to `working_dir` unless absolute
    pub params_file: PathBuf,

    /// Name of the output directory under `working_dir`
    pub output_dir_name: String,

    /// Default failure policy; `stopOnFirstError` in the params file wins
    pub stop_on_first_error: bool,

    pub verify_outputs: bool,

    pub options: FbxExportOptions,
}

impl RunSettings {
    /// Settings with default values rooted at `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self::from_config(&ExportSettings::default(), working_dir)
    }

    /// Build run settings from the `[export]` configuration section
    pub fn from_config(config: &ExportSettings, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            params_file: PathBuf::from(&config.params_file),
            output_dir_name: config.output_dir.clone(),
            stop_on_first_error: config.stop_on_first_error,
            verify_outputs: config.verify_outputs,
            options: FbxExportOptions::default(),
        }
    }

    pub fn with_stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    pub fn with_verify_outputs(mut self, verify: bool) -> Self {
        self.verify_outputs = verify;
        self
    }

    pub fn with_output_dir_name(mut self, name: impl Into<String>) -> Self {
        self.output_dir_name = name.into();
        self
    }

    pub fn with_params_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.params_file = path.into();
        self
    }

    /// Absolute location of the output directory
    pub fn output_dir(&self) -> PathBuf {
        self.working_dir.join(&self.output_dir_name)
    }

    /// Location of the params file
    pub fn params_path(&self) -> PathBuf {
        if self.params_file.is_absolute() {
            self.params_file.clone()
        } else {
            self.working_dir.join(&self.params_file)
        }
    }
}

/// Export coordinator
pub struct ExportCoordinator<'a> {
    settings: RunSettings,
    exporter: &'a dyn SceneExporter,
}

impl<'a> ExportCoordinator<'a> {
    /// Create a new export coordinator
    pub fn new(settings: RunSettings, exporter: &'a dyn SceneExporter) -> Self {
        Self { settings, exporter }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Load the params file from the working directory and run the export
    ///
    /// A missing or invalid params file fails the run before anything is
    /// created on disk.
    pub fn execute_from_params_file(&self, document: &dyn Document) -> ExportOutcome {
        let start_time = Instant::now();
        let run_id = RunId::new();
        let span = tracing::info_span!("export_run", run_id = %run_id);
        let _enter = span.enter();

        let mut outcome = ExportOutcome::new(run_id);
        let params_path = self.settings.params_path();
        outcome.trace(format!("Reading export params from {}", params_path.display()));

        match load_params(&params_path) {
            Ok(params) => self.run(&mut outcome, &params, document),
            Err(e) => outcome.fail(e),
        }

        self.finish(outcome, start_time)
    }

    /// Run the export with already-parsed params
    ///
    /// This is the main entry point for the export process. It:
    /// 1. Resolves the requested views (all-or-nothing for explicit ids)
    /// 2. Creates the output directory
    /// 3. Exports each view to its own FBX file
    /// 4. Verifies the written files
    ///
    /// The outcome is always returned; failures are recorded in it.
    pub fn execute(&self, params: &ExportParams, document: &dyn Document) -> ExportOutcome {
        let start_time = Instant::now();
        let run_id = RunId::new();
        let span = tracing::info_span!("export_run", run_id = %run_id);
        let _enter = span.enter();

        let mut outcome = ExportOutcome::new(run_id);
        self.run(&mut outcome, params, document);
        self.finish(outcome, start_time)
    }

    fn finish(&self, outcome: ExportOutcome, start_time: Instant) -> ExportOutcome {
        let outcome = outcome.with_duration(start_time.elapsed());
        outcome.log_summary();
        outcome
    }

    fn run(&self, outcome: &mut ExportOutcome, params: &ExportParams, document: &dyn Document) {
        outcome.dry_run = !self.exporter.writes_files();
        outcome.transition(RunState::ParamsLoaded);
        outcome.trace(describe_params(params));

        let views = match select_views(params, document) {
            Ok(views) => views,
            Err(e) => {
                outcome.fail(e);
                return;
            }
        };
        outcome.selected_views = views.len();
        outcome.transition(RunState::ViewsResolved);

        let output_dir = self.settings.output_dir();
        outcome.output_dir = Some(output_dir.clone());
        if let Err(e) = self.ensure_output_dir(&output_dir, outcome.dry_run) {
            outcome.fail(e);
            return;
        }

        let stop_on_first_error = params
            .stop_on_first_error
            .unwrap_or(self.settings.stop_on_first_error);

        outcome.transition(RunState::Exporting);
        outcome.trace(format!(
            "Exporting {} view(s) from '{}' with {}",
            views.len(),
            document.title(),
            self.exporter.name()
        ));

        for (index, view) in views.iter().enumerate() {
            let file_name = fbx_file_name(view);

            tracing::debug!(
                view_id = %view.id,
                view_name = %view.name,
                file_name = %file_name,
                position = index + 1,
                total = views.len(),
                "Exporting view"
            );

            match self.export_one(document, &output_dir, &file_name, view) {
                Ok(()) => {
                    outcome.trace(format!("Exported '{}' to {}", view.name, file_name));
                    outcome.add_exported(ExportedFile {
                        view: view.clone(),
                        path: output_dir.join(&file_name),
                        file_name,
                    });
                }
                Err(error) if stop_on_first_error => {
                    let remaining = views.len() - index - 1;
                    if remaining > 0 {
                        tracing::warn!(remaining, "Aborting remaining views after export failure");
                    }
                    outcome.fail(error);
                    return;
                }
                Err(error) => {
                    outcome.error_line(error.message().to_string());
                    if let Some(cause) = error.cause() {
                        outcome.error_line(cause.to_string());
                    }
                    outcome.add_failure(ViewFailure {
                        view: view.clone(),
                        file_name,
                        error,
                    });
                }
            }
        }

        if self.settings.verify_outputs && !outcome.dry_run && !outcome.exported.is_empty() {
            let report = verify_exports(&outcome.exported);
            let verification_failures: Vec<String> = report
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.path.display(), f.reason))
                .collect();
            outcome.verification = Some(report);

            for line in &verification_failures {
                outcome.error_line(line.clone());
            }
            if !verification_failures.is_empty() && outcome.failures.is_empty() {
                outcome.fail(
                    FbxError::export_call(format!(
                        "{} exported file(s) missing or empty",
                        verification_failures.len()
                    ))
                    .with_cause("output verification failed"),
                );
                return;
            }
        }

        if !outcome.failures.is_empty() {
            let failed: Vec<&str> = outcome
                .failures
                .iter()
                .map(|f| f.file_name.as_str())
                .collect();
            let error = FbxError::export_call(format!(
                "{} of {} view(s) failed to export",
                outcome.failures.len(),
                views.len()
            ))
            .with_cause(failed.join(", "));
            outcome.fail(error);
            return;
        }

        outcome.complete();
    }

    fn ensure_output_dir(&self, output_dir: &Path, dry_run: bool) -> Result<(), FbxError> {
        if dry_run {
            tracing::info!(path = %output_dir.display(), "Dry run: output directory not created");
            return Ok(());
        }

        fs::create_dir_all(output_dir).map_err(|e| {
            FbxError::new(
                ErrorKind::DirectoryCreationFailure,
                format!("Failed to create output directory {}", output_dir.display()),
            )
            .with_cause(e)
        })
    }

    fn export_one(
        &self,
        document: &dyn Document,
        output_dir: &Path,
        file_name: &str,
        view: &ResolvedView,
    ) -> Result<(), FbxError> {
        let views = ViewSet::single(view.clone());
        self.exporter
            .export_views(document, output_dir, file_name, &views, &self.settings.options)
            .map_err(|e| {
                FbxError::export_call(format!(
                    "Failed to export view '{}' ({}) to {}",
                    view.name, view.id, file_name
                ))
                .with_cause(host_cause(&e))
            })
    }
}

fn host_cause(error: &HostError) -> String {
    match error.inner() {
        Some(inner) => format!("{error}: {inner}"),
        None => error.to_string(),
    }
}

fn describe_params(params: &ExportParams) -> String {
    match &params.selection {
        ViewSelection::All => "Export params: exportAll=true".to_string(),
        ViewSelection::Ids(ids) => format!("Export params: exportAll=false, {} view id(s)", ids.len()),
    }
}
