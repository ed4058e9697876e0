//! External command exporter
//!
//! Runs an external FBX writer as a child process once per export call.
//! Argument templates may contain the placeholders:
//!
//! | placeholder                | value                                        |
//! |----------------------------|----------------------------------------------|
//! | `{model}`                  | path of the source model                     |
//! | `{document}`               | document title                               |
//! | `{output_dir}`             | export directory                             |
//! | `{file_name}`              | output file name (`<view>.fbx`)              |
//! | `{output}`                 | full output path                             |
//! | `{view_id}`                | comma-separated ids of the exported views    |
//! | `{view_name}`              | comma-separated names of the exported views  |
//! | `{stop_on_error}`          | `true` / `false`                             |
//! | `{without_boundary_edges}` | `true` / `false`                             |

use crate::adapters::host::{Document, FbxExportOptions, SceneExporter, ViewSet};
use crate::config::schema::ExporterConfig;
use crate::domain::errors::HostError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

const MAX_STDERR_CHARS: usize = 2000;

/// Exporter that delegates each export call to an external program
#[derive(Debug, Clone)]
pub struct CommandExporter {
    command: String,
    args: Vec<String>,
    env_vars: HashMap<String, String>,
    model_path: PathBuf,
}

impl CommandExporter {
    /// Create a new command exporter
    pub fn new(command: impl Into<String>, args: Vec<String>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args,
            env_vars: HashMap::new(),
            model_path: model_path.into(),
        }
    }

    /// Create from the `[exporter]` configuration section
    ///
    /// Returns `None` when no command is configured.
    pub fn from_config(config: &ExporterConfig, model_path: impl Into<PathBuf>) -> Option<Self> {
        let command = config.command.as_deref()?.trim();
        if command.is_empty() {
            return None;
        }
        Some(
            Self::new(command, config.args.clone(), model_path)
                .with_env_vars(config.env.clone()),
        )
    }

    /// Environment variables set on every child process
    pub fn with_env_vars(mut self, env_vars: HashMap<String, String>) -> Self {
        self.env_vars = env_vars;
        self
    }

    /// Substitute template placeholders in the argument list
    pub fn substitute_args(
        &self,
        document: &dyn Document,
        export_dir: &Path,
        file_name: &str,
        views: &ViewSet,
        options: &FbxExportOptions,
    ) -> Vec<String> {
        let model = self.model_path.to_string_lossy();
        let output_dir = export_dir.to_string_lossy();
        let output = export_dir.join(file_name);
        let output = output.to_string_lossy();
        let view_ids = views
            .iter()
            .map(|v| v.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let view_names = views
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(",");

        self.args
            .iter()
            .map(|arg| {
                arg.replace("{model}", &model)
                    .replace("{document}", document.title())
                    .replace("{output_dir}", &output_dir)
                    .replace("{file_name}", file_name)
                    .replace("{output}", &output)
                    .replace("{view_id}", &view_ids)
                    .replace("{view_name}", &view_names)
                    .replace("{stop_on_error}", &options.stop_on_error.to_string())
                    .replace(
                        "{without_boundary_edges}",
                        &options.without_boundary_edges.to_string(),
                    )
            })
            .collect()
    }
}

impl SceneExporter for CommandExporter {
    fn name(&self) -> &str {
        &self.command
    }

    fn export_views(
        &self,
        document: &dyn Document,
        export_dir: &Path,
        file_name: &str,
        views: &ViewSet,
        options: &FbxExportOptions,
    ) -> Result<(), HostError> {
        if !export_dir.is_dir() {
            return Err(HostError::InvalidPathArgument {
                message: format!("Export directory does not exist: {}", export_dir.display()),
                inner: None,
            });
        }
        if views.is_empty() {
            return Err(HostError::Argument {
                message: "View set is empty".to_string(),
                inner: None,
            });
        }

        let args = self.substitute_args(document, export_dir, file_name, views, options);
        let start = Instant::now();

        tracing::debug!(
            command = %self.command,
            args = ?args,
            "Running exporter command"
        );

        let mut cmd = Command::new(&self.command);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().map_err(|e| {
            HostError::other(format!("Failed to start exporter command '{}'", self.command))
                .with_inner(e.to_string())
        })?;

        let duration_ms = start.elapsed().as_millis() as u64;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(HostError::invalid_operation(format!(
                "Exporter command '{}' exited with status {code}",
                self.command
            ))
            .with_inner(stderr.trim().chars().take(MAX_STDERR_CHARS).collect::<String>()));
        }

        tracing::debug!(
            command = %self.command,
            file_name = %file_name,
            duration_ms,
            "Exporter command finished"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scene::SceneDocument;
    use crate::domain::ids::ElementId;
    use crate::domain::view::ResolvedView;

    fn view_set() -> ViewSet {
        ViewSet::single(ResolvedView::new(ElementId::new("312").unwrap(), "{3D}"))
    }

    #[test]
    fn test_substitute_args() {
        let exporter = CommandExporter::new(
            "fbx-writer",
            vec![
                "--model".to_string(),
                "{model}".to_string(),
                "--view={view_id}".to_string(),
                "--out".to_string(),
                "{output}".to_string(),
                "--doc={document}".to_string(),
                "--edges={without_boundary_edges}".to_string(),
            ],
            "/models/tower.rvt",
        );
        let document = SceneDocument::new("Tower");
        let args = exporter.substitute_args(
            &document,
            Path::new("/work/exportedFBXs"),
            "_3D_.fbx",
            &view_set(),
            &FbxExportOptions::default(),
        );

        assert_eq!(args[1], "/models/tower.rvt");
        assert_eq!(args[2], "--view=312");
        assert_eq!(
            PathBuf::from(&args[4]),
            Path::new("/work/exportedFBXs").join("_3D_.fbx")
        );
        assert_eq!(args[5], "--doc=Tower");
        assert_eq!(args[6], "--edges=true");
    }

    #[test]
    fn test_from_config_without_command() {
        let config = ExporterConfig::default();
        assert!(CommandExporter::from_config(&config, "m.rvt").is_none());

        let config = ExporterConfig {
            command: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(CommandExporter::from_config(&config, "m.rvt").is_none());
    }

    #[test]
    fn test_from_config_with_command() {
        let config = ExporterConfig {
            command: Some("fbx-writer".to_string()),
            args: vec!["{output}".to_string()],
            env: HashMap::new(),
        };
        let exporter = CommandExporter::from_config(&config, "m.rvt").unwrap();
        assert_eq!(exporter.name(), "fbx-writer");
    }

    #[test]
    fn test_missing_export_dir() {
        let exporter = CommandExporter::new("fbx-writer", vec![], "m.rvt");
        let document = SceneDocument::new("Tower");
        let err = exporter
            .export_views(
                &document,
                Path::new("/definitely/not/here"),
                "a.fbx",
                &view_set(),
                &FbxExportOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, HostError::InvalidPathArgument { .. }));
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::TempDir::new().unwrap();
        let exporter = CommandExporter::new("no-such-fbx-writer-binary", vec![], "m.rvt");
        let document = SceneDocument::new("Tower");
        let err = exporter
            .export_views(
                &document,
                dir.path(),
                "a.fbx",
                &view_set(),
                &FbxExportOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, HostError::Other { .. }));
        assert!(err.inner().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_writes_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let exporter = CommandExporter::new(
            "sh",
            vec![
                "-c".to_string(),
                "printf FBX > \"$0\"".to_string(),
                "{output}".to_string(),
            ],
            "m.rvt",
        );
        let document = SceneDocument::new("Tower");

        exporter
            .export_views(
                &document,
                dir.path(),
                "_3D_.fbx",
                &view_set(),
                &FbxExportOptions::default(),
            )
            .unwrap();

        let written = std::fs::read(dir.path().join("_3D_.fbx")).unwrap();
        assert_eq!(written, b"FBX");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_non_zero_exit() {
        let dir = tempfile::TempDir::new().unwrap();
        let exporter = CommandExporter::new(
            "sh",
            vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()],
            "m.rvt",
        );
        let document = SceneDocument::new("Tower");

        let err = exporter
            .export_views(
                &document,
                dir.path(),
                "a.fbx",
                &view_set(),
                &FbxExportOptions::default(),
            )
            .unwrap_err();

        assert!(matches!(err, HostError::InvalidOperation { .. }));
        assert!(err.to_string().contains("status 3"));
        assert_eq!(err.inner(), Some("boom"));
        assert!(!dir.path().join("a.fbx").exists());
    }
}
