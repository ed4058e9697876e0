//! Configuration schema types
//!
//! Structure of the optional TOML tool configuration. Every section has
//! defaults, so an empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Component, Path};

/// Main tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export run settings
    #[serde(default)]
    pub export: ExportSettings,

    /// External exporter command
    #[serde(default)]
    pub exporter: ExporterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.exporter.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Export run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Parameter file, relative to the working directory unless absolute
    #[serde(default = "default_params_file")]
    pub params_file: String,

    /// Name of the output directory created under the working directory
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Abort the remaining views after the first failed export
    #[serde(default = "default_true")]
    pub stop_on_first_error: bool,

    /// Check that every exported file exists and is non-empty after the run
    #[serde(default = "default_true")]
    pub verify_outputs: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            params_file: default_params_file(),
            output_dir: default_output_dir(),
            stop_on_first_error: true,
            verify_outputs: true,
        }
    }
}

impl ExportSettings {
    fn validate(&self) -> Result<(), String> {
        if self.params_file.trim().is_empty() {
            return Err("export.params_file cannot be empty".to_string());
        }
        validate_output_dir(&self.output_dir)
    }
}

/// Checks that an output directory name is a single relative path component
pub fn validate_output_dir(output_dir: &str) -> Result<(), String> {
    if output_dir.trim().is_empty() {
        return Err("export.output_dir cannot be empty".to_string());
    }
    let mut components = Path::new(output_dir).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(format!(
            "export.output_dir '{output_dir}' must be a single directory name, not a path"
        )),
    }
}

/// External exporter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Program to run for each export call
    #[serde(default)]
    pub command: Option<String>,

    /// Argument template; see the command exporter for placeholders
    #[serde(default)]
    pub args: Vec<String>,

    /// Extra environment variables for the exporter process
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl ExporterConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(command) = &self.command {
            if command.trim().is_empty() {
                return Err("exporter.command cannot be blank when set".to_string());
            }
        }
        if self.command.is_none() && !self.args.is_empty() {
            return Err("exporter.args is set but exporter.command is missing".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON log files in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_params_file() -> String {
    "params.json".to_string()
}

fn default_output_dir() -> String {
    "exportedFBXs".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
