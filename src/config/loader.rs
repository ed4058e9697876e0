//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AppConfig;
use crate::domain::errors::FbxError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "FBX_EXPORTER";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AppConfig
/// 4. Applies environment variable overrides (FBX_EXPORTER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a `ConfigurationMissingOrInvalid` error if the file cannot be
/// read or parsed, a referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use fbx_exporter::config::loader::load_config;
///
/// let config = load_config("fbx-exporter.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FbxError::configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FbxError::configuration(format!(
            "Failed to read configuration file {}",
            path.display()
        ))
        .with_cause(e)
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: AppConfig = toml::from_str(&contents)?;

    finish(config)
}

/// Loads the configuration file if one is given, otherwise uses defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: Option<&str>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => finish(AppConfig::default()),
    }
}

fn finish(mut config: AppConfig) -> Result<AppConfig> {
    apply_env_overrides(&mut config)?;

    config
        .validate()
        .map_err(|e| FbxError::configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| FbxError::configuration("Invalid substitution pattern").with_cause(e))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FbxError::configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    match env_override(key) {
        Some(val) => val.trim().parse::<bool>().map(Some).map_err(|_| {
            FbxError::configuration(format!(
                "{ENV_PREFIX}_{key} must be 'true' or 'false', got '{val}'"
            ))
        }),
        None => Ok(None),
    }
}

/// Applies environment variable overrides using the FBX_EXPORTER_* prefix
///
/// Variables follow the pattern `FBX_EXPORTER_<SECTION>_<KEY>`, for example
/// `FBX_EXPORTER_EXPORT_OUTPUT_DIR`.
fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("EXPORT_PARAMS_FILE") {
        config.export.params_file = val;
    }
    if let Some(val) = env_override("EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Some(val) = env_bool("EXPORT_STOP_ON_FIRST_ERROR")? {
        config.export.stop_on_first_error = val;
    }
    if let Some(val) = env_bool("EXPORT_VERIFY_OUTPUTS")? {
        config.export.verify_outputs = val;
    }

    if let Some(val) = env_override("EXPORTER_COMMAND") {
        config.exporter.command = Some(val);
    }

    if let Some(val) = env_bool("LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("FBX_LOADER_TEST_VAR", "fbx-writer");
        let input = "command = \"${FBX_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "command = \"fbx-writer\"\n");
        std::env::remove_var("FBX_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("FBX_LOADER_MISSING_VAR");
        let input = "command = \"${FBX_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.message().contains("FBX_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("FBX_LOADER_COMMENTED_VAR");
        let input = "# command = \"${FBX_LOADER_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[export]
output_dir = "exported"
stop_on_first_error = false

[exporter]
command = "fbx-writer"
args = ["--out", "{output}"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.export.output_dir, "exported");
        assert!(!config.export.stop_on_first_error);
        assert_eq!(config.exporter.command.as_deref(), Some("fbx-writer"));
        assert_eq!(config.exporter.args.len(), 2);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[export]\noutput_dir = \"../escape\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.message().contains("validation failed"));
    }
}
