//! Configuration management.
//!
//! Two inputs configure a run:
//!
//! - the per-run **export parameters** (`params.json`), loaded by [`params`],
//!   which select the views to export;
//! - the optional **tool configuration** (TOML), loaded by [`loader`], which
//!   controls output location, failure policy, the exporter command and
//!   logging.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! params_file = "params.json"
//! output_dir = "exportedFBXs"
//! stop_on_first_error = true
//! verify_outputs = true
//!
//! [exporter]
//! command = "${FBX_WRITER}"
//! args = ["--model", "{model}", "--view", "{view_id}", "--out", "{output}"]
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing, and any value
//! can be overridden with `FBX_EXPORTER_<SECTION>_<KEY>`:
//!
//! ```bash
//! export FBX_EXPORTER_EXPORT_OUTPUT_DIR="exported"
//! export FBX_EXPORTER_EXPORT_STOP_ON_FIRST_ERROR=false
//! ```

pub mod loader;
pub mod params;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use params::{load_params, parse_params, ExportParams, ViewSelection};
pub use schema::{AppConfig, ApplicationConfig, ExportSettings, ExporterConfig, LoggingConfig};
