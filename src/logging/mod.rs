//! Logging and observability
//!
//! Structured logging with configurable levels and optional local JSON file
//! logging with rotation.
//!
//! # Example
//!
//! ```no_run
//! use fbx_exporter::logging::init_logging;
//! use fbx_exporter::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
