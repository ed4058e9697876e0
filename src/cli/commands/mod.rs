//! CLI command implementations
//!
//! Every command returns the process exit code:
//! `0` success, `1` export failed, `2` configuration or parameter error.

pub mod export;
pub mod list;
pub mod validate;

/// Exit code for a successful command
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for a run that reached the export stage and failed
pub const EXIT_EXPORT_FAILED: i32 = 1;

/// Exit code for configuration, params or host context errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for fatal errors (logging setup, unexpected failures)
pub const EXIT_FATAL: i32 = 5;
