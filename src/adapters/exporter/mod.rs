//! Export capability implementations
//!
//! - [`command`] - runs an external FBX writer per export call
//! - [`dry_run`] - records export calls without writing files

pub mod command;
pub mod dry_run;

pub use command::CommandExporter;
pub use dry_run::DryRunExporter;
