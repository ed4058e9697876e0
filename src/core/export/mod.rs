//! Export orchestration
//!
//! This module provides the core export logic:
//! - Export coordination and the per-view failure policy
//! - The run outcome and its message journal

pub mod coordinator;
pub mod outcome;

pub use coordinator::{ExportCoordinator, RunSettings};
pub use outcome::{ExportOutcome, ExportedFile, LogEntry, LogLevel, RunState, ViewFailure};
