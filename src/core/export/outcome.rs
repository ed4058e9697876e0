//! Export outcome and run journal
//!
//! An [`ExportOutcome`] is the per-run aggregate handed back to the host. It
//! doubles as the run's append-only log: every line recorded through it is
//! also emitted through `tracing`, and recording never fails.

use crate::core::verification::VerificationReport;
use crate::domain::errors::{ErrorKind, FbxError};
use crate::domain::ids::RunId;
use crate::domain::view::ResolvedView;
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    ParamsLoaded,
    ViewsResolved,
    Exporting,
    Completed,
    Failed,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::ParamsLoaded => "params_loaded",
            Self::ViewsResolved => "views_resolved",
            Self::Exporting => "exporting",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Severity of a journal line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Error,
}

/// One line of the run journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            LogLevel::Trace => write!(f, "{}", self.message),
            LogLevel::Error => write!(f, "ERROR: {}", self.message),
        }
    }
}

/// A view the export capability reported as written
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub view: ResolvedView,
    pub file_name: String,
    pub path: PathBuf,
}

/// A view that failed to export while running in best-effort mode
#[derive(Debug, Clone)]
pub struct ViewFailure {
    pub view: ResolvedView,
    pub file_name: String,
    pub error: FbxError,
}

/// Result of one export run
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    pub state: RunState,

    /// Output directory, once it has been determined
    pub output_dir: Option<PathBuf>,

    /// Number of views selected for export
    pub selected_views: usize,

    pub exported: Vec<ExportedFile>,
    pub failures: Vec<ViewFailure>,

    /// Terminal error of a failed run
    pub error: Option<FbxError>,

    pub verification: Option<VerificationReport>,
    pub dry_run: bool,
    pub messages: Vec<LogEntry>,
}

impl ExportOutcome {
    /// Create a new outcome in the `Idle` state
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
            state: RunState::Idle,
            output_dir: None,
            selected_views: 0,
            exported: Vec::new(),
            failures: Vec::new(),
            error: None,
            verification: None,
            dry_run: false,
            messages: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record an informational line
    pub fn trace(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(run_id = %self.run_id, "{message}");
        self.messages.push(LogEntry {
            level: LogLevel::Trace,
            message,
        });
    }

    /// Record an error line
    pub fn error_line(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(run_id = %self.run_id, "{message}");
        self.messages.push(LogEntry {
            level: LogLevel::Error,
            message,
        });
    }

    /// Move to the next lifecycle state
    pub fn transition(&mut self, next: RunState) {
        tracing::debug!(run_id = %self.run_id, from = %self.state, to = %next, "Run state changed");
        self.state = next;
    }

    /// Record the terminal error and mark the run failed
    ///
    /// An empty selection is reported as a plain trace line, every other kind
    /// as an error with its cause.
    pub fn fail(&mut self, error: FbxError) {
        if error.kind() == ErrorKind::EmptySelection {
            self.trace(error.message().to_string());
        } else {
            self.error_line(format!("Error occurred [{}]", error.kind()));
            self.error_line(error.message().to_string());
            if let Some(cause) = error.cause() {
                self.error_line(cause.to_string());
            }
        }
        self.error = Some(error);
        self.transition(RunState::Failed);
    }

    /// Mark the run completed
    pub fn complete(&mut self) {
        self.transition(RunState::Completed);
    }

    /// Record a view reported as written
    pub fn add_exported(&mut self, file: ExportedFile) {
        self.exported.push(file);
    }

    /// Record a view that failed in best-effort mode
    pub fn add_failure(&mut self, failure: ViewFailure) {
        self.failures.push(failure);
    }

    /// Whether the run reached `Completed`
    pub fn is_successful(&self) -> bool {
        self.state == RunState::Completed
    }

    /// Kind of the terminal error, if the run failed
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(FbxError::kind)
    }

    /// Journal lines at error level
    pub fn errors(&self) -> impl Iterator<Item = &LogEntry> {
        self.messages.iter().filter(|m| m.level == LogLevel::Error)
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            state = %self.state,
            selected = self.selected_views,
            exported = self.exported.len(),
            failed = self.failures.len(),
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Export run finished"
        );

        if let Some(error) = &self.error {
            tracing::warn!(
                run_id = %self.run_id,
                kind = %error.kind(),
                message = %error.message(),
                "Export run failed"
            );
        }
    }
}
