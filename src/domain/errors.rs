//! Domain error types
//!
//! Every failure of an export run is reported as a single [`FbxError`] that
//! carries an [`ErrorKind`], a message and, when the failure originated in
//! the host or the operating system, the underlying cause. All kinds are
//! terminal for the run.

use std::fmt;
use thiserror::Error;

/// Categorization of run failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Parameter or tool configuration is missing, malformed or invalid
    ConfigurationMissingOrInvalid,
    /// The host did not supply an application, model path or document
    InvalidHostContext,
    /// The output directory could not be created
    DirectoryCreationFailure,
    /// A requested view id is unknown, not a 3D view, or a template
    ViewResolutionFailure,
    /// The selection resolved to zero views
    EmptySelection,
    /// The external export capability reported an error
    ExportCallFailure,
}

impl ErrorKind {
    /// Stable identifier used in log lines and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationMissingOrInvalid => "CONFIGURATION_MISSING_OR_INVALID",
            Self::InvalidHostContext => "INVALID_HOST_CONTEXT",
            Self::DirectoryCreationFailure => "DIRECTORY_CREATION_FAILURE",
            Self::ViewResolutionFailure => "VIEW_RESOLUTION_FAILURE",
            Self::EmptySelection => "EMPTY_SELECTION",
            Self::ExportCallFailure => "EXPORT_CALL_FAILURE",
        }
    }

    /// Whether this kind is a configuration problem rather than an export problem
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissingOrInvalid | Self::InvalidHostContext
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type
///
/// This is the only error type returned by library operations.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct FbxError {
    kind: ErrorKind,
    message: String,
    cause: Option<String>,
}

impl FbxError {
    /// Creates an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the underlying cause message
    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigurationMissingOrInvalid, message)
    }

    pub fn host_context(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHostContext, message)
    }

    pub fn view_resolution(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ViewResolutionFailure, message)
    }

    pub fn empty_selection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptySelection, message)
    }

    pub fn export_call(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExportCallFailure, message)
    }

    /// Returns the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message without the kind prefix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause, if any
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

/// Errors reported by the host export capability
///
/// Host adapters return these; the coordinator wraps them into an
/// [`ErrorKind::ExportCallFailure`].
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// The export path was rejected
    #[error("Invalid path argument: {message}")]
    InvalidPathArgument {
        message: String,
        inner: Option<String>,
    },

    /// An argument (file name, view set, options) was rejected
    #[error("Invalid argument: {message}")]
    Argument {
        message: String,
        inner: Option<String>,
    },

    /// The host could not perform the export in its current state
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        message: String,
        inner: Option<String>,
    },

    /// Any other failure
    #[error("{message}")]
    Other {
        message: String,
        inner: Option<String>,
    },
}

impl HostError {
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
            inner: None,
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            inner: None,
        }
    }

    /// Attaches the inner error message reported by the host
    pub fn with_inner(mut self, detail: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidPathArgument { inner, .. }
            | Self::Argument { inner, .. }
            | Self::InvalidOperation { inner, .. }
            | Self::Other { inner, .. } => *inner = Some(detail.into()),
        }
        self
    }

    /// Returns the inner error message, if the host supplied one
    pub fn inner(&self) -> Option<&str> {
        match self {
            Self::InvalidPathArgument { inner, .. }
            | Self::Argument { inner, .. }
            | Self::InvalidOperation { inner, .. }
            | Self::Other { inner, .. } => inner.as_deref(),
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                HostError::InvalidPathArgument {
                    message: err.to_string(),
                    inner: None,
                }
            }
            _ => HostError::other(err.to_string()),
        }
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FbxError {
    fn from(err: serde_json::Error) -> Self {
        FbxError::configuration("Failed to parse JSON").with_cause(err)
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for FbxError {
    fn from(err: toml::de::Error) -> Self {
        FbxError::configuration("TOML parse error").with_cause(err)
    }
}
