//! Readiness entry point for batch hosts
//!
//! A batch host signals that the model is open by handing over its readiness
//! data. The data is validated before any work starts; incomplete data fails
//! the run with `InvalidHostContext`.

use crate::adapters::host::Document;
use crate::core::export::{ExportCoordinator, ExportOutcome};
use crate::domain::errors::FbxError;
use crate::domain::ids::RunId;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of the host application that opened the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostApplication {
    pub name: String,
    pub version: Option<String>,
}

impl HostApplication {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl fmt::Display for HostApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

/// Readiness data handed over by the host
#[derive(Clone, Copy, Default)]
pub struct DesignAutomationData<'a> {
    pub application: Option<&'a HostApplication>,
    pub file_path: Option<&'a Path>,
    pub document: Option<&'a dyn Document>,
}

impl<'a> DesignAutomationData<'a> {
    pub fn new(
        application: &'a HostApplication,
        file_path: &'a Path,
        document: &'a dyn Document,
    ) -> Self {
        Self {
            application: Some(application),
            file_path: Some(file_path),
            document: Some(document),
        }
    }

    /// Returns the document once every piece of host context is present
    fn validate(&self) -> Result<(&'a HostApplication, PathBuf, &'a dyn Document), FbxError> {
        let application = self
            .application
            .ok_or_else(|| FbxError::host_context("Host application is not available"))?;

        let file_path = match self.file_path {
            Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => {
                path.to_path_buf()
            }
            _ => return Err(FbxError::host_context("Model file path is missing")),
        };

        let document = self
            .document
            .ok_or_else(|| FbxError::host_context("No document is open"))?;

        Ok((application, file_path, document))
    }
}

impl fmt::Debug for DesignAutomationData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignAutomationData")
            .field("application", &self.application)
            .field("file_path", &self.file_path)
            .field("document", &self.document.map(|d| d.title()))
            .finish()
    }
}

/// Handle the host's readiness signal
///
/// Returns the run outcome; the host's success flag is
/// [`ExportOutcome::is_successful`].
pub fn handle_ready(
    data: Option<&DesignAutomationData<'_>>,
    coordinator: &ExportCoordinator<'_>,
) -> ExportOutcome {
    tracing::info!("Design Automation ready event received");

    let validated = data
        .ok_or_else(|| FbxError::host_context("No readiness data supplied"))
        .and_then(|d| d.validate());

    match validated {
        Ok((application, file_path, document)) => {
            tracing::info!(
                application = %application,
                model = %file_path.display(),
                document = %document.title(),
                "Host context validated"
            );
            coordinator.execute_from_params_file(document)
        }
        Err(e) => {
            let mut outcome = ExportOutcome::new(RunId::new());
            outcome.fail(e);
            outcome.log_summary();
            outcome
        }
    }
}
