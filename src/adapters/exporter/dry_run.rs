//! Dry-run exporter
//!
//! Records every export call without writing anything.

use crate::adapters::host::{Document, FbxExportOptions, SceneExporter, ViewSet};
use crate::domain::errors::HostError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct DryRunExporter {
    planned: RefCell<Vec<PathBuf>>,
}

impl DryRunExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output paths that would have been written, in call order
    pub fn planned(&self) -> Vec<PathBuf> {
        self.planned.borrow().clone()
    }
}

impl SceneExporter for DryRunExporter {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn export_views(
        &self,
        document: &dyn Document,
        export_dir: &Path,
        file_name: &str,
        views: &ViewSet,
        _options: &FbxExportOptions,
    ) -> Result<(), HostError> {
        let path = export_dir.join(file_name);
        tracing::info!(
            document = %document.title(),
            views = views.len(),
            path = %path.display(),
            "Dry run: skipping FBX export"
        );
        self.planned.borrow_mut().push(path);
        Ok(())
    }

    fn writes_files(&self) -> bool {
        false
    }
}
