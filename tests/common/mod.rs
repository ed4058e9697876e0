//! Shared fixtures for integration tests

#![allow(dead_code)]

use fbx_exporter::adapters::host::{Document, FbxExportOptions, SceneExporter, ViewSet};
use fbx_exporter::adapters::scene::SceneDocument;
use fbx_exporter::domain::{Element, ElementId, HostError, ViewKind};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds an in-memory document element by element
pub struct DocumentBuilder {
    title: String,
    elements: Vec<Element>,
}

impl DocumentBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            elements: Vec::new(),
        }
    }

    pub fn view_3d(mut self, id: &str, name: &str) -> Self {
        self.elements.push(Element::view_3d(element_id(id), name, false));
        self
    }

    pub fn template_3d(mut self, id: &str, name: &str) -> Self {
        self.elements.push(Element::view_3d(element_id(id), name, true));
        self
    }

    pub fn floor_plan(mut self, id: &str, name: &str) -> Self {
        self.elements
            .push(Element::view(element_id(id), name, ViewKind::FloorPlan, false));
        self
    }

    pub fn wall(mut self, id: &str, name: &str) -> Self {
        self.elements.push(Element::other(element_id(id), name, "Walls"));
        self
    }

    pub fn build(self) -> SceneDocument {
        SceneDocument::from_elements(self.title, self.elements).unwrap()
    }
}

pub fn element_id(id: &str) -> ElementId {
    ElementId::new(id).unwrap()
}

pub fn element_ids(ids: &[&str]) -> Vec<ElementId> {
    ids.iter().map(|id| element_id(id)).collect()
}

/// Exporter that writes a small file per call and can fail on the k-th call
pub struct ScriptedExporter {
    fail_at: Option<usize>,
    calls: Cell<usize>,
    written: RefCell<Vec<PathBuf>>,
    view_ids: RefCell<Vec<String>>,
    write_empty: bool,
}

impl ScriptedExporter {
    pub fn new() -> Self {
        Self {
            fail_at: None,
            calls: Cell::new(0),
            written: RefCell::new(Vec::new()),
            view_ids: RefCell::new(Vec::new()),
            write_empty: false,
        }
    }

    /// Fails the `k`-th call (1-based) without writing a file
    pub fn failing_at(k: usize) -> Self {
        Self {
            fail_at: Some(k),
            ..Self::new()
        }
    }

    /// Reports success but leaves empty files behind
    pub fn writing_empty_files() -> Self {
        Self {
            write_empty: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.written.borrow().clone()
    }

    /// View ids in the order they were exported
    pub fn exported_view_ids(&self) -> Vec<String> {
        self.view_ids.borrow().clone()
    }
}

impl SceneExporter for ScriptedExporter {
    fn name(&self) -> &str {
        "scripted"
    }

    fn export_views(
        &self,
        document: &dyn Document,
        export_dir: &Path,
        file_name: &str,
        views: &ViewSet,
        _options: &FbxExportOptions,
    ) -> Result<(), HostError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        if self.fail_at == Some(call) {
            return Err(HostError::invalid_operation(format!("Export of call {call} failed"))
                .with_inner("simulated host failure"));
        }

        let path = export_dir.join(file_name);
        let content = if self.write_empty {
            String::new()
        } else {
            format!("; FBX 7.4.0 project file\n; {}\n", document.title())
        };
        fs::write(&path, content)?;

        self.written.borrow_mut().push(path);
        self.view_ids
            .borrow_mut()
            .extend(views.iter().map(|v| v.id.to_string()));
        Ok(())
    }
}

/// Number of regular files in a directory, zero if it does not exist
pub fn file_count(dir: &Path) -> usize {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .count(),
        Err(_) => 0,
    }
}
