//! Host abstraction traits
//!
//! These traits define the surface the coordinator consumes from the host
//! application: a queryable document of typed elements and a capability that
//! writes a set of views to an FBX file. The coordinator never implements
//! either; it only orchestrates calls into them.

use crate::domain::errors::HostError;
use crate::domain::ids::ElementId;
use crate::domain::view::{Element, ResolvedView};
use std::path::Path;

/// Fixed options forwarded to the FBX export capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FbxExportOptions {
    /// Ask the host exporter to stop at its first internal error
    pub stop_on_error: bool,

    /// Omit boundary edges from the exported geometry
    pub without_boundary_edges: bool,
}

impl Default for FbxExportOptions {
    fn default() -> Self {
        Self {
            stop_on_error: true,
            without_boundary_edges: true,
        }
    }
}

/// Ordered set of views handed to one export call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSet {
    views: Vec<ResolvedView>,
}

impl ViewSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single view
    pub fn single(view: ResolvedView) -> Self {
        Self { views: vec![view] }
    }

    pub fn insert(&mut self, view: ResolvedView) {
        self.views.push(view);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedView> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Queryable host document
///
/// Enumeration order is the host's natural order and is preserved by every
/// consumer.
pub trait Document {
    /// Document title, used in log lines
    fn title(&self) -> &str;

    /// Iterates over every element in natural enumeration order
    fn elements(&self) -> Box<dyn Iterator<Item = &Element> + '_>;

    /// Looks up an element by id
    fn element(&self, id: &ElementId) -> Option<&Element>;

    /// Collects the elements matching `predicate`, preserving enumeration order
    fn collect_where(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements().filter(|e| predicate(*e)).collect()
    }
}

/// External "export views to FBX" capability
///
/// Implementations write `<export_dir>/<file_name>` and return a [`HostError`]
/// on any failure. Calls are blocking.
pub trait SceneExporter {
    /// Human-readable name of the exporter, used in log lines
    fn name(&self) -> &str;

    /// Exports `views` of `document` into a single FBX file
    fn export_views(
        &self,
        document: &dyn Document,
        export_dir: &Path,
        file_name: &str,
        views: &ViewSet,
        options: &FbxExportOptions,
    ) -> Result<(), HostError>;

    /// Whether this exporter writes files to disk
    ///
    /// Post-export verification is skipped for exporters that do not.
    fn writes_files(&self) -> bool {
        true
    }
}
