//! Scene manifest loader
//!
//! Reads a JSON description of a document's elements and builds a
//! [`SceneDocument`] from it:
//!
//! ```json
//! {
//!   "title": "Office Tower",
//!   "elements": [
//!     { "id": "312", "name": "{3D}", "class": "view", "viewKind": "3d" },
//!     { "id": "313", "name": "Default", "class": "view", "viewKind": "3d", "isTemplate": true },
//!     { "id": "900", "name": "Basic Wall", "class": "Walls" }
//!   ]
//! }
//! ```

use super::document::SceneDocument;
use crate::domain::ids::ElementId;
use crate::domain::view::{Element, ViewKind};
use crate::domain::{FbxError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestFile {
    #[serde(default)]
    title: Option<String>,
    elements: Vec<ManifestElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestElement {
    id: String,
    #[serde(default)]
    name: String,
    class: String,
    #[serde(default)]
    view_kind: Option<String>,
    #[serde(default)]
    is_template: bool,
}

impl ManifestElement {
    fn into_element(self, position: usize) -> Result<Element> {
        let id = ElementId::new(self.id).map_err(|e| {
            FbxError::host_context(format!("Invalid element at position {position}")).with_cause(e)
        })?;

        if !self.class.eq_ignore_ascii_case("view") {
            if self.is_template {
                tracing::warn!(
                    element_id = %id,
                    class = %self.class,
                    "isTemplate is only meaningful for views; ignoring"
                );
            }
            return Ok(Element::other(id, self.name, self.class));
        }

        let kind = match self.view_kind.as_deref() {
            Some(kind) => ViewKind::from_str(kind).map_err(|e| {
                FbxError::host_context(format!("Invalid view kind for element '{id}'"))
                    .with_cause(e)
            })?,
            None => {
                tracing::warn!(element_id = %id, "View without viewKind; treating as 'other'");
                ViewKind::Other
            }
        };

        Ok(Element::view(id, self.name, kind, self.is_template))
    }
}

/// Parses a scene manifest from a JSON string
///
/// # Errors
///
/// Returns an `InvalidHostContext` error for malformed JSON, invalid element
/// ids or view kinds, and duplicate ids.
pub fn parse_scene_manifest(contents: &str, default_title: &str) -> Result<SceneDocument> {
    let manifest: ManifestFile = serde_json::from_str(contents)
        .map_err(|e| FbxError::host_context("Failed to parse scene manifest").with_cause(e))?;

    let title = manifest
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| default_title.to_string());

    let mut document = SceneDocument::new(title);
    for (position, raw) in manifest.elements.into_iter().enumerate() {
        document.push(raw.into_element(position)?)?;
    }

    Ok(document)
}

/// Loads a scene manifest file
///
/// The file stem is used as the document title when the manifest has none.
pub fn load_scene_manifest(path: impl AsRef<Path>) -> Result<SceneDocument> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        FbxError::host_context(format!("Failed to read scene manifest {}", path.display()))
            .with_cause(e)
    })?;

    let default_title = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());

    let document = parse_scene_manifest(&contents, &default_title)?;

    tracing::debug!(
        path = %path.display(),
        elements = document.len(),
        "Loaded scene manifest"
    );

    Ok(document)
}
