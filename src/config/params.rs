//! Export parameter loading
//!
//! Reads the per-run `params.json`:
//!
//! ```json
//! { "exportAll": false, "viewIds": ["312457", "312460"], "stopOnFirstError": true }
//! ```
//!
//! Field presence is tracked explicitly. A missing `exportAll` means "export
//! the listed views only"; it is never silently turned into "export all".

use crate::domain::errors::FbxError;
use crate::domain::ids::ElementId;
use crate::domain::result::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParams {
    #[serde(default)]
    export_all: Option<bool>,

    #[serde(default)]
    view_ids: Option<Vec<String>>,

    #[serde(default)]
    stop_on_first_error: Option<bool>,

    #[serde(flatten)]
    unknown: Map<String, Value>,
}

/// Which views a run should export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSelection {
    /// Every non-template 3D view, in document order
    All,
    /// Exactly these views, in this order, duplicates kept
    Ids(Vec<ElementId>),
}

/// Validated export parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportParams {
    pub selection: ViewSelection,

    /// Per-run override of the failure policy
    pub stop_on_first_error: Option<bool>,

    /// Whether `exportAll` was present in the file
    pub export_all_specified: bool,
}

impl ExportParams {
    /// Parameters selecting every 3D view
    pub fn export_all() -> Self {
        Self {
            selection: ViewSelection::All,
            stop_on_first_error: None,
            export_all_specified: true,
        }
    }

    /// Parameters selecting an explicit list of views
    pub fn with_view_ids(ids: Vec<ElementId>) -> Self {
        Self {
            selection: ViewSelection::Ids(ids),
            stop_on_first_error: None,
            export_all_specified: true,
        }
    }

    pub fn is_export_all(&self) -> bool {
        matches!(self.selection, ViewSelection::All)
    }
}

/// Parses and validates export parameters from a JSON string
///
/// # Errors
///
/// Returns a `ConfigurationMissingOrInvalid` error when the content is not
/// valid JSON, is `null` or not an object, has fields of the wrong type, or
/// lists a blank view id.
pub fn parse_params(contents: &str) -> Result<ExportParams> {
    let raw: Option<RawParams> = serde_json::from_str(contents)
        .map_err(|e| FbxError::configuration("Invalid export parameters").with_cause(e))?;

    let raw = raw.ok_or_else(|| {
        FbxError::configuration("Export parameters are null; nothing to export")
    })?;

    if !raw.unknown.is_empty() {
        let keys: Vec<&str> = raw.unknown.keys().map(String::as_str).collect();
        tracing::warn!(fields = ?keys, "Ignoring unknown fields in export parameters");
    }

    let export_all_specified = raw.export_all.is_some();
    let raw_ids = raw.view_ids.unwrap_or_default();

    let selection = match raw.export_all {
        Some(true) => {
            if !raw_ids.is_empty() {
                tracing::warn!(
                    count = raw_ids.len(),
                    "exportAll is true; ignoring the listed viewIds"
                );
            }
            ViewSelection::All
        }
        other => {
            if other.is_none() {
                tracing::warn!("exportAll not set; exporting only the listed viewIds");
            }
            let ids = raw_ids
                .into_iter()
                .enumerate()
                .map(|(i, id)| {
                    ElementId::new(id).map_err(|e| {
                        FbxError::configuration(format!("Invalid entry viewIds[{i}]")).with_cause(e)
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            ViewSelection::Ids(ids)
        }
    };

    Ok(ExportParams {
        selection,
        stop_on_first_error: raw.stop_on_first_error,
        export_all_specified,
    })
}

/// Loads export parameters from a file
///
/// # Errors
///
/// Returns a `ConfigurationMissingOrInvalid` error if the file is missing or
/// unreadable, or if [`parse_params`] rejects its content.
pub fn load_params(path: impl AsRef<Path>) -> Result<ExportParams> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FbxError::configuration(format!(
            "Parameter file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FbxError::configuration(format!("Failed to read parameter file {}", path.display()))
            .with_cause(e)
    })?;

    let params = parse_params(&contents)?;

    tracing::info!(
        path = %path.display(),
        export_all = params.is_export_all(),
        "Loaded export parameters"
    );

    Ok(params)
}
