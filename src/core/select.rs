//! View selection
//!
//! Resolves export parameters against a document into the ordered list of
//! views to export. Explicit id lists are validated all-or-nothing: a single
//! bad id fails the whole selection.

use crate::adapters::host::Document;
use crate::config::params::{ExportParams, ViewSelection};
use crate::domain::ids::ElementId;
use crate::domain::view::{Element, ResolvedView};
use crate::domain::{FbxError, Result};

/// Resolves the views to export
///
/// # Errors
///
/// - `ViewResolutionFailure` if a requested id is unknown, is not a 3D view,
///   or is a view template
/// - `EmptySelection` if nothing is left to export
pub fn select_views(params: &ExportParams, document: &dyn Document) -> Result<Vec<ResolvedView>> {
    let views = match &params.selection {
        ViewSelection::All => select_all(document),
        ViewSelection::Ids(ids) => select_ids(ids, document)?,
    };

    if views.is_empty() {
        let reason = match &params.selection {
            ViewSelection::All => format!(
                "Document '{}' contains no non-template 3D views",
                document.title()
            ),
            ViewSelection::Ids(_) => "No view ids were requested".to_string(),
        };
        return Err(FbxError::empty_selection(format!(
            "No 3D views to be exported: {reason}"
        )));
    }

    tracing::info!(
        document = %document.title(),
        count = views.len(),
        "Resolved views for export"
    );

    Ok(views)
}

/// Every non-template 3D view in document order
pub fn select_all(document: &dyn Document) -> Vec<ResolvedView> {
    document
        .collect_where(&|e: &Element| e.is_exportable())
        .into_iter()
        .map(ResolvedView::from)
        .collect()
}

fn select_ids(ids: &[ElementId], document: &dyn Document) -> Result<Vec<ResolvedView>> {
    ids.iter()
        .map(|id| resolve_view(id, document))
        .collect()
}

/// Resolves a single id to an exportable view
pub fn resolve_view(id: &ElementId, document: &dyn Document) -> Result<ResolvedView> {
    let element = document.element(id).ok_or_else(|| {
        FbxError::view_resolution(format!(
            "View '{id}' not found in document '{}'",
            document.title()
        ))
    })?;

    if !element.is_view_3d() {
        return Err(FbxError::view_resolution(format!(
            "Element '{id}' ('{}') is a {}, not a 3D view",
            element.name,
            element.describe_class()
        )));
    }

    if element.is_template() {
        return Err(FbxError::view_resolution(format!(
            "View '{id}' ('{}') is a view template and cannot be exported",
            element.name
        )));
    }

    Ok(ResolvedView::from(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scene::SceneDocument;
    use crate::domain::errors::ErrorKind;
    use crate::domain::view::ViewKind;

    fn id(s: &str) -> ElementId {
        ElementId::new(s).unwrap()
    }

    fn document() -> SceneDocument {
        SceneDocument::from_elements(
            "Tower",
            vec![
                Element::view_3d(id("10"), "{3D}", false),
                Element::view_3d(id("11"), "3D Template", true),
                Element::view(id("12"), "Level 1", ViewKind::FloorPlan, false),
                Element::other(id("13"), "Basic Wall", "Walls"),
                Element::view_3d(id("14"), "Default 3D View", false),
            ],
        )
        .unwrap()
    }

    fn names(views: &[ResolvedView]) -> Vec<&str> {
        views.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_select_all_skips_templates_and_other_kinds() {
        let views = select_views(&ExportParams::export_all(), &document()).unwrap();
        assert_eq!(names(&views), vec!["{3D}", "Default 3D View"]);
    }

    #[test]
    fn test_select_ids_in_requested_order_with_duplicates() {
        let params = ExportParams::with_view_ids(vec![id("14"), id("10"), id("14")]);
        let views = select_views(&params, &document()).unwrap();
        assert_eq!(names(&views), vec!["Default 3D View", "{3D}", "Default 3D View"]);
    }

    #[test]
    fn test_select_unknown_id() {
        let params = ExportParams::with_view_ids(vec![id("10"), id("999")]);
        let err = select_views(&params, &document()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ViewResolutionFailure);
        assert!(err.message().contains("999"));
    }

    #[test]
    fn test_select_template_id() {
        let params = ExportParams::with_view_ids(vec![id("11")]);
        let err = select_views(&params, &document()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ViewResolutionFailure);
        assert!(err.message().contains("template"));
    }

    #[test]
    fn test_select_wrong_type_ids() {
        for bad in ["12", "13"] {
            let params = ExportParams::with_view_ids(vec![id("10"), id(bad)]);
            let err = select_views(&params, &document()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ViewResolutionFailure);
            assert!(err.message().contains("not a 3D view"));
        }
    }

    #[test]
    fn test_select_empty_id_list() {
        let params = ExportParams::with_view_ids(vec![]);
        let err = select_views(&params, &document()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySelection);
    }

    #[test]
    fn test_select_all_on_document_without_views() {
        let doc = SceneDocument::from_elements(
            "Empty",
            vec![
                Element::view_3d(id("1"), "T", true),
                Element::other(id("2"), "Wall", "Walls"),
            ],
        )
        .unwrap();
        let err = select_views(&ExportParams::export_all(), &doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySelection);
    }
}
