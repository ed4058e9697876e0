//! Integration tests for the scene manifest document adapter

mod common;

use common::{file_count, ScriptedExporter};
use fbx_exporter::adapters::host::Document;
use fbx_exporter::adapters::scene::load_scene_manifest;
use fbx_exporter::core::export::{ExportCoordinator, RunSettings};
use fbx_exporter::domain::{ElementId, ErrorKind};
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "title": "Office Tower",
  "elements": [
    { "id": "312", "name": "{3D}", "class": "view", "viewKind": "3d" },
    { "id": "313", "name": "Default", "class": "view", "viewKind": "3d", "isTemplate": true },
    { "id": "314", "name": "Level 1", "class": "view", "viewKind": "floor plan" },
    { "id": "900", "name": "Basic Wall", "class": "Walls" },
    { "id": "315", "name": "Default 3D View", "class": "view", "viewKind": "3d" }
  ]
}"#;

#[test]
fn test_manifest_drives_export() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("tower.json");
    fs::write(&manifest, MANIFEST).unwrap();
    fs::write(
        dir.path().join("params.json"),
        r#"{"exportAll": false, "viewIds": ["315", "312"]}"#,
    )
    .unwrap();

    let document = load_scene_manifest(&manifest).unwrap();
    assert_eq!(document.title(), "Office Tower");
    assert_eq!(document.len(), 5);

    let exporter = ScriptedExporter::new();
    let coordinator = ExportCoordinator::new(RunSettings::new(dir.path()), &exporter);
    let outcome = coordinator.execute_from_params_file(&document);

    assert!(outcome.is_successful());
    assert_eq!(exporter.exported_view_ids(), vec!["315", "312"]);
    assert_eq!(file_count(&dir.path().join("exportedFBXs")), 2);
}

#[test]
fn test_manifest_element_lookup() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("tower.json");
    fs::write(&manifest, MANIFEST).unwrap();

    let document = load_scene_manifest(&manifest).unwrap();
    let wall = document.element(&ElementId::new("900").unwrap()).unwrap();
    assert!(!wall.is_view_3d());
    assert!(document.element(&ElementId::new("1").unwrap()).is_none());
}

#[test]
fn test_manifest_errors_are_host_context() {
    let dir = TempDir::new().unwrap();

    let missing = load_scene_manifest(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::InvalidHostContext);

    let duplicate = dir.path().join("dup.json");
    fs::write(
        &duplicate,
        r#"{"elements": [
            {"id": "1", "name": "A", "class": "view", "viewKind": "3d"},
            {"id": "1", "name": "B", "class": "view", "viewKind": "3d"}
        ]}"#,
    )
    .unwrap();
    let err = load_scene_manifest(&duplicate).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidHostContext);
}
