//! Integration tests for view name to file name conversion

use fbx_exporter::core::sanitize::{fbx_file_name, is_reserved, sanitize_file_stem};
use fbx_exporter::domain::{ElementId, ResolvedView};
use test_case::test_case;

fn view(id: &str, name: &str) -> ResolvedView {
    ResolvedView::new(ElementId::new(id).unwrap(), name)
}

#[test_case("Default 3D View", "Default 3D View.fbx" ; "plain name")]
#[test_case("{3D}", "_3D_.fbx" ; "braces")]
#[test_case("{3D - alice}", "_3D - alice_.fbx" ; "per user view")]
#[test_case("Section A/B", "Section AB.fbx" ; "slash")]
#[test_case("Level 1: North?", "Level 1 North.fbx" ; "colon and question mark")]
#[test_case("a<b>c|d*e\"f", "abcdef.fbx" ; "reserved characters")]
#[test_case("tab\there", "tabhere.fbx" ; "control character")]
fn test_fbx_file_name(name: &str, expected: &str) {
    assert_eq!(fbx_file_name(&view("1", name)), expected);
}

#[test_case("???" ; "only reserved")]
#[test_case("" ; "empty")]
#[test_case("  " ; "whitespace")]
fn test_fbx_file_name_fallback(name: &str) {
    assert_eq!(fbx_file_name(&view("312", name)), "view-312.fbx");
}

#[test_case("{3D}")]
#[test_case("a/b\\c:d")]
#[test_case("Level {1} | East")]
fn test_sanitize_is_idempotent(name: &str) {
    let once = sanitize_file_stem(name);
    assert_eq!(sanitize_file_stem(&once), once);
    assert!(!once.chars().any(is_reserved));
    assert!(!once.contains('{') && !once.contains('}'));
}
