//! File name sanitization
//!
//! View names are free text. They become file names by mapping braces to
//! underscores and dropping every character that is not allowed in a single
//! path component on the platforms the exporter runs on.

use crate::domain::view::ResolvedView;

/// Extension appended to every exported file
pub const FBX_EXTENSION: &str = "fbx";

const FALLBACK_STEM: &str = "view";

/// Characters removed from file names in addition to control characters
const RESERVED: &[char] = &['"', '<', '>', '|', '/', '\\', ':', '*', '?'];

/// Returns true if `c` may not appear in a file name
pub fn is_reserved(c: char) -> bool {
    c.is_control() || RESERVED.contains(&c)
}

/// Sanitizes a view name for use as a file stem
///
/// `{` and `}` become `_`; reserved characters are removed. The function is
/// idempotent.
///
/// # Examples
///
/// ```
/// use fbx_exporter::core::sanitize::sanitize_file_stem;
///
/// assert_eq!(sanitize_file_stem("{3D}"), "_3D_");
/// assert_eq!(sanitize_file_stem("Section A/B: \"North\""), "Section AB North");
/// ```
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            '{' | '}' => Some('_'),
            c if is_reserved(c) => None,
            c => Some(c),
        })
        .collect()
}

/// Derives the output file name for a view
///
/// Falls back to `view-<id>` when nothing usable is left of the name, and to
/// `view` when the id has nothing usable either.
pub fn fbx_file_name(view: &ResolvedView) -> String {
    let stem = sanitize_file_stem(&view.name);
    let stem = if is_unusable(&stem) {
        let id_stem = sanitize_file_stem(view.id.as_str());
        let fallback = if is_unusable(&id_stem) {
            FALLBACK_STEM.to_string()
        } else {
            format!("{FALLBACK_STEM}-{id_stem}")
        };
        tracing::warn!(
            view_id = %view.id,
            view_name = %view.name,
            file_stem = %fallback,
            "View name has no usable characters; using fallback file name"
        );
        fallback
    } else {
        stem
    };
    format!("{stem}.{FBX_EXTENSION}")
}

fn is_unusable(stem: &str) -> bool {
    stem.trim().is_empty() || stem.chars().all(|c| c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::ElementId;
    use test_case::test_case;

    #[test_case("Default 3D View", "Default 3D View" ; "plain name unchanged")]
    #[test_case("{3D}", "_3D_" ; "braces become underscores")]
    #[test_case("{3D - Jane}", "_3D - Jane_" ; "braces around text")]
    #[test_case("a<b>c", "abc" ; "angle brackets stripped")]
    #[test_case("pipe|quote\"", "pipequote" ; "pipe and quote stripped")]
    #[test_case("Level 1/2\\3", "Level 123" ; "separators stripped")]
    #[test_case("What? *Now*:", "What Now" ; "wildcards and colon stripped")]
    #[test_case("tab\there\nnewline", "tabherenewline" ; "control characters stripped")]
    #[test_case("Ansicht Süd", "Ansicht Süd" ; "non ascii kept")]
    fn test_sanitize_file_stem(input: &str, expected: &str) {
        assert_eq!(sanitize_file_stem(input), expected);
    }

    #[test_case("{3D}")]
    #[test_case("a<b>{c}|d:e")]
    #[test_case("__already_clean__")]
    #[test_case("")]
    fn test_sanitize_is_idempotent(input: &str) {
        let once = sanitize_file_stem(input);
        assert_eq!(sanitize_file_stem(&once), once);
    }

    #[test]
    fn test_sanitized_output_has_no_reserved_characters() {
        let input: String = (0u8..128).map(char::from).collect();
        let output = sanitize_file_stem(&input);
        assert!(!output.chars().any(is_reserved));
        assert!(!output.contains('{'));
        assert!(!output.contains('}'));
    }

    #[test]
    fn test_fbx_file_name() {
        let view = ResolvedView::new(ElementId::new("1").unwrap(), "{3D}");
        assert_eq!(fbx_file_name(&view), "_3D_.fbx");

        let view = ResolvedView::new(ElementId::new("2").unwrap(), "Default 3D View");
        assert_eq!(fbx_file_name(&view), "Default 3D View.fbx");
    }

    #[test]
    fn test_fbx_file_name_fallback() {
        let view = ResolvedView::new(ElementId::new("312457").unwrap(), "???");
        assert_eq!(fbx_file_name(&view), "view-312457.fbx");

        let view = ResolvedView::new(ElementId::new("9").unwrap(), "..");
        assert_eq!(fbx_file_name(&view), "view-9.fbx");
    }

    #[test_case("???" ; "reserved characters only")]
    #[test_case("..." ; "dots only")]
    #[test_case("<|>" ; "brackets and pipe")]
    fn test_fbx_file_name_unusable_id(id: &str) {
        let view = ResolvedView::new(ElementId::new(id).unwrap(), "???");
        assert_eq!(fbx_file_name(&view), "view.fbx");
    }
}
