//! In-memory scene document
//!
//! A [`Document`] implementation backed by an ordered element list with an
//! id index. The scene manifest loader produces one of these; tests build
//! them directly.

use crate::adapters::host::Document;
use crate::domain::ids::ElementId;
use crate::domain::view::Element;
use crate::domain::{FbxError, Result};
use std::collections::HashMap;

/// Ordered, indexed collection of document elements
#[derive(Debug, Clone, Default)]
pub struct SceneDocument {
    title: String,
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
}

impl SceneDocument {
    /// Creates an empty document
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a document from elements in enumeration order
    ///
    /// # Errors
    ///
    /// Returns an `InvalidHostContext` error if two elements share an id.
    pub fn from_elements(
        title: impl Into<String>,
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Self> {
        let mut document = Self::new(title);
        for element in elements {
            document.push(element)?;
        }
        Ok(document)
    }

    /// Appends an element at the end of the enumeration order
    pub fn push(&mut self, element: Element) -> Result<()> {
        if self.index.contains_key(&element.id) {
            return Err(FbxError::host_context(format!(
                "Duplicate element id '{}' in document '{}'",
                element.id, self.title
            )));
        }
        self.index.insert(element.id.clone(), self.elements.len());
        self.elements.push(element);
        Ok(())
    }

    /// Builder-style variant of [`SceneDocument::push`]
    pub fn with_element(mut self, element: Element) -> Result<Self> {
        self.push(element)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Document for SceneDocument {
    fn title(&self) -> &str {
        &self.title
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        Box::new(self.elements.iter())
    }

    fn element(&self, id: &ElementId) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;
    use crate::domain::view::ViewKind;

    fn id(s: &str) -> ElementId {
        ElementId::new(s).unwrap()
    }

    #[test]
    fn test_lookup_and_order() {
        let doc = SceneDocument::from_elements(
            "model",
            vec![
                Element::view_3d(id("3"), "C", false),
                Element::view_3d(id("1"), "A", false),
                Element::other(id("2"), "Wall", "Walls"),
            ],
        )
        .unwrap();

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.title(), "model");
        let names: Vec<&str> = doc.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "Wall"]);
        assert_eq!(doc.element(&id("2")).map(|e| e.name.as_str()), Some("Wall"));
        assert!(doc.element(&id("99")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = SceneDocument::new("model")
            .with_element(Element::view_3d(id("1"), "A", false))
            .unwrap()
            .with_element(Element::view_3d(id("1"), "B", false))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHostContext);
    }

    #[test]
    fn test_collect_where() {
        let doc = SceneDocument::from_elements(
            "model",
            vec![
                Element::view_3d(id("1"), "A", false),
                Element::view(id("2"), "Plan", ViewKind::FloorPlan, false),
                Element::view_3d(id("3"), "T", true),
            ],
        )
        .unwrap();

        let views = doc.collect_where(&|e: &Element| e.is_view_3d());
        assert_eq!(views.len(), 2);
        assert!(doc.collect_where(&|_: &Element| false).is_empty());
    }
}
