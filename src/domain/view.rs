//! Document elements and views
//!
//! The host document is a flat collection of typed elements. Only elements of
//! the view class with kind [`ViewKind::ThreeD`] that are not templates can be
//! exported.

use super::ids::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a view element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    ThreeD,
    FloorPlan,
    CeilingPlan,
    Elevation,
    Section,
    Sheet,
    Schedule,
    Drafting,
    Legend,
    Other,
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "3d" | "three_d" | "threed" | "view3d" => Ok(Self::ThreeD),
            "floor_plan" | "floorplan" => Ok(Self::FloorPlan),
            "ceiling_plan" | "ceilingplan" => Ok(Self::CeilingPlan),
            "elevation" => Ok(Self::Elevation),
            "section" => Ok(Self::Section),
            "sheet" => Ok(Self::Sheet),
            "schedule" => Ok(Self::Schedule),
            "drafting" => Ok(Self::Drafting),
            "legend" => Ok(Self::Legend),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown view kind '{s}'")),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ThreeD => "3d",
            Self::FloorPlan => "floor_plan",
            Self::CeilingPlan => "ceiling_plan",
            Self::Elevation => "elevation",
            Self::Section => "section",
            Self::Sheet => "sheet",
            Self::Schedule => "schedule",
            Self::Drafting => "drafting",
            Self::Legend => "legend",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Class of a document element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementClass {
    /// A view; templates are configuration-only views
    View { kind: ViewKind, is_template: bool },
    /// Any non-view element (walls, levels, families, ...)
    Other { category: String },
}

/// An element of the host document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub class: ElementClass,
}

impl Element {
    /// Creates a 3D view element
    pub fn view_3d(id: ElementId, name: impl Into<String>, is_template: bool) -> Self {
        Self::view(id, name, ViewKind::ThreeD, is_template)
    }

    /// Creates a view element of any kind
    pub fn view(id: ElementId, name: impl Into<String>, kind: ViewKind, is_template: bool) -> Self {
        Self {
            id,
            name: name.into(),
            class: ElementClass::View { kind, is_template },
        }
    }

    /// Creates a non-view element
    pub fn other(id: ElementId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            class: ElementClass::Other {
                category: category.into(),
            },
        }
    }

    /// True for 3D views, templates included
    pub fn is_view_3d(&self) -> bool {
        matches!(
            self.class,
            ElementClass::View {
                kind: ViewKind::ThreeD,
                ..
            }
        )
    }

    /// True for view templates of any kind
    pub fn is_template(&self) -> bool {
        matches!(
            self.class,
            ElementClass::View {
                is_template: true,
                ..
            }
        )
    }

    /// True for 3D views that are not templates
    pub fn is_exportable(&self) -> bool {
        self.is_view_3d() && !self.is_template()
    }

    /// Short description of the element's type for diagnostics
    pub fn describe_class(&self) -> String {
        match &self.class {
            ElementClass::View { kind, is_template } if *is_template => {
                format!("{kind} view template")
            }
            ElementClass::View { kind, .. } => format!("{kind} view"),
            ElementClass::Other { category } => category.clone(),
        }
    }
}

/// A view selected for export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedView {
    pub id: ElementId,
    pub name: String,
}

impl ResolvedView {
    pub fn new(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<&Element> for ResolvedView {
    fn from(element: &Element) -> Self {
        Self::new(element.id.clone(), element.name.clone())
    }
}
