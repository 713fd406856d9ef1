//! Shared element plumbing: ids, kinds, common state, the element trait, errors.
//!
//! Every element on a board embeds an [`ElementBase`] and implements
//! [`GeometryElement`]. The board drives rendering through that trait and never
//! needs to know the concrete element type beyond its [`ElementKind`].

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::render::Renderer;

/// Board-unique element identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of a board element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Point,
    Angle,
}

impl ElementKind {
    /// Lowercase type name used in error messages and scene files.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Angle => "angle",
        }
    }
}

/// State every element carries regardless of kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementBase {
    /// Empty until the board registers the element.
    pub id: ElementId,
    /// Display name; generated by the board when empty.
    pub name: String,
    pub kind: ElementKind,
    /// Display-order hint; lower layers are drawn first.
    pub layer: i64,
    pub visible: bool,
    /// Dirty flag. Set by dependency updates, cleared by a render pass.
    pub needs_update: bool,
}

impl ElementBase {
    /// New, unregistered, dirty element state.
    #[must_use]
    pub fn new(kind: ElementKind, layer: i64, visible: bool) -> Self {
        Self { id: ElementId::default(), name: String::new(), kind, layer, visible, needs_update: true }
    }
}

/// Read-only access to the points of a board.
pub trait PointLookup {
    fn point(&self, id: &ElementId) -> Option<&Point>;
}

impl PointLookup for HashMap<ElementId, Point> {
    fn point(&self, id: &ElementId) -> Option<&Point> {
        self.get(id)
    }
}

/// Lookup that knows no points. Free elements render against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPoints;

impl PointLookup for NoPoints {
    fn point(&self, _id: &ElementId) -> Option<&Point> {
        None
    }
}

/// Operations shared by all renderable elements.
pub trait GeometryElement {
    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    /// Hand the element to `renderer` if it is dirty, then refresh any
    /// sub-objects that update on every pass.
    fn update_renderer(&mut self, points: &dyn PointLookup, renderer: &mut dyn Renderer);

    /// Whether the user-space position `(x, y)` hits the element.
    fn has_point(&self, x: f64, y: f64) -> bool;

    fn id(&self) -> &ElementId {
        &self.base().id
    }

    fn needs_update(&self) -> bool {
        self.base().needs_update
    }

    fn is_visible(&self) -> bool {
        self.base().visible
    }

    /// Show or hide the element. Hidden elements are skipped by the render
    /// pass and stay dirty, so showing one again redraws it.
    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
        self.mark_dirty();
    }

    /// Mark the element for redraw on the next render pass.
    fn mark_dirty(&mut self) {
        self.base_mut().needs_update = true;
    }
}

/// Errors raised while creating or mutating elements.
#[derive(Debug, thiserror::Error)]
pub enum ElementError {
    #[error("can't create {element} with parent types {}", quote_types(.types))]
    InvalidParent { element: &'static str, types: Vec<String> },
    #[error("element id already in use: {0}")]
    DuplicateId(ElementId),
    #[error("element not found: {0}")]
    NotFound(ElementId),
    #[error("unknown element type: {0}")]
    UnknownElementType(String),
    #[error("invalid attributes: {0}")]
    InvalidAttributes(#[from] serde_json::Error),
    #[error("invalid coordinates: ({x}, {y})")]
    InvalidCoordinates { x: f64, y: f64 },
}

impl ElementError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParent { .. } => "E_INVALID_PARENT",
            Self::DuplicateId(_) => "E_DUPLICATE_ID",
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::UnknownElementType(_) => "E_UNKNOWN_ELEMENT_TYPE",
            Self::InvalidAttributes(_) => "E_INVALID_ATTRIBUTES",
            Self::InvalidCoordinates { .. } => "E_INVALID_COORDINATES",
        }
    }
}

fn quote_types(types: &[String]) -> String {
    types
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(" and ")
}
