//! Text label attached to an angle.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use serde::Serialize;

use crate::consts::LABEL_ID_SUFFIX;
use crate::coords::Coords;
use crate::element::ElementId;

/// The label sub-object. Its position is the owner's label anchor shifted by
/// `relative_coords`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    id: ElementId,
    content: String,
    coords: Coords,
    relative_coords: Coords,
    visible: bool,
    layer: i64,
}

impl Label {
    #[must_use]
    pub fn new(content: impl Into<String>, visible: bool, layer: i64) -> Self {
        Self {
            id: ElementId::default(),
            content: content.into(),
            coords: Coords::origin(),
            relative_coords: Coords::origin(),
            visible,
            layer,
        }
    }

    /// Derive the label id from its owner's id.
    pub fn attach_to(&mut self, owner: &ElementId) {
        self.id = ElementId::new(format!("{owner}{LABEL_ID_SUFFIX}"));
    }

    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn coords(&self) -> Coords {
        self.coords
    }

    #[must_use]
    pub fn relative_coords(&self) -> Coords {
        self.relative_coords
    }

    pub fn set_relative_coords(&mut self, offset: Coords) {
        self.relative_coords = offset;
    }

    pub fn reset_relative_coords(&mut self) {
        self.relative_coords = Coords::origin();
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn layer(&self) -> i64 {
        self.layer
    }

    /// Reposition relative to `anchor`.
    pub fn update(&mut self, anchor: Coords) {
        self.coords = anchor.translate(&self.relative_coords);
    }
}
