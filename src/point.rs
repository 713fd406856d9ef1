//! Point elements: the parents angles hang off in the dependency graph.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

use crate::coords::Coords;
use crate::element::{ElementBase, ElementId, ElementKind, GeometryElement, PointLookup};
use crate::options::Options;
use crate::render::Renderer;

/// Recognised point attributes. Absent fields fall back to board options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointAttributes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub layer: Option<i64>,
    pub visible: Option<bool>,
}

/// Style properties copied from `options.point` at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointVisProp {
    pub stroke_color: String,
    pub fill_color: String,
}

#[derive(Debug, Clone)]
pub struct Point {
    base: ElementBase,
    coords: Coords,
    vis_prop: PointVisProp,
    hit_radius: f64,
    children: Vec<ElementId>,
}

impl Point {
    /// Build an unregistered point. The board assigns id and name on insert.
    #[must_use]
    pub fn new(coords: Coords, options: &Options, attrs: &PointAttributes) -> Self {
        let mut base = ElementBase::new(
            ElementKind::Point,
            attrs.layer.unwrap_or(options.layer.point),
            attrs.visible.unwrap_or(true),
        );
        base.id = ElementId::new(attrs.id.clone().unwrap_or_default());
        base.name = attrs.name.clone().unwrap_or_default();

        Self {
            base,
            coords,
            vis_prop: PointVisProp {
                stroke_color: options.point.stroke_color.clone(),
                fill_color: options.point.fill_color.clone(),
            },
            hit_radius: options.precision.has_point,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// Move the point. Dependents are re-dirtied by the board, not here.
    pub fn set_coords(&mut self, coords: Coords) {
        self.coords = coords;
        self.base.needs_update = true;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.base.name
    }

    #[must_use]
    pub fn vis_prop(&self) -> &PointVisProp {
        &self.vis_prop
    }

    /// Elements that depend on this point, in registration order.
    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Record `child` as a dependent. Registering the same child twice is a no-op.
    pub fn add_child(&mut self, child: ElementId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }
}

impl GeometryElement for Point {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn update_renderer(&mut self, _points: &dyn PointLookup, renderer: &mut dyn Renderer) {
        if self.base.visible && self.base.needs_update {
            renderer.update_point(self);
            self.base.needs_update = false;
        }
    }

    fn has_point(&self, x: f64, y: f64) -> bool {
        self.coords.distance(&Coords::new(x, y)) <= self.hit_radius
    }
}
