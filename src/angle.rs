//! The angle element: a sector at `B` spanning from ray `BA` to ray `BC`.
//!
//! DESIGN
//! ======
//! An angle keeps only the ids of its three points. Coordinates are resolved
//! through a [`PointLookup`] on every render pass and bundled into an
//! [`AngleFrame`], so the angle never holds stale positions and never reaches
//! into point internals. Registration (id assignment and parent -> child links)
//! goes through the [`Registry`] the angle is created on.
//!
//! LABEL PLACEMENT
//! ===============
//! The label sits `radius / 2` away from the vertex, on leg `BA` rotated by
//! `true_angle * π / 320` (see [`LABEL_ROTATION_DIVISOR`]). A collapsed leg
//! (`A == B`) has no direction, so the label falls back to the vertex.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::algebra;
use crate::board::Registry;
use crate::consts::LABEL_ROTATION_DIVISOR;
use crate::coords::Coords;
use crate::element::{ElementBase, ElementError, ElementId, ElementKind, GeometryElement, PointLookup};
use crate::namer;
use crate::options::AngleOptions;
use crate::render::Renderer;
use crate::text::Label;

// =============================================================
// Types
// =============================================================

/// Recognised angle attributes. Absent fields fall back to board options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AngleAttributes {
    pub radius: Option<f64>,
    /// Empty or absent picks an unused Greek letter.
    pub text: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub with_label: Option<bool>,
    pub layer: Option<i64>,
    pub visible: Option<bool>,
}

/// Style properties copied from `options.angle` at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleVisProp {
    pub fill_color: String,
    pub highlight_fill_color: String,
    pub fill_opacity: f64,
    pub highlight_fill_opacity: f64,
    pub stroke_color: String,
}

impl AngleVisProp {
    #[must_use]
    pub fn from_options(options: &AngleOptions) -> Self {
        Self {
            fill_color: options.fill_color.clone(),
            highlight_fill_color: options.highlight_fill_color.clone(),
            fill_opacity: options.fill_opacity,
            highlight_fill_opacity: options.highlight_fill_opacity,
            stroke_color: options.stroke_color.clone(),
        }
    }
}

/// Resolved coordinates of the three defining points for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleFrame {
    pub point1: Coords,
    pub point2: Coords,
    pub point3: Coords,
}

impl AngleFrame {
    /// Counter-clockwise measure in degrees, `[0, 360)`.
    #[must_use]
    pub fn true_angle(&self) -> f64 {
        algebra::true_angle(&self.point1, &self.point2, &self.point3)
    }

    #[must_use]
    pub fn is_real(&self) -> bool {
        algebra::is_real(&self.point1, &self.point2, &self.point3)
    }

    /// Direction of leg `BA` in degrees, where the sector starts.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        (self.point1.y() - self.point2.y())
            .atan2(self.point1.x() - self.point2.x())
            .to_degrees()
    }
}

/// An angle `ABC` visualised as a sector with an optional label.
#[derive(Debug, Clone)]
pub struct Angle {
    base: ElementBase,
    point1: ElementId,
    point2: ElementId,
    point3: ElementId,
    radius: f64,
    text: String,
    vis_prop: AngleVisProp,
    label: Option<Label>,
}

// =============================================================
// Construction
// =============================================================

impl Angle {
    /// Create an angle on `registry` and link it as a child of all three points.
    ///
    /// Parents are not validated here; callers go through
    /// [`crate::factory::create_angle`], which rejects non-point parents.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if `attrs.id` is already taken on the registry.
    pub fn create<R: Registry + ?Sized>(
        registry: &mut R,
        point1: &ElementId,
        point2: &ElementId,
        point3: &ElementId,
        attrs: &AngleAttributes,
    ) -> Result<ElementId, ElementError> {
        let angle = {
            let options = registry.options();
            let text = namer::resolve_text(attrs.text.as_deref().unwrap_or(""), registry.angle_texts());
            let with_label = attrs.with_label.unwrap_or(options.angle.with_label);
            let visible = attrs.visible.unwrap_or(true);

            let mut base = ElementBase::new(ElementKind::Angle, attrs.layer.unwrap_or(options.layer.angle), visible);
            base.id = ElementId::new(attrs.id.clone().unwrap_or_default());
            base.name = attrs.name.clone().unwrap_or_default();

            Angle {
                base,
                point1: point1.clone(),
                point2: point2.clone(),
                point3: point3.clone(),
                radius: attrs.radius.unwrap_or(options.angle.radius),
                vis_prop: AngleVisProp::from_options(&options.angle),
                label: with_label.then(|| Label::new(text.clone(), visible, options.layer.text)),
                text,
            }
        };

        let id = registry.add_angle(angle)?;
        for parent in [point1, point2, point3] {
            registry.add_child(parent, &id);
        }
        debug!(%id, %point1, %point2, %point3, "angle linked to parents");
        Ok(id)
    }

    /// Called by the registry once the final id and name are known.
    pub(crate) fn assign_identity(&mut self, id: ElementId, name: String) {
        if let Some(label) = self.label.as_mut() {
            label.attach_to(&id);
        }
        self.base.id = id;
        self.base.name = name;
    }
}

// =============================================================
// Accessors
// =============================================================

impl Angle {
    /// The three defining points `A`, `B`, `C`.
    #[must_use]
    pub fn points(&self) -> [&ElementId; 3] {
        [&self.point1, &self.point2, &self.point3]
    }

    #[must_use]
    pub fn point1(&self) -> &ElementId {
        &self.point1
    }

    /// The vertex.
    #[must_use]
    pub fn point2(&self) -> &ElementId {
        &self.point2
    }

    #[must_use]
    pub fn point3(&self) -> &ElementId {
        &self.point3
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.base.name
    }

    #[must_use]
    pub fn vis_prop(&self) -> &AngleVisProp {
        &self.vis_prop
    }

    #[must_use]
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn label_mut(&mut self) -> Option<&mut Label> {
        self.label.as_mut()
    }

    /// Resolve the defining points. `None` if any of them is not on the board.
    #[must_use]
    pub fn frame(&self, points: &dyn PointLookup) -> Option<AngleFrame> {
        Some(AngleFrame {
            point1: points.point(&self.point1)?.coords(),
            point2: points.point(&self.point2)?.coords(),
            point3: points.point(&self.point3)?.coords(),
        })
    }
}

// =============================================================
// Geometry
// =============================================================

impl Angle {
    /// Where the label goes for the given frame. Resets the label's relative
    /// offset as a side effect.
    pub fn label_anchor(&mut self, frame: &AngleFrame) -> Coords {
        if let Some(label) = self.label.as_mut() {
            label.reset_relative_coords();
        }
        anchor_position(frame, self.radius)
    }
}

/// Label anchor for an angle of `radius` over `frame`.
#[must_use]
pub fn anchor_position(frame: &AngleFrame, radius: f64) -> Coords {
    let vertex = frame.point2;
    let dist = frame.point1.distance(&vertex);
    if !(dist.is_finite() && dist > 0.0) {
        warn!(dist, "degenerate angle leg; anchoring label at vertex");
        return vertex;
    }

    let dx = (frame.point1.x() - vertex.x()) * (radius / 2.0) / dist;
    let dy = (frame.point1.y() - vertex.y()) * (radius / 2.0) / dist;
    let theta = frame.true_angle() * std::f64::consts::PI / LABEL_ROTATION_DIVISOR;
    let (sin, cos) = theta.sin_cos();

    Coords::new(vertex.x() + cos * dx - sin * dy, vertex.y() + sin * dx + cos * dy)
}

// =============================================================
// Element
// =============================================================

impl GeometryElement for Angle {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn update_renderer(&mut self, points: &dyn PointLookup, renderer: &mut dyn Renderer) {
        if !self.base.visible {
            return;
        }
        let Some(frame) = self.frame(points) else {
            warn!(id = %self.base.id, "angle parent missing from board; skipping render");
            return;
        };

        if self.base.needs_update {
            renderer.update_angle(self, &frame);
            self.base.needs_update = false;
        }

        let label_visible = self.label.as_ref().is_some_and(Label::is_visible);
        if label_visible && frame.is_real() {
            let anchor = self.label_anchor(&frame);
            if let Some(label) = self.label.as_mut() {
                label.update(anchor);
                renderer.update_text(label);
            }
        }
    }

    /// The label follows the angle.
    fn set_visible(&mut self, visible: bool) {
        self.base.visible = visible;
        if let Some(label) = self.label.as_mut() {
            label.set_visible(visible);
        }
        self.base.needs_update = true;
    }

    /// The interior of an angle is never hit-testable.
    fn has_point(&self, _x: f64, _y: f64) -> bool {
        false
    }
}
