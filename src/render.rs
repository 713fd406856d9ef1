//! Rendering seam: the trait a board draws through, plus two implementations.
//!
//! Drawing backends live in the host. This crate ships a [`RecordingRenderer`]
//! that captures draw calls as serializable [`DrawCommand`]s (used by tests and
//! the demo binary) and a [`TraceRenderer`] that only emits `tracing` events.
//! Neither mutates application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;
use tracing::debug;

use crate::angle::{Angle, AngleFrame};
use crate::coords::Coords;
use crate::element::{ElementId, GeometryElement};
use crate::point::Point;
use crate::text::Label;

/// Draw primitives a board needs from its host.
pub trait Renderer {
    fn update_point(&mut self, point: &Point);

    /// Draw the sector of `angle` using the resolved coordinates in `frame`.
    fn update_angle(&mut self, angle: &Angle, frame: &AngleFrame);

    fn update_text(&mut self, label: &Label);
}

/// One captured draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Point {
        id: ElementId,
        coords: Coords,
        stroke_color: String,
        fill_color: String,
    },
    Sector {
        id: ElementId,
        center: Coords,
        radius: f64,
        /// Direction of leg `BA` in degrees.
        start_angle: f64,
        /// Counter-clockwise sweep in degrees.
        sweep: f64,
        fill_color: String,
        fill_opacity: f64,
        stroke_color: String,
    },
    Text {
        id: ElementId,
        content: String,
        coords: Coords,
    },
}

/// Renderer that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of sector draws recorded for `id`.
    #[must_use]
    pub fn sector_count(&self, id: &ElementId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sector { id: sid, .. } if sid == id))
            .count()
    }

    /// Number of text draws recorded for `id`.
    #[must_use]
    pub fn text_count(&self, id: &ElementId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { id: tid, .. } if tid == id))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn update_point(&mut self, point: &Point) {
        self.commands.push(DrawCommand::Point {
            id: point.id().clone(),
            coords: point.coords(),
            stroke_color: point.vis_prop().stroke_color.clone(),
            fill_color: point.vis_prop().fill_color.clone(),
        });
    }

    fn update_angle(&mut self, angle: &Angle, frame: &AngleFrame) {
        let vis = angle.vis_prop();
        self.commands.push(DrawCommand::Sector {
            id: angle.id().clone(),
            center: frame.point2,
            radius: angle.radius(),
            start_angle: frame.start_angle(),
            sweep: frame.true_angle(),
            fill_color: vis.fill_color.clone(),
            fill_opacity: vis.fill_opacity,
            stroke_color: vis.stroke_color.clone(),
        });
    }

    fn update_text(&mut self, label: &Label) {
        self.commands.push(DrawCommand::Text {
            id: label.id().clone(),
            content: label.content().to_string(),
            coords: label.coords(),
        });
    }
}

/// Renderer that logs each call at debug level and draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn update_point(&mut self, point: &Point) {
        let c = point.coords();
        debug!(id = %point.id(), x = c.x(), y = c.y(), "draw point");
    }

    fn update_angle(&mut self, angle: &Angle, frame: &AngleFrame) {
        debug!(
            id = %angle.id(),
            radius = angle.radius(),
            start = frame.start_angle(),
            sweep = frame.true_angle(),
            "draw sector"
        );
    }

    fn update_text(&mut self, label: &Label) {
        let c = label.coords();
        debug!(id = %label.id(), content = label.content(), x = c.x(), y = c.y(), "draw text");
    }
}

/// Fan every call out to both renderers, first `A` then `B`.
impl<A: Renderer, B: Renderer> Renderer for (A, B) {
    fn update_point(&mut self, point: &Point) {
        self.0.update_point(point);
        self.1.update_point(point);
    }

    fn update_angle(&mut self, angle: &Angle, frame: &AngleFrame) {
        self.0.update_angle(angle, frame);
        self.1.update_angle(angle, frame);
    }

    fn update_text(&mut self, label: &Label) {
        self.0.update_text(label);
        self.1.update_text(label);
    }
}
