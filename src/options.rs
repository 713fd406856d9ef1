//! Typed board options: style and layer defaults per element type.
//!
//! `Options` replaces a global options store. A board receives one at
//! construction and every element reads its defaults from there. All structs
//! serialize with camelCase keys so theme override tables (see [`crate::theme`])
//! can be deep-merged onto the JSON form and read back.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::{Deserialize, Serialize};

/// Root of the board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Preferred rendering backend name. Informational for hosts.
    pub renderer: String,
    pub angle: AngleOptions,
    pub layer: LayerOptions,
    pub point: PointOptions,
    pub line: LineOptions,
    pub glider: GliderOptions,
    pub intersection: IntersectionOptions,
    pub precision: PrecisionOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            renderer: "svg".into(),
            angle: AngleOptions::default(),
            layer: LayerOptions::default(),
            point: PointOptions::default(),
            line: LineOptions::default(),
            glider: GliderOptions::default(),
            intersection: IntersectionOptions::default(),
            precision: PrecisionOptions::default(),
        }
    }
}

/// Defaults copied into every new angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AngleOptions {
    /// Sector radius in user units. Default `1.0`.
    pub radius: f64,
    /// Default `"#FF7F00"`.
    pub fill_color: String,
    /// Default `"#FF7F00"`.
    pub highlight_fill_color: String,
    /// Default `0.3`.
    pub fill_opacity: f64,
    /// Default `0.3`.
    pub highlight_fill_opacity: f64,
    /// Default `"#FF7F00"`.
    pub stroke_color: String,
    /// Whether new angles get a text label. Default `true`.
    pub with_label: bool,
}

impl Default for AngleOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            fill_color: "#FF7F00".into(),
            highlight_fill_color: "#FF7F00".into(),
            fill_opacity: 0.3,
            highlight_fill_opacity: 0.3,
            stroke_color: "#FF7F00".into(),
            with_label: true,
        }
    }
}

/// Display layers; lower values are drawn beneath higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerOptions {
    /// Default `9`.
    pub point: i64,
    /// Default `2`.
    pub angle: i64,
    /// Default `9`.
    pub text: i64,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self { point: 9, angle: 2, text: 9 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointOptions {
    /// Default `"#ff0000"`.
    pub stroke_color: String,
    /// Default `"#ff0000"`.
    pub fill_color: String,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self { stroke_color: "#ff0000".into(), fill_color: "#ff0000".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineOptions {
    /// Default `"#0000ff"`.
    pub stroke_color: String,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self { stroke_color: "#0000ff".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GliderOptions {
    /// Default `"#ff0000"`.
    pub fill_color: String,
    /// Default `"#ff0000"`.
    pub measure_color: String,
}

impl Default for GliderOptions {
    fn default() -> Self {
        Self { fill_color: "#ff0000".into(), measure_color: "#ff0000".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntersectionOptions {
    /// Default `"#ff0000"`.
    pub fill_color: String,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self { fill_color: "#ff0000".into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrecisionOptions {
    /// Hit radius for points, in user units. Default `0.1`.
    pub has_point: f64,
}

impl Default for PrecisionOptions {
    fn default() -> Self {
        Self { has_point: 0.1 }
    }
}
