#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

#[test]
fn angle_defaults() {
    let opts = Options::default();
    assert_eq!(opts.angle.radius, 1.0);
    assert_eq!(opts.angle.fill_color, "#FF7F00");
    assert_eq!(opts.angle.highlight_fill_color, "#FF7F00");
    assert_eq!(opts.angle.fill_opacity, 0.3);
    assert_eq!(opts.angle.highlight_fill_opacity, 0.3);
    assert_eq!(opts.angle.stroke_color, "#FF7F00");
    assert!(opts.angle.with_label);
}

#[test]
fn layer_defaults() {
    let layer = LayerOptions::default();
    assert_eq!(layer.point, 9);
    assert_eq!(layer.angle, 2);
    assert_eq!(layer.text, 9);
}

#[test]
fn serializes_with_camel_case_keys() {
    let value = serde_json::to_value(Options::default()).unwrap();
    assert_eq!(value["angle"]["fillColor"], json!("#FF7F00"));
    assert_eq!(value["angle"]["withLabel"], json!(true));
    assert_eq!(value["precision"]["hasPoint"], json!(0.1));
    assert!(value["angle"].get("fill_color").is_none());
}

#[test]
fn partial_document_fills_defaults() {
    let opts: Options = serde_json::from_value(json!({ "angle": { "radius": 3.0 } })).unwrap();
    assert_eq!(opts.angle.radius, 3.0);
    assert_eq!(opts.angle.stroke_color, "#FF7F00");
    assert_eq!(opts.point, PointOptions::default());
    assert_eq!(opts.renderer, "svg");
}

#[test]
fn empty_document_equals_default() {
    let opts: Options = serde_json::from_value(json!({})).unwrap();
    assert_eq!(opts, Options::default());
}
