#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// deep_merge
// =============================================================

#[test]
fn merge_replaces_scalars() {
    let mut base = json!({ "a": 1, "b": "x" });
    deep_merge(&mut base, &json!({ "b": "y" }));
    assert_eq!(base, json!({ "a": 1, "b": "y" }));
}

#[test]
fn merge_recurses_into_objects() {
    let mut base = json!({ "point": { "strokeColor": "#f00", "fillColor": "#f00" } });
    deep_merge(&mut base, &json!({ "point": { "fillColor": "#0f0" } }));
    assert_eq!(base, json!({ "point": { "strokeColor": "#f00", "fillColor": "#0f0" } }));
}

#[test]
fn merge_adds_missing_keys() {
    let mut base = json!({ "a": 1 });
    deep_merge(&mut base, &json!({ "c": { "d": true } }));
    assert_eq!(base, json!({ "a": 1, "c": { "d": true } }));
}

#[test]
fn merge_object_over_scalar_replaces() {
    let mut base = json!({ "a": 1 });
    deep_merge(&mut base, &json!({ "a": { "nested": 2 } }));
    assert_eq!(base, json!({ "a": { "nested": 2 } }));
}

#[test]
fn merge_non_object_override_replaces_root() {
    let mut base = json!({ "a": 1 });
    deep_merge(&mut base, &json!(5));
    assert_eq!(base, json!(5));
}

#[test]
fn merge_empty_override_is_noop() {
    let mut base = json!({ "a": { "b": 1 } });
    deep_merge(&mut base, &json!({}));
    assert_eq!(base, json!({ "a": { "b": 1 } }));
}

// =============================================================
// Theme
// =============================================================

#[test]
fn default_theme_leaves_options_untouched() {
    let base = Options::default();
    assert_eq!(Theme::Default.apply(&base).unwrap(), base);
}

#[test]
fn gui_theme_overrides_listed_keys() {
    let opts = Theme::Gui.apply(&Options::default()).unwrap();
    assert_eq!(opts.renderer, "canvas");
    assert_eq!(opts.glider.fill_color, "#ffff00");
    assert_eq!(opts.glider.measure_color, "orange");
    assert_eq!(opts.intersection.fill_color, "#ffffff");
    assert_eq!(opts.line.stroke_color, "#ff0000");
    assert_eq!(opts.point.stroke_color, "#000000");
    assert_eq!(opts.point.fill_color, "#cc0000");
}

#[test]
fn gui_theme_keeps_angle_and_layer_defaults() {
    let opts = Theme::Gui.apply(&Options::default()).unwrap();
    assert_eq!(opts.angle, Options::default().angle);
    assert_eq!(opts.layer, Options::default().layer);
}

#[test]
fn apply_overrides_rejects_wrong_type() {
    let err = apply_overrides(&Options::default(), &json!({ "angle": { "radius": "big" } }));
    assert!(err.is_err());
}

#[test]
fn apply_overrides_custom_radius() {
    let opts = apply_overrides(&Options::default(), &json!({ "angle": { "radius": 2.5 } })).unwrap();
    assert_eq!(opts.angle.radius, 2.5);
    assert_eq!(opts.angle.fill_color, "#FF7F00");
}

#[test]
fn theme_from_str_and_display() {
    assert_eq!("gui".parse::<Theme>(), Ok(Theme::Gui));
    assert_eq!("default".parse::<Theme>(), Ok(Theme::Default));
    assert_eq!("neon".parse::<Theme>(), Err("neon".to_string()));
    assert_eq!(Theme::Gui.to_string(), "gui");
}
