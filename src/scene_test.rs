use super::*;
use crate::board::Registry;
use crate::options::Options;
use crate::render::{DrawCommand, RecordingRenderer};

const RIGHT_ANGLE: &str = r#"{ "elements": [
    { "type": "point", "parents": [1, 0], "attributes": { "name": "A" } },
    { "type": "point", "parents": [0, 0], "attributes": { "name": "B" } },
    { "type": "point", "parents": [0, 1], "attributes": { "name": "C" } },
    { "type": "angle", "parents": ["A", "B", "C"], "attributes": { "radius": 0.5 } }
] }"#;

fn build(json: &str) -> (Board, Result<Vec<ElementId>, SceneError>) {
    let mut board = Board::with_id("s", Options::default());
    let scene = Scene::from_json(json).unwrap();
    let result = scene.build(&mut board, &ElementRegistry::with_defaults());
    (board, result)
}

#[test]
fn builds_elements_in_order() {
    let (board, result) = build(RIGHT_ANGLE);
    let ids = result.unwrap();
    assert_eq!(ids.len(), 4);
    assert_eq!(board.len(), 4);

    let angle = board.angle(&ids[3]).unwrap();
    assert_eq!(angle.points(), [&ids[0], &ids[1], &ids[2]]);
    assert_eq!(angle.text(), "&alpha;");
    assert!((angle.radius() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn built_scene_renders() {
    let (mut board, result) = build(RIGHT_ANGLE);
    let ids = result.unwrap();
    let mut recorder = RecordingRenderer::new();
    board.update_renderer(&mut recorder);
    assert_eq!(recorder.sector_count(&ids[3]), 1);
    let points = recorder.commands().iter().filter(|c| matches!(c, DrawCommand::Point { .. })).count();
    assert_eq!(points, 3);
}

#[test]
fn missing_fields_default() {
    let scene = Scene::from_json(r#"{ "elements": [ { "type": "point", "parents": [0, 0] } ] }"#).unwrap();
    assert!(scene.elements[0].attributes.is_null());
    assert!(Scene::from_json("{}").unwrap().elements.is_empty());
}

#[test]
fn malformed_document_is_parse_error() {
    let err = Scene::from_json("{ \"elements\": 3 }").unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));
    assert_eq!(err.error_code(), "E_SCENE_PARSE");
}

#[test]
fn failing_element_reports_index_and_keeps_earlier_ones() {
    let json = r#"{ "elements": [
        { "type": "point", "parents": [0, 0] },
        { "type": "point", "parents": [1, 0] },
        { "type": "angle", "parents": ["A", "B"] }
    ] }"#;
    let (board, result) = build(json);
    let err = result.unwrap_err();
    let SceneError::Element { index, ref kind, .. } = err else {
        panic!("expected element error, got {err:?}");
    };
    assert_eq!(index, 2);
    assert_eq!(kind, "angle");
    assert_eq!(err.error_code(), "E_INVALID_PARENT");
    assert_eq!(board.len(), 2);
}

#[test]
fn unknown_type_is_reported() {
    let (_, result) = build(r#"{ "elements": [ { "type": "circle", "parents": [] } ] }"#);
    let err = result.unwrap_err();
    assert_eq!(err.error_code(), "E_UNKNOWN_ELEMENT_TYPE");
    assert!(err.to_string().starts_with("element #0 (circle) failed"));
}

#[test]
fn later_angles_get_next_greek_letter() {
    let json = r#"{ "elements": [
        { "type": "point", "parents": [1, 0] },
        { "type": "point", "parents": [0, 0] },
        { "type": "point", "parents": [0, 1] },
        { "type": "angle", "parents": ["A", "B", "C"] },
        { "type": "angle", "parents": ["C", "B", "A"] }
    ] }"#;
    let (board, result) = build(json);
    let ids = result.unwrap();
    assert_eq!(board.angle(&ids[4]).unwrap().text(), "&beta;");
    assert_eq!(board.angle_texts().len(), 2);
}
