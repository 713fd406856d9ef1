#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn new_sets_homogeneous_component() {
    let c = Coords::new(3.0, 4.0);
    assert_eq!(c.usr_coords, [1.0, 3.0, 4.0]);
    assert_eq!(c.x(), 3.0);
    assert_eq!(c.y(), 4.0);
}

#[test]
fn default_is_origin() {
    assert_eq!(Coords::default(), Coords::origin());
    assert_eq!(Coords::origin().x(), 0.0);
}

#[test]
fn distance_is_euclidean() {
    let a = Coords::new(0.0, 0.0);
    let b = Coords::new(3.0, 4.0);
    assert!(approx_eq(a.distance(&b), 5.0));
    assert!(approx_eq(b.distance(&a), 5.0));
}

#[test]
fn distance_to_self_is_zero() {
    let a = Coords::new(-2.5, 7.0);
    assert_eq!(a.distance(&a), 0.0);
}

#[test]
fn translate_adds_components() {
    let a = Coords::new(1.0, 2.0);
    let moved = a.translate(&Coords::new(0.5, -1.0));
    assert_eq!(moved, Coords::new(1.5, 1.0));
}

#[test]
fn is_finite_detects_nan_and_infinity() {
    assert!(Coords::new(1.0, 2.0).is_finite());
    assert!(!Coords::new(f64::NAN, 0.0).is_finite());
    assert!(!Coords::new(0.0, f64::INFINITY).is_finite());
}

#[test]
fn serializes_as_usr_coords() {
    let json = serde_json::to_value(Coords::new(1.0, 2.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "usrCoords": [1.0, 1.0, 2.0] }));
}
