use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// true_angle
// =============================================================

#[test]
fn right_angle_counter_clockwise() {
    let a = Coords::new(1.0, 0.0);
    let b = Coords::origin();
    let c = Coords::new(0.0, 1.0);
    assert!(approx_eq(true_angle(&a, &b, &c), 90.0));
}

#[test]
fn right_angle_clockwise_is_reflex() {
    let a = Coords::new(0.0, 1.0);
    let b = Coords::origin();
    let c = Coords::new(1.0, 0.0);
    assert!(approx_eq(true_angle(&a, &b, &c), 270.0));
}

#[test]
fn collinear_same_direction_is_zero() {
    let a = Coords::new(2.0, 0.0);
    let b = Coords::origin();
    let c = Coords::new(5.0, 0.0);
    assert!(approx_eq(true_angle(&a, &b, &c), 0.0));
}

#[test]
fn straight_angle_is_180() {
    let a = Coords::new(-1.0, 0.0);
    let b = Coords::origin();
    let c = Coords::new(1.0, 0.0);
    assert!(approx_eq(true_angle(&a, &b, &c), 180.0));
}

#[test]
fn vertex_off_origin() {
    let a = Coords::new(4.0, 3.0);
    let b = Coords::new(3.0, 3.0);
    let c = Coords::new(3.0, 4.0);
    assert!(approx_eq(true_angle(&a, &b, &c), 90.0));
}

#[test]
fn rad_stays_below_full_turn() {
    let b = Coords::origin();
    for i in 0..36 {
        let t = f64::from(i) * 10f64.to_radians();
        let a = Coords::new(1.0, 0.0);
        let c = Coords::new(t.cos(), t.sin());
        let r = rad(&a, &b, &c);
        assert!((0.0..TAU).contains(&r), "rad {r} out of range at step {i}");
    }
}

// =============================================================
// is_real
// =============================================================

#[test]
fn is_real_for_proper_triangle() {
    assert!(is_real(&Coords::new(1.0, 0.0), &Coords::origin(), &Coords::new(0.0, 1.0)));
}

#[test]
fn is_real_false_when_leg_collapses() {
    let b = Coords::new(1.0, 1.0);
    assert!(!is_real(&b, &b, &Coords::new(0.0, 1.0)));
    assert!(!is_real(&Coords::new(0.0, 1.0), &b, &b));
}

#[test]
fn is_real_false_for_nan() {
    assert!(!is_real(&Coords::new(f64::NAN, 0.0), &Coords::origin(), &Coords::new(0.0, 1.0)));
}
