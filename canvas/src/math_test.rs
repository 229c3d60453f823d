#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Vec2 ---

#[test]
fn vec_new_stores_components() {
    let p = WorldPoint::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

/// A space marker with no derives at all.
enum Bare {}

#[test]
fn vec_is_copy_for_any_space_marker() {
    let v: Vec2<Bare> = Vec2::new(3.0, 4.0);
    let unit = v.normalized();
    assert!(approx_eq(v.length(), 5.0));
    assert!(approx_eq(unit.x, 0.6) && approx_eq(unit.y, 0.8));
    let sum = v + v;
    assert_eq!((v.x, sum.x), (3.0, 6.0));
}

#[test]
fn vec_default_is_zero() {
    assert_eq!(ScreenPoint::default(), ScreenPoint::ZERO);
}

#[test]
fn vec_length_and_distance() {
    let a = WorldPoint::new(1.0, 1.0);
    let b = WorldPoint::new(4.0, 5.0);
    assert!(approx_eq((b - a).length(), 5.0));
    assert!(approx_eq(a.distance_to(b), 5.0));
    assert!(approx_eq(b.distance_to(a), 5.0));
}

#[test]
fn vec_add_sub() {
    let a = WorldPoint::new(1.0, 2.0);
    let b = WorldPoint::new(10.0, 20.0);
    assert_eq!(a + b, WorldPoint::new(11.0, 22.0));
    assert_eq!(b - a, WorldPoint::new(9.0, 18.0));
}

#[test]
fn vec_normalized_has_unit_length() {
    let n = ScreenPoint::new(3.0, -4.0).normalized();
    assert!(approx_eq(n.length(), 1.0));
    assert!(approx_eq(n.x, 0.6));
    assert!(approx_eq(n.y, -0.8));
}

#[test]
fn vec_normalized_zero_is_zero_not_nan() {
    let n = ScreenPoint::ZERO.normalized();
    assert_eq!(n, ScreenPoint::ZERO);
    assert!(n.is_finite());
}

#[test]
fn vec_lerp_to_midpoint() {
    let a = WorldPoint::new(0.0, 0.0);
    let b = WorldPoint::new(10.0, -10.0);
    assert_eq!(a.lerp_to(b, 0.5), WorldPoint::new(5.0, -5.0));
}

#[test]
fn vec_angle_matches_atan2() {
    assert!(approx_eq(WorldPoint::new(0.0, 1.0).angle(), PI / 2.0));
    assert!(approx_eq(WorldPoint::new(-1.0, 0.0).angle(), PI));
}

// --- Scalars ---

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 8.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 8.0, 1.0), 8.0);
    assert_eq!(lerp(2.0, 8.0, 0.5), 5.0);
}

#[test]
fn clamp_bounds() {
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
}

#[test]
fn clamp_inverted_bounds_does_not_panic() {
    assert_eq!(clamp(5.0, 2.0, 1.0), 1.0);
}

#[test]
fn normalize_angle_wraps_into_half_open_range() {
    assert!(approx_eq(normalize_angle(3.0 * PI).abs(), PI));
    assert!(approx_eq(normalize_angle(-PI), PI));
    assert!(approx_eq(normalize_angle(TAU + 0.5), 0.5));
    assert!(approx_eq(normalize_angle(-0.5), -0.5));
}

#[test]
fn normalize_angle_non_finite_is_zero() {
    assert_eq!(normalize_angle(f64::NAN), 0.0);
    assert_eq!(normalize_angle(f64::INFINITY), 0.0);
}

#[test]
fn lerp_angle_takes_short_way_across_pi() {
    let from = PI - 0.1;
    let to = -PI + 0.1;
    let mid = lerp_angle(from, to, 0.5);
    assert!(approx_eq(mid.abs(), PI));
}

#[test]
fn time_scaled_factor_matches_raw_factor_at_reference_step() {
    assert!(approx_eq(time_scaled_factor(0.1, 1.0 / 60.0, 1.0 / 60.0), 0.1));
}

#[test]
fn time_scaled_factor_composes_across_steps() {
    let ref_dt = 1.0 / 60.0;
    let one_big = time_scaled_factor(0.2, 2.0 * ref_dt, ref_dt);
    let small = time_scaled_factor(0.2, ref_dt, ref_dt);
    let two_small = 1.0 - (1.0 - small) * (1.0 - small);
    assert!(approx_eq(one_big, two_small));
}

#[test]
fn time_scaled_factor_zero_or_negative_dt_is_zero() {
    assert_eq!(time_scaled_factor(0.5, 0.0, 1.0 / 60.0), 0.0);
    assert_eq!(time_scaled_factor(0.5, -1.0, 1.0 / 60.0), 0.0);
    assert_eq!(time_scaled_factor(0.5, f64::NAN, 1.0 / 60.0), 0.0);
}
