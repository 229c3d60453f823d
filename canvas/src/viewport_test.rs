#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn screen_approx_eq(a: ScreenPoint, b: ScreenPoint) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn world_approx_eq(a: WorldPoint, b: WorldPoint) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn vp(cx: f64, cy: f64, zoom: f64) -> Viewport {
    Viewport::new(WorldPoint::new(cx, cy), zoom, 800.0, 600.0)
}

// --- Rect ---

#[test]
fn rect_from_center_dimensions() {
    let r = Rect::from_center(WorldPoint::new(10.0, 20.0), 5.0, 3.0);
    assert_eq!(r.width(), 10.0);
    assert_eq!(r.height(), 6.0);
    assert_eq!(r.center(), WorldPoint::new(10.0, 20.0));
}

#[test]
fn rect_contains_is_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(WorldPoint::new(10.0, 10.0)));
    assert!(r.contains(WorldPoint::new(0.0, 5.0)));
    assert!(!r.contains(WorldPoint::new(10.1, 5.0)));
}

#[test]
fn rect_intersects_circle_uses_expanded_bounds() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.intersects_circle(WorldPoint::new(14.0, 5.0), 5.0));
    assert!(!r.intersects_circle(WorldPoint::new(16.0, 5.0), 5.0));
}

#[test]
fn rect_intersects_circle_ignores_negative_radius() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.intersects_circle(WorldPoint::new(5.0, 5.0), -100.0));
}

#[test]
fn rect_intersects_rect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Rect::new(5.0, 5.0, 20.0, 20.0)));
    assert!(!a.intersects(&Rect::new(11.0, 0.0, 20.0, 10.0)));
}

// --- Transforms ---

#[test]
fn world_origin_maps_to_screen_center_at_default() {
    let v = vp(0.0, 0.0, 1.0);
    assert!(screen_approx_eq(v.world_to_screen(WorldPoint::ZERO), ScreenPoint::new(400.0, 300.0)));
}

#[test]
fn world_to_screen_offset_by_zoom() {
    let v = vp(100.0, 50.0, 2.0);
    let s = v.world_to_screen(WorldPoint::new(110.0, 40.0));
    assert!(screen_approx_eq(s, ScreenPoint::new(420.0, 280.0)));
}

#[test]
fn round_trip_world_first() {
    let v = vp(-321.5, 77.25, 0.73);
    let p = WorldPoint::new(1234.5, -987.25);
    assert!(world_approx_eq(v.screen_to_world(v.world_to_screen(p)), p));
}

#[test]
fn round_trip_screen_first() {
    let v = vp(12.0, -4.0, 1.7);
    let s = ScreenPoint::new(17.0, 599.0);
    assert!(screen_approx_eq(v.world_to_screen(v.screen_to_world(s)), s));
}

#[test]
fn distance_conversions_are_inverse() {
    let v = vp(0.0, 0.0, 2.5);
    assert!(approx_eq(v.world_dist_to_screen(4.0), 10.0));
    assert!(approx_eq(v.screen_dist_to_world(10.0), 4.0));
}

// --- Bounds / visibility ---

#[test]
fn bounds_shrink_as_zoom_grows() {
    let near = vp(0.0, 0.0, 2.0).bounds();
    let far = vp(0.0, 0.0, 0.5).bounds();
    assert_eq!(near.width(), 400.0);
    assert_eq!(far.width(), 1600.0);
}

#[test]
fn center_is_visible_for_any_zoom() {
    for zoom in [0.01, 0.5, 1.0, 3.0, 100.0] {
        let v = vp(42.0, -7.0, zoom);
        assert!(v.is_visible(v.center, 0.0), "zoom {zoom}");
    }
}

#[test]
fn point_one_screen_width_away_is_not_visible() {
    let v = vp(10.0, 10.0, 1.25);
    let p = WorldPoint::new(10.0 + 800.0 / 1.25, 10.0);
    assert!(!v.is_visible(p, 0.0));
    assert!(!v.is_visible(p, 10.0));
}

#[test]
fn radius_pulls_offscreen_circle_into_view() {
    let v = vp(0.0, 0.0, 1.0);
    let p = WorldPoint::new(410.0, 0.0);
    assert!(!v.is_visible(p, 5.0));
    assert!(v.is_visible(p, 15.0));
}

#[test]
fn zero_zoom_does_not_produce_nan() {
    let v = vp(0.0, 0.0, 0.0);
    let s = v.world_to_screen(WorldPoint::new(1.0, 1.0));
    assert!(s.is_finite());
    assert!(v.is_visible(WorldPoint::ZERO, 0.0));
}
