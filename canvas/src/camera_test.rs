#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{ZOOM_MAX, ZOOM_MIN};

const EPSILON: f64 = 1e-9;
const FRAME: f64 = 1.0 / 60.0;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn world_approx_eq(a: WorldPoint, b: WorldPoint) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn camera_800x600() -> Camera {
    let mut cam = Camera::default();
    cam.set_size(800.0, 600.0);
    cam
}

fn per_tick_camera() -> Camera {
    let settings = CameraSettings { smoothing: Smoothing::PerTick, ..CameraSettings::default() };
    let mut cam = Camera::new(settings);
    cam.set_size(800.0, 600.0);
    cam
}

// --- Construction ---

#[test]
fn camera_default_is_origin_zoom_one() {
    let cam = Camera::default();
    assert_eq!(cam.center(), WorldPoint::ZERO);
    assert_eq!(cam.zoom(), 1.0);
    assert_eq!(cam.target_zoom(), 1.0);
}

#[test]
fn camera_construction_clamps_zoom_into_custom_range() {
    let settings = CameraSettings { zoom_min: 1.5, zoom_max: 3.0, ..CameraSettings::default() };
    let cam = Camera::new(settings);
    assert_eq!(cam.zoom(), 1.5);
}

// --- Transforms ---

#[test]
fn world_to_screen_scenario_800x600() {
    let cam = camera_800x600();
    let s = cam.world_to_screen(WorldPoint::new(100.0, 0.0));
    assert!(approx_eq(s.x, 500.0));
    assert!(approx_eq(s.y, 300.0));
}

#[test]
fn round_trip_through_moving_camera() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::new(1234.0, -567.0), 250.0);
    for _ in 0..7 {
        cam.update(FRAME);
    }
    for p in [WorldPoint::new(0.0, 0.0), WorldPoint::new(-999.9, 333.3), WorldPoint::new(1e5, -1e5)] {
        let back = cam.screen_to_world(cam.world_to_screen(p));
        assert!((back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6, "{p:?} -> {back:?}");
    }
}

#[test]
fn transform_agrees_with_world_to_screen() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::new(50.0, 80.0), 40.0);
    cam.update(FRAME);
    let p = WorldPoint::new(13.0, -7.0);
    let via_transform = cam.transform().apply(p);
    let direct = cam.world_to_screen(p);
    assert!(approx_eq(via_transform.x, direct.x));
    assert!(approx_eq(via_transform.y, direct.y));
}

// --- Smoothing ---

#[test]
fn follow_scenario_converges_within_fifty_updates() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::new(100.0, 0.0), 10.0);
    for _ in 0..50 {
        cam.update(FRAME);
    }
    assert!((cam.center().x - 100.0).abs() < 1.0);
}

#[test]
fn update_never_snaps_in_one_step() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::new(100.0, 100.0), 0.0);
    cam.update(FRAME);
    assert!(cam.center().x > 0.0 && cam.center().x < 100.0);
    assert!(approx_eq(cam.center().x, 10.0));
}

#[test]
fn per_tick_smoothing_ignores_dt() {
    let mut a = per_tick_camera();
    let mut b = per_tick_camera();
    a.follow_target(WorldPoint::new(100.0, 0.0), 0.0);
    b.follow_target(WorldPoint::new(100.0, 0.0), 0.0);
    a.update(FRAME);
    b.update(1.0);
    assert!(world_approx_eq(a.center(), b.center()));
}

#[test]
fn time_scaled_smoothing_is_frame_rate_independent() {
    let mut fast = camera_800x600();
    let mut slow = camera_800x600();
    fast.follow_target(WorldPoint::new(100.0, 0.0), 0.0);
    slow.follow_target(WorldPoint::new(100.0, 0.0), 0.0);
    for _ in 0..4 {
        fast.update(FRAME / 2.0);
    }
    slow.update(FRAME * 2.0);
    assert!((fast.center().x - slow.center().x).abs() < 1e-9);
}

#[test]
fn zero_dt_leaves_time_scaled_camera_in_place() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::new(100.0, 0.0), 0.0);
    cam.update(0.0);
    assert_eq!(cam.center(), WorldPoint::ZERO);
}

// --- Zoom ---

#[test]
fn follow_target_longer_snake_zooms_out() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::ZERO, 10.0);
    let short = cam.target_zoom();
    cam.follow_target(WorldPoint::ZERO, 300.0);
    let long = cam.target_zoom();
    assert!(long < short);
    assert!(approx_eq(short, 0.99));
}

#[test]
fn zoom_stays_in_range_for_extreme_lengths() {
    for length in [0.0, 1.0, 500.0, 100_000.0, f64::MAX, -50.0, f64::NAN] {
        let mut cam = camera_800x600();
        cam.follow_target(WorldPoint::ZERO, length);
        for _ in 0..200 {
            cam.update(FRAME);
            assert!(cam.zoom() >= ZOOM_MIN && cam.zoom() <= ZOOM_MAX, "length {length}: zoom {}", cam.zoom());
        }
    }
}

#[test]
fn huge_snake_converges_to_zoom_min() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::ZERO, 100_000.0);
    assert_eq!(cam.target_zoom(), ZOOM_MIN);
    for _ in 0..500 {
        cam.update(FRAME);
    }
    assert!((cam.zoom() - ZOOM_MIN).abs() < 1e-6);
}

#[test]
fn zoom_to_clamps_target() {
    let mut cam = camera_800x600();
    cam.zoom_to(50.0);
    assert_eq!(cam.target_zoom(), ZOOM_MAX);
    cam.zoom_to(0.0);
    assert_eq!(cam.target_zoom(), ZOOM_MIN);
    cam.zoom_to(f64::NAN);
    assert_eq!(cam.target_zoom(), ZOOM_MIN);
}

// --- Visibility ---

#[test]
fn visible_bounds_follow_size_and_zoom() {
    let cam = camera_800x600();
    let b = cam.visible_bounds();
    assert!(approx_eq(b.width(), 800.0));
    assert!(approx_eq(b.height(), 600.0));
    assert!(world_approx_eq(b.center(), WorldPoint::ZERO));
}

#[test]
fn center_always_visible() {
    let mut cam = camera_800x600();
    cam.follow_target(WorldPoint::new(300.0, 300.0), 2000.0);
    for _ in 0..30 {
        cam.update(FRAME);
        assert!(cam.is_visible(cam.center(), 0.0));
    }
}

#[test]
fn point_one_screen_width_right_is_hidden() {
    let cam = camera_800x600();
    let p = WorldPoint::new(cam.center().x + cam.width() / cam.zoom(), cam.center().y);
    assert!(!cam.is_visible(p, 0.0));
}

#[test]
fn set_size_rejects_negative_and_nan() {
    let mut cam = Camera::default();
    cam.set_size(-5.0, f64::NAN);
    assert_eq!(cam.width(), 0.0);
    assert_eq!(cam.height(), 0.0);
}
