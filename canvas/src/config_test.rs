#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_consts_and_validates() {
    let cfg = ViewConfig::default();
    assert_eq!(cfg.zoom_min, consts::ZOOM_MIN);
    assert_eq!(cfg.zoom_max, consts::ZOOM_MAX);
    assert_eq!(cfg.camera_smooth_factor, consts::CAMERA_SMOOTH_FACTOR);
    assert_eq!(cfg.smoothing, Smoothing::TimeScaled);
    assert_eq!(cfg.boost_key, "Space");
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_partial_keeps_defaults() {
    let cfg = ViewConfig::from_json(r#"{ "zoom_max": 3.0, "smoothing": "per_tick" }"#).expect("valid config");
    assert_eq!(cfg.zoom_max, 3.0);
    assert_eq!(cfg.smoothing, Smoothing::PerTick);
    assert_eq!(cfg.zoom_min, consts::ZOOM_MIN);
    assert_eq!(cfg.world_width, consts::WORLD_WIDTH);
}

#[test]
fn from_json_rejects_malformed() {
    let err = ViewConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn validate_rejects_inverted_zoom_bounds() {
    let cfg = ViewConfig { zoom_min: 2.0, zoom_max: 1.0, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::ZoomBounds { .. })));
}

#[test]
fn validate_rejects_zero_zoom_min() {
    let cfg = ViewConfig { zoom_min: 0.0, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::ZoomBounds { .. })));
}

#[test]
fn validate_rejects_snapping_smooth_factor() {
    let cfg = ViewConfig { camera_smooth_factor: 1.0, ..Default::default() };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Factor { name: "camera_smooth_factor", .. })
    ));
}

#[test]
fn validate_rejects_nan_interpolation_factor() {
    let cfg = ViewConfig { interpolation_factor: f64::NAN, ..Default::default() };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Factor { name: "interpolation_factor", .. })
    ));
}

#[test]
fn validate_rejects_empty_boost_key() {
    let cfg = ViewConfig { boost_key: "  ".to_owned(), ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::EmptyBoostKey)));
}

#[test]
fn validate_rejects_non_positive_world() {
    let cfg = ViewConfig { world_width: -1.0, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { name: "world_width", .. })));
}

#[test]
fn smoothing_serializes_snake_case() {
    let json = serde_json::to_string(&Smoothing::TimeScaled).expect("serialize");
    assert_eq!(json, "\"time_scaled\"");
}
