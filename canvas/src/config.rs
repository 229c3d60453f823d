//! Tunable values injected by the host.
//!
//! Every field defaults to the matching constant in [`crate::consts`]. The
//! host may deserialize a partial JSON object; missing keys keep defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;

/// How the camera turns its smoothing factor into a per-update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    /// Apply the factor once per `update` call, ignoring `dt`. Motion speed follows frame rate.
    PerTick,
    /// Rescale the factor by `dt` against a 60 Hz reference frame.
    #[default]
    TimeScaled,
}

/// Error returned by [`ViewConfig::validate`] and [`ViewConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid view config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("zoom bounds must satisfy 0 < zoom_min <= zoom_max (got {min}..{max})")]
    ZoomBounds { min: f64, max: f64 },
    #[error("{name} must lie strictly between 0 and 1 (got {value})")]
    Factor { name: &'static str, value: f64 },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("boost_key must not be empty")]
    EmptyBoostKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub camera_smooth_factor: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_scale_factor: f64,
    pub interpolation_factor: f64,
    pub smoothing: Smoothing,
    /// `KeyboardEvent.code` that triggers boost.
    pub boost_key: String,
    pub control_interval_ms: f64,
    pub control_keepalive_ms: f64,
    pub control_angle_deadband: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            world_width: consts::WORLD_WIDTH,
            world_height: consts::WORLD_HEIGHT,
            camera_smooth_factor: consts::CAMERA_SMOOTH_FACTOR,
            zoom_min: consts::ZOOM_MIN,
            zoom_max: consts::ZOOM_MAX,
            zoom_scale_factor: consts::ZOOM_SCALE_FACTOR,
            interpolation_factor: consts::INTERPOLATION_FACTOR,
            smoothing: Smoothing::default(),
            boost_key: consts::BOOST_KEY.to_owned(),
            control_interval_ms: consts::CONTROL_INTERVAL_MS,
            control_keepalive_ms: consts::CONTROL_KEEPALIVE_MS,
            control_angle_deadband: consts::CONTROL_ANGLE_DEADBAND,
        }
    }
}

impl ViewConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any validation error.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the camera and presenters rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        if !(self.zoom_min > 0.0 && self.zoom_min <= self.zoom_max && self.zoom_max.is_finite()) {
            return Err(ConfigError::ZoomBounds { min: self.zoom_min, max: self.zoom_max });
        }
        unit_factor("camera_smooth_factor", self.camera_smooth_factor)?;
        unit_factor("interpolation_factor", self.interpolation_factor)?;
        if !(self.zoom_scale_factor >= 0.0 && self.zoom_scale_factor.is_finite()) {
            return Err(ConfigError::NonPositive { name: "zoom_scale_factor", value: self.zoom_scale_factor });
        }
        positive("control_interval_ms", self.control_interval_ms)?;
        positive("control_keepalive_ms", self.control_keepalive_ms)?;
        if !(self.control_angle_deadband >= 0.0) {
            return Err(ConfigError::NonPositive { name: "control_angle_deadband", value: self.control_angle_deadband });
        }
        if self.boost_key.trim().is_empty() {
            return Err(ConfigError::EmptyBoostKey);
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() { Ok(()) } else { Err(ConfigError::NonPositive { name, value }) }
}

fn unit_factor(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 { Ok(()) } else { Err(ConfigError::Factor { name, value }) }
}
