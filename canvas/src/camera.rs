#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::config::{Smoothing, ViewConfig};
use crate::consts::{MIN_FOLLOW_ZOOM_FACTOR, REFERENCE_FRAME_SECS};
use crate::math::{ScreenPoint, WorldPoint, clamp, lerp, time_scaled_factor};
use crate::viewport::{Rect, Viewport};

/// Camera tuning, extracted from [`ViewConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub smooth_factor: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_scale_factor: f64,
    pub smoothing: Smoothing,
}

impl From<&ViewConfig> for CameraSettings {
    fn from(cfg: &ViewConfig) -> Self {
        Self {
            smooth_factor: cfg.camera_smooth_factor,
            zoom_min: cfg.zoom_min,
            zoom_max: cfg.zoom_max,
            zoom_scale_factor: cfg.zoom_scale_factor,
            smoothing: cfg.smoothing,
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::from(&ViewConfig::default())
    }
}

/// Translate + uniform scale for a render pass: `screen = world * scale + translate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    #[must_use]
    pub fn apply(&self, p: WorldPoint) -> ScreenPoint {
        ScreenPoint::new(p.x * self.scale + self.translate_x, p.y * self.scale + self.translate_y)
    }
}

/// Smoothed camera that chases a target position and zoom.
///
/// `x` / `y` are the world point shown at the canvas centre; `zoom` is
/// screen pixels per world unit. Fields are private: every write goes through
/// a method that clamps zoom into `[zoom_min, zoom_max]`.
#[derive(Debug, Clone)]
pub struct Camera {
    x: f64,
    y: f64,
    zoom: f64,
    target_x: f64,
    target_y: f64,
    target_zoom: f64,
    width: f64,
    height: f64,
    settings: CameraSettings,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera {
    /// A camera at the world origin, zoom 1 (clamped into the configured range), zero-sized viewport.
    #[must_use]
    pub fn new(settings: CameraSettings) -> Self {
        let mut camera = Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            target_x: 0.0,
            target_y: 0.0,
            target_zoom: 1.0,
            width: 0.0,
            height: 0.0,
            settings,
        };
        camera.zoom = camera.clamp_zoom(camera.zoom);
        camera.target_zoom = camera.zoom;
        camera
    }

    /// Move current position and zoom a step toward their targets.
    ///
    /// With [`Smoothing::PerTick`] the configured factor is applied as-is and
    /// `dt` is ignored; with [`Smoothing::TimeScaled`] it is rescaled so the
    /// same wall-clock interval closes the same share of the gap at any frame rate.
    pub fn update(&mut self, dt: f64) {
        let factor = match self.settings.smoothing {
            Smoothing::PerTick => self.settings.smooth_factor,
            Smoothing::TimeScaled => time_scaled_factor(self.settings.smooth_factor, dt, REFERENCE_FRAME_SECS),
        };
        self.x = lerp(self.x, self.target_x, factor);
        self.y = lerp(self.y, self.target_y, factor);
        self.zoom = self.clamp_zoom(lerp(self.zoom, self.target_zoom, factor));
    }

    /// Aim at `target` and pick a target zoom from the followed snake's length.
    ///
    /// Longer snakes zoom out: `max(0.3, 1 - length * zoom_scale_factor / 100)`,
    /// then clamped into the configured zoom range.
    pub fn follow_target(&mut self, target: WorldPoint, snake_length: f64) {
        if target.is_finite() {
            self.target_x = target.x;
            self.target_y = target.y;
        }
        let length = if snake_length.is_finite() { snake_length.max(0.0) } else { 0.0 };
        let zoom_factor = (1.0 - length * self.settings.zoom_scale_factor / 100.0).max(MIN_FOLLOW_ZOOM_FACTOR);
        self.target_zoom = self.clamp_zoom(zoom_factor);
    }

    /// Set the target zoom; the current zoom eases toward it on subsequent updates.
    pub fn zoom_to(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.target_zoom = self.clamp_zoom(zoom);
        }
    }

    /// Update viewport dimensions in CSS pixels.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.height = if height.is_finite() { height.max(0.0) } else { 0.0 };
    }

    #[must_use]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    #[must_use]
    pub fn target(&self) -> WorldPoint {
        WorldPoint::new(self.target_x, self.target_y)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn target_zoom(&self) -> f64 {
        self.target_zoom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn settings(&self) -> CameraSettings {
        self.settings
    }

    /// Snapshot of the current view as a value.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.center(), self.zoom, self.width, self.height)
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            translate_x: self.width * 0.5 - self.x * self.zoom,
            translate_y: self.height * 0.5 - self.y * self.zoom,
            scale: self.zoom,
        }
    }

    #[must_use]
    pub fn world_to_screen(&self, p: WorldPoint) -> ScreenPoint {
        self.viewport().world_to_screen(p)
    }

    #[must_use]
    pub fn screen_to_world(&self, p: ScreenPoint) -> WorldPoint {
        self.viewport().screen_to_world(p)
    }

    #[must_use]
    pub fn visible_bounds(&self) -> Rect {
        self.viewport().bounds()
    }

    #[must_use]
    pub fn is_visible(&self, pos: WorldPoint, radius: f64) -> bool {
        self.viewport().is_visible(pos, radius)
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        clamp(zoom, self.settings.zoom_min, self.settings.zoom_max)
    }
}
