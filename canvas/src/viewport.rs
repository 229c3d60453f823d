//! The visible slice of the world as a plain value.
//!
//! [`Viewport`] is the single owner of the world↔screen mapping and of the
//! culling test. The camera hands out a copy each frame and presenters test
//! against that copy, so the two can never disagree about what is on screen.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::math::{ScreenPoint, WorldPoint};

/// Axis-aligned rectangle in world space. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Rectangle centred on `center` extending `half_w` / `half_h` each way.
    #[must_use]
    pub fn from_center(center: WorldPoint, half_w: f64, half_h: f64) -> Self {
        Self::new(center.x - half_w, center.y - half_h, center.x + half_w, center.y + half_h)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    #[must_use]
    pub fn contains(&self, p: WorldPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Grow the rectangle by `margin` on every side.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(self.min_x - margin, self.min_y - margin, self.max_x + margin, self.max_y + margin)
    }

    /// Approximate circle overlap: the centre lies inside the radius-expanded rectangle.
    ///
    /// Corners are over-inclusive by up to `radius * (√2 - 1)`; fine for culling,
    /// not for collision.
    #[must_use]
    pub fn intersects_circle(&self, center: WorldPoint, radius: f64) -> bool {
        self.expand(radius.max(0.0)).contains(center)
    }

    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x && self.max_x >= other.min_x && self.min_y <= other.max_y && self.max_y >= other.min_y
    }
}

/// Camera state frozen for one frame: what the screen shows and how to map onto it.
///
/// `center` is the world point drawn at the middle of the canvas. `zoom` is
/// screen pixels per world unit. `width` / `height` are canvas CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: WorldPoint,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(center: WorldPoint, zoom: f64, width: f64, height: f64) -> Self {
        Self { center, zoom, width, height }
    }

    /// World-space rectangle currently on screen.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let zoom = self.safe_zoom();
        Rect::from_center(self.center, self.width * 0.5 / zoom, self.height * 0.5 / zoom)
    }

    /// Whether a circle of `radius` at `pos` touches the visible area.
    #[must_use]
    pub fn is_visible(&self, pos: WorldPoint, radius: f64) -> bool {
        self.bounds().intersects_circle(pos, radius)
    }

    #[must_use]
    pub fn world_to_screen(&self, p: WorldPoint) -> ScreenPoint {
        let zoom = self.safe_zoom();
        ScreenPoint::new(
            (p.x - self.center.x) * zoom + self.width * 0.5,
            (p.y - self.center.y) * zoom + self.height * 0.5,
        )
    }

    #[must_use]
    pub fn screen_to_world(&self, p: ScreenPoint) -> WorldPoint {
        let zoom = self.safe_zoom();
        WorldPoint::new(
            (p.x - self.width * 0.5) / zoom + self.center.x,
            (p.y - self.height * 0.5) / zoom + self.center.y,
        )
    }

    /// Convert a world-space length to screen pixels.
    #[must_use]
    pub fn world_dist_to_screen(&self, dist: f64) -> f64 {
        dist * self.safe_zoom()
    }

    /// Convert a screen-space length (pixels) to world units.
    #[must_use]
    pub fn screen_dist_to_world(&self, dist: f64) -> f64 {
        dist / self.safe_zoom()
    }

    fn safe_zoom(&self) -> f64 {
        if self.zoom > f64::EPSILON { self.zoom } else { f64::EPSILON }
    }
}
