#[cfg(test)]
#[path = "food_test.rs"]
mod food_test;

use std::f64::consts::TAU;

use crate::color::rgba_or_fallback;
use crate::consts::{FOOD_VISIBILITY_MARGIN, GLOW_AMPLITUDE, GLOW_BASE, PULSE_SIZE_AMPLITUDE, PULSE_SPEED};
use crate::math::WorldPoint;
use crate::presenter::{Presenter, Tuning};
use crate::snapshot::FoodSnapshot;
use crate::viewport::{Rect, Viewport};

/// A food pellet as the client draws it.
///
/// `position`, `color`, `size` and `mass` come from the server. The pulse
/// phase and glow are local: they start at zero on construction and are never
/// reset by later snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPresenter {
    id: String,
    position: WorldPoint,
    color: String,
    size: f64,
    mass: f64,
    pulse_animation: f64,
    glow_intensity: f64,
}

impl FoodPresenter {
    #[must_use]
    pub fn new(id: &str, snapshot: &FoodSnapshot) -> Self {
        Self {
            id: id.to_owned(),
            position: snapshot.position(),
            color: snapshot.color.clone(),
            size: snapshot.size,
            mass: snapshot.mass,
            pulse_animation: 0.0,
            glow_intensity: GLOW_BASE,
        }
    }

    /// Overwrite position, color, size and mass.
    pub fn update_from_server(&mut self, snapshot: &FoodSnapshot) {
        self.position = snapshot.position();
        self.color.clone_from(&snapshot.color);
        self.size = snapshot.size;
        self.mass = snapshot.mass;
    }

    /// Advance the pulse by `dt * 3` radians (mod 2π) and recompute glow.
    pub fn update(&mut self, dt: f64) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }
        let mut phase = (self.pulse_animation + dt * PULSE_SPEED).rem_euclid(TAU);
        if phase >= TAU {
            phase = 0.0;
        }
        self.pulse_animation = phase;
        self.glow_intensity = GLOW_BASE + GLOW_AMPLITUDE * phase.sin();
    }

    /// Server size modulated by `1 + 0.1 * sin(phase)`.
    #[must_use]
    pub fn animated_size(&self) -> f64 {
        self.size * (1.0 + PULSE_SIZE_AMPLITUDE * self.pulse_animation.sin())
    }

    /// Culling test with a `2 × size` margin so pellets do not pop in at the edges.
    #[must_use]
    pub fn is_visible(&self, viewport: Viewport) -> bool {
        viewport.is_visible(self.position, self.size * FOOD_VISIBILITY_MARGIN)
    }

    /// Stored color as `rgba()` with the current glow as alpha.
    #[must_use]
    pub fn render_color(&self) -> String {
        rgba_or_fallback(&self.color, self.glow_intensity)
    }

    #[must_use]
    pub fn distance_to(&self, point: WorldPoint) -> f64 {
        self.position.distance_to(point)
    }

    #[must_use]
    pub fn contains(&self, point: WorldPoint) -> bool {
        self.distance_to(point) <= self.size
    }

    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center(self.position, self.size, self.size)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn position(&self) -> WorldPoint {
        self.position
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn pulse_animation(&self) -> f64 {
        self.pulse_animation
    }

    #[must_use]
    pub fn glow_intensity(&self) -> f64 {
        self.glow_intensity
    }
}

impl Presenter for FoodPresenter {
    type Snapshot = FoodSnapshot;

    fn from_snapshot(id: &str, snapshot: &FoodSnapshot) -> Self {
        Self::new(id, snapshot)
    }

    fn apply_snapshot(&mut self, snapshot: &FoodSnapshot) {
        self.update_from_server(snapshot);
    }

    fn advance(&mut self, dt: f64, _tuning: &Tuning) {
        self.update(dt);
    }

    fn position(&self) -> WorldPoint {
        self.position
    }

    fn is_visible(&self, viewport: Viewport) -> bool {
        FoodPresenter::is_visible(self, viewport)
    }
}
