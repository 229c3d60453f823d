//! Vector and scalar helpers used by every stage of the view pipeline.
//!
//! [`Vec2`] is tagged with a zero-sized space marker so that world-space and
//! screen-space values are different types. The only way to move a value from
//! one space to the other is through [`crate::viewport::Viewport`] (or the
//! [`crate::camera::Camera`] wrappers around it).

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;

use std::f64::consts::{PI, TAU};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// Marker for world-space coordinates (game units).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum World {}

/// Marker for screen-space coordinates (CSS pixels, canvas-local).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {}

/// A 2D vector or point in the coordinate space `S`.
///
/// `Clone`/`Copy` are implemented by hand so they hold for every marker `S`.
#[derive(Debug, PartialEq)]
pub struct Vec2<S> {
    pub x: f64,
    pub y: f64,
    space: PhantomData<S>,
}

/// A point or offset in world units.
pub type WorldPoint = Vec2<World>;

/// A point or offset in canvas-local pixels.
pub type ScreenPoint = Vec2<Screen>;

impl<S> Vec2<S> {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, space: PhantomData };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, space: PhantomData }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).length()
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Unit vector in the same direction, or zero for a zero-length input.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::ZERO
        }
    }

    /// Angle of this vector from the +x axis, in radians.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[must_use]
    pub fn lerp_to(self, target: Self, t: f64) -> Self {
        Self::new(lerp(self.x, target.x, t), lerp(self.y, target.y, t))
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<S> Clone for Vec2<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Vec2<S> {}

impl<S> Default for Vec2<S> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<S> Add for Vec2<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S> Sub for Vec2<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Linear interpolation from `a` to `b` by `t`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp `value` into `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this never panics; with `lo > hi` the result is `hi`.
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Wrap an angle into `(-π, π]`. Non-finite input maps to `0`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Interpolate between two headings along the shorter arc.
#[must_use]
pub fn lerp_angle(from: f64, to: f64, t: f64) -> f64 {
    normalize_angle(from + normalize_angle(to - from) * t)
}

/// Convert a per-reference-frame smoothing factor into the factor for a step of `dt` seconds.
///
/// `1 - (1 - factor)^(dt / ref_dt)`: stepping twice by `dt` closes the same
/// gap as stepping once by `2 * dt`. Non-positive `dt` yields `0`.
#[must_use]
pub fn time_scaled_factor(factor: f64, dt: f64, ref_dt: f64) -> f64 {
    if !(dt > 0.0 && ref_dt > 0.0) || !dt.is_finite() {
        return 0.0;
    }
    let factor = clamp(factor, 0.0, 1.0);
    1.0 - (1.0 - factor).powf(dt / ref_dt)
}
