//! Client-side mirrors of server entities.
//!
//! A presenter holds the last authoritative values for one entity plus purely
//! local animation state. Snapshots overwrite the former and never touch the
//! latter, so visuals keep moving smoothly between network updates.

pub mod food;
pub mod player;

use crate::config::ViewConfig;
use crate::math::WorldPoint;
use crate::viewport::Viewport;

/// Per-frame tuning shared by all presenters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub interpolation_factor: f64,
}

impl From<&ViewConfig> for Tuning {
    fn from(cfg: &ViewConfig) -> Self {
        Self { interpolation_factor: cfg.interpolation_factor }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from(&ViewConfig::default())
    }
}

/// The seam between the reconciler and a concrete entity kind.
pub trait Presenter {
    type Snapshot;

    /// Build a presenter the first time `id` appears.
    fn from_snapshot(id: &str, snapshot: &Self::Snapshot) -> Self;

    /// Overwrite authoritative fields; local animation state is kept.
    fn apply_snapshot(&mut self, snapshot: &Self::Snapshot);

    /// Advance local animation by `dt` seconds.
    fn advance(&mut self, dt: f64, tuning: &Tuning);

    fn position(&self) -> WorldPoint;

    fn is_visible(&self, viewport: Viewport) -> bool;
}
