//! Authoritative game state as delivered by the server.
//!
//! These types mirror the JSON payload of a `snapshot` frame. They carry no
//! client-side state; presenters copy what they need out of them.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::FALLBACK_COLOR;
use crate::math::WorldPoint;

/// One food pellet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSnapshot {
    pub x: f64,
    pub y: f64,
    #[serde(default = "fallback_color")]
    pub color: String,
    pub size: f64,
    #[serde(default)]
    pub mass: f64,
}

impl FoodSnapshot {
    #[must_use]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}

/// One body segment centre in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub x: f64,
    pub y: f64,
}

/// One snake. `x` / `y` is the head; `segments` runs head to tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub segments: Vec<SegmentSnapshot>,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default)]
    pub score: f64,
    #[serde(default = "fallback_color")]
    pub color: String,
    #[serde(default)]
    pub boosting: bool,
}

impl PlayerSnapshot {
    #[must_use]
    pub fn head(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Body points head to tail; a snake with no reported segments is just its head.
    #[must_use]
    pub fn body(&self) -> Vec<WorldPoint> {
        if self.segments.is_empty() {
            vec![self.head()]
        } else {
            self.segments.iter().map(|s| WorldPoint::new(s.x, s.y)).collect()
        }
    }
}

/// A server broadcast of entity state.
///
/// `full` snapshots list every live entity; ids missing from them are gone.
/// Partial snapshots list only changed entities and name removals explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Server time in milliseconds; non-decreasing across a session.
    #[serde(default)]
    pub ts: i64,
    #[serde(default = "default_full")]
    pub full: bool,
    #[serde(default)]
    pub players: BTreeMap<String, PlayerSnapshot>,
    #[serde(default)]
    pub food: BTreeMap<String, FoodSnapshot>,
    #[serde(default)]
    pub removed_players: Vec<String>,
    #[serde(default)]
    pub removed_food: Vec<String>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            ts: 0,
            full: true,
            players: BTreeMap::new(),
            food: BTreeMap::new(),
            removed_players: Vec::new(),
            removed_food: Vec::new(),
        }
    }
}

fn fallback_color() -> String {
    FALLBACK_COLOR.to_owned()
}

fn default_alive() -> bool {
    true
}

fn default_full() -> bool {
    true
}
