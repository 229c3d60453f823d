//! Draw data for one frame.
//!
//! [`Scene::build`] reads camera and presenters and produces plain values a
//! renderer can walk without touching engine state. Nothing here draws.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::camera::{Camera, Transform};
use crate::math::WorldPoint;
use crate::reconcile::Reconciler;
use crate::viewport::{Rect, Viewport};

/// A food pellet ready to fill as a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSprite {
    pub id: String,
    pub center: WorldPoint,
    pub radius: f64,
    pub fill: String,
}

/// A snake ready to stroke as a chain of circles, head first.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSprite {
    pub id: String,
    pub name: String,
    pub segments: Vec<WorldPoint>,
    pub radius: f64,
    pub fill: String,
    pub angle: f64,
    pub alive: bool,
    pub is_local: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub transform: Transform,
    pub viewport: Viewport,
    /// Playable area, for the border.
    pub world_bounds: Rect,
    pub food: Vec<FoodSprite>,
    /// Remote players first, the local player last so it draws on top.
    pub players: Vec<PlayerSprite>,
}

impl Scene {
    #[must_use]
    pub fn build(camera: &Camera, world: &Reconciler, world_width: f64, world_height: f64) -> Self {
        let viewport = camera.viewport();
        let local_id = world.local_player_id();

        let food = world
            .visible_food(viewport)
            .map(|f| FoodSprite {
                id: f.id().to_owned(),
                center: f.position(),
                radius: f.animated_size(),
                fill: f.render_color(),
            })
            .collect();

        let mut players: Vec<PlayerSprite> = world
            .visible_players(viewport)
            .map(|p| PlayerSprite {
                id: p.id().to_owned(),
                name: p.name().to_owned(),
                segments: p.render_body().to_vec(),
                radius: p.radius(),
                fill: p.render_color(),
                angle: p.render_angle(),
                alive: p.is_alive(),
                is_local: Some(p.id()) == local_id,
            })
            .collect();
        // Stable: remote order stays by id.
        players.sort_by_key(|p| p.is_local);

        Self {
            transform: camera.transform(),
            viewport,
            world_bounds: Rect::new(0.0, 0.0, world_width.max(0.0), world_height.max(0.0)),
            food,
            players,
        }
    }

    #[must_use]
    pub fn local_player(&self) -> Option<&PlayerSprite> {
        self.players.iter().find(|p| p.is_local)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.food.is_empty() && self.players.is_empty()
    }
}
