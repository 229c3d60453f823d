#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use crate::color::rgba_or_fallback;
use crate::consts::{
    DEAD_PLAYER_ALPHA, PLAYER_BASE_RADIUS, PLAYER_MAX_RADIUS, PLAYER_RADIUS_PER_SCORE, REFERENCE_FRAME_SECS,
    TELEPORT_DISTANCE,
};
use crate::math::{WorldPoint, lerp_angle, normalize_angle, time_scaled_factor};
use crate::presenter::{Presenter, Tuning};
use crate::snapshot::PlayerSnapshot;
use crate::viewport::{Rect, Viewport};

/// A snake as the client draws it.
///
/// The authoritative body arrives a few times per second. The rendered body
/// chases it every frame so motion stays fluid at any render rate. A head jump
/// larger than [`TELEPORT_DISTANCE`] (respawn) snaps instead of sliding.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPresenter {
    id: String,
    name: String,
    color: String,
    angle: f64,
    body: Vec<WorldPoint>,
    alive: bool,
    score: f64,
    boosting: bool,
    render_body: Vec<WorldPoint>,
    render_angle: f64,
}

impl PlayerPresenter {
    #[must_use]
    pub fn new(id: &str, snapshot: &PlayerSnapshot) -> Self {
        let body = snapshot.body();
        Self {
            id: id.to_owned(),
            name: snapshot.name.clone(),
            color: snapshot.color.clone(),
            angle: normalize_angle(snapshot.angle),
            render_body: body.clone(),
            body,
            alive: snapshot.alive,
            score: snapshot.score,
            boosting: snapshot.boosting,
            render_angle: normalize_angle(snapshot.angle),
        }
    }

    /// Overwrite authoritative state and resize the rendered body to match.
    ///
    /// Segments added at the tail start where the current rendered tail is,
    /// so growth unrolls from the body instead of flying in from the target.
    pub fn update_from_server(&mut self, snapshot: &PlayerSnapshot) {
        let body = snapshot.body();
        let jumped = self.head().distance_to(snapshot.head()) > TELEPORT_DISTANCE;

        self.name.clone_from(&snapshot.name);
        self.color.clone_from(&snapshot.color);
        self.angle = normalize_angle(snapshot.angle);
        self.alive = snapshot.alive;
        self.score = snapshot.score;
        self.boosting = snapshot.boosting;

        if jumped {
            self.render_body.clone_from(&body);
            self.render_angle = self.angle;
        } else {
            self.render_body.truncate(body.len());
            while self.render_body.len() < body.len() {
                let seed = self.render_body.last().copied().unwrap_or(body[self.render_body.len()]);
                self.render_body.push(seed);
            }
        }
        self.body = body;
    }

    /// Move the rendered body and heading toward the authoritative ones.
    pub fn update(&mut self, dt: f64, interpolation_factor: f64) {
        let t = time_scaled_factor(interpolation_factor, dt, REFERENCE_FRAME_SECS);
        if t <= 0.0 {
            return;
        }
        for (rendered, target) in self.render_body.iter_mut().zip(&self.body) {
            *rendered = rendered.lerp_to(*target, t);
        }
        self.render_angle = lerp_angle(self.render_angle, self.angle, t);
    }

    /// Rendered head position.
    #[must_use]
    pub fn head(&self) -> WorldPoint {
        self.render_body.first().copied().unwrap_or_default()
    }

    /// Authoritative head position from the last snapshot.
    #[must_use]
    pub fn server_head(&self) -> WorldPoint {
        self.body.first().copied().unwrap_or_default()
    }

    /// Number of body segments; drives camera zoom-out.
    #[must_use]
    pub fn length(&self) -> usize {
        self.body.len()
    }

    /// Segment radius, growing with score up to [`PLAYER_MAX_RADIUS`].
    #[must_use]
    pub fn radius(&self) -> f64 {
        let grown = PLAYER_BASE_RADIUS + self.score.max(0.0) * PLAYER_RADIUS_PER_SCORE;
        grown.min(PLAYER_MAX_RADIUS)
    }

    /// Whether any rendered segment touches the viewport.
    #[must_use]
    pub fn is_visible(&self, viewport: Viewport) -> bool {
        let bounds = viewport.bounds();
        let radius = self.radius();
        self.render_body.iter().any(|p| bounds.intersects_circle(*p, radius))
    }

    /// Rectangle covering every rendered segment plus its radius.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let head = self.head();
        let mut rect = Rect::new(head.x, head.y, head.x, head.y);
        for p in &self.render_body {
            rect.min_x = rect.min_x.min(p.x);
            rect.min_y = rect.min_y.min(p.y);
            rect.max_x = rect.max_x.max(p.x);
            rect.max_y = rect.max_y.max(p.y);
        }
        rect.expand(self.radius())
    }

    #[must_use]
    pub fn render_color(&self) -> String {
        let alpha = if self.alive { 1.0 } else { DEAD_PLAYER_ALPHA };
        rgba_or_fallback(&self.color, alpha)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn render_body(&self) -> &[WorldPoint] {
        &self.render_body
    }

    #[must_use]
    pub fn render_angle(&self) -> f64 {
        self.render_angle
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn is_boosting(&self) -> bool {
        self.boosting
    }
}

impl Presenter for PlayerPresenter {
    type Snapshot = PlayerSnapshot;

    fn from_snapshot(id: &str, snapshot: &PlayerSnapshot) -> Self {
        Self::new(id, snapshot)
    }

    fn apply_snapshot(&mut self, snapshot: &PlayerSnapshot) {
        self.update_from_server(snapshot);
    }

    fn advance(&mut self, dt: f64, tuning: &Tuning) {
        self.update(dt, tuning.interpolation_factor);
    }

    fn position(&self) -> WorldPoint {
        self.head()
    }

    fn is_visible(&self, viewport: Viewport) -> bool {
        PlayerPresenter::is_visible(self, viewport)
    }
}
