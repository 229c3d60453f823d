use std::collections::VecDeque;

use web_sys::HtmlCanvasElement;

use crate::camera::{Camera, CameraSettings};
use crate::config::{ConfigError, ViewConfig};
use crate::control::ControlThrottle;
use crate::dom::DomInput;
use crate::input::{ControlSignal, InputEvent, InputSampler};
use crate::presenter::Tuning;
use crate::reconcile::{ReconcileStats, Reconciled, Reconciler};
use crate::scene::Scene;
use crate::snapshot::Snapshot;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Errors surfaced by [`Engine`] construction and snapshot ingestion.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid snapshot payload: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("canvas element is not attached to a document")]
    NoDocument,
}

/// What one [`EngineCore::tick`] produced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutput {
    /// Control message to send now, if the throttle let one through.
    pub control: Option<ControlSignal>,
    /// Presenter changes from every snapshot applied this tick.
    pub stats: ReconcileStats,
    /// Number of queued snapshots applied.
    pub applied: usize,
    /// Number of queued snapshots dropped as stale.
    pub dropped: usize,
}

/// Engine state that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub camera: Camera,
    pub input: InputSampler,
    pub world: Reconciler,
    config: ViewConfig,
    throttle: ControlThrottle,
    pending: VecDeque<Snapshot>,
    spawned: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::build(ViewConfig::default())
    }
}

impl EngineCore {
    /// Build an engine core from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by [`ViewConfig::validate`].
    pub fn new(config: ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ViewConfig) -> Self {
        Self {
            camera: Camera::new(CameraSettings::from(&config)),
            input: InputSampler::new(&config.boost_key),
            world: Reconciler::new(Tuning::from(&config)),
            throttle: ControlThrottle::from(&config),
            pending: VecDeque::new(),
            spawned: false,
            config,
        }
    }

    // --- Data inputs ---

    /// Queue a server snapshot; it is applied at the start of the next tick.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.pending.push_back(snapshot);
    }

    /// Name the player whose head the camera follows and whose steering is sampled.
    /// Re-arms the control throttle so the next signal goes out immediately.
    pub fn set_local_player(&mut self, id: Option<String>) {
        self.world.set_local_player(id);
        self.spawned = false;
        self.throttle.reset();
    }

    /// Drop all world state, e.g. after the connection was re-established.
    pub fn reset_world(&mut self) {
        self.pending.clear();
        self.world.reset();
        self.spawned = false;
        self.throttle.reset();
    }

    /// Update canvas dimensions in CSS pixels.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) {
        self.camera.set_size(width_css, height_css);
    }

    /// Feed one input event to the sampler. Returns `true` if input state changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.input.handle(event)
    }

    // --- Frame ---

    /// Advance the view by `dt` seconds.
    ///
    /// Order within a tick: queued snapshots are applied, presenters animate,
    /// the camera retargets onto the local player and eases, and finally the
    /// input sampler is polled for an outbound control message.
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&mut self, dt: f64, now_ms: f64) -> TickOutput {
        let mut out = TickOutput::default();

        while let Some(snapshot) = self.pending.pop_front() {
            match self.world.apply(&snapshot) {
                Reconciled::Applied(stats) => {
                    out.stats += stats;
                    out.applied += 1;
                }
                Reconciled::Stale { .. } => out.dropped += 1,
            }
        }

        self.world.update(dt);

        let local = self.world.local_player().map(|p| (p.head(), p.length()));
        match local {
            Some((head, length)) => {
                self.camera.follow_target(head, length as f64);
                if !self.spawned {
                    log::debug!("local player spawned at ({:.1}, {:.1})", head.x, head.y);
                    self.spawned = true;
                }
            }
            None => {
                if self.spawned {
                    self.throttle.reset();
                }
                self.spawned = false;
            }
        }

        self.camera.update(dt);

        if let Some((head, _)) = local
            && !self.input.is_destroyed()
        {
            let head_screen = self.camera.world_to_screen(head);
            out.control = self.throttle.poll(now_ms, self.input.control(head_screen));
        }

        out
    }

    /// Feed a frame's worth of input events in order, then [`tick`](Self::tick).
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>, dt: f64, now_ms: f64) -> TickOutput {
        for event in events {
            self.handle_input(&event);
        }
        self.tick(dt, now_ms)
    }

    // --- Queries ---

    /// Draw data for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::build(&self.camera, &self.world, self.config.world_width, self.config.world_height)
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    #[must_use]
    pub fn pending_snapshots(&self) -> usize {
        self.pending.len()
    }

    /// Whether the local player has appeared in the world since the last reset.
    ///
    /// The camera is not snapped on spawn; it eases from wherever it was.
    #[must_use]
    pub fn has_spawned(&self) -> bool {
        self.spawned
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element and its listeners.
pub struct Engine {
    canvas: HtmlCanvasElement,
    dom: DomInput,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to `canvas`, subscribing to its input events.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid or the canvas has no owner document.
    pub fn new(canvas: HtmlCanvasElement, config: ViewConfig) -> Result<Self, EngineError> {
        let core = EngineCore::new(config)?;
        let document = canvas.owner_document().ok_or(EngineError::NoDocument)?;
        let dom = DomInput::bind(&canvas, &document, &core.config().boost_key);
        let mut engine = Self { canvas, dom, core };
        engine.sync_viewport();
        Ok(engine)
    }

    /// Parse and queue a JSON snapshot payload.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Snapshot`] when the payload does not match the snapshot shape.
    pub fn push_snapshot_json(&mut self, raw: &str) -> Result<(), EngineError> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        self.core.push_snapshot(snapshot);
        Ok(())
    }

    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.core.push_snapshot(snapshot);
    }

    pub fn set_local_player(&mut self, id: Option<String>) {
        self.core.set_local_player(id);
    }

    /// Copy the canvas's current CSS size into the camera.
    pub fn sync_viewport(&mut self) {
        let width = f64::from(self.canvas.client_width());
        let height = f64::from(self.canvas.client_height());
        self.core.set_viewport(width, height);
    }

    /// Run one frame: drain DOM input, then tick the core at the current wall-clock time.
    pub fn frame(&mut self, dt: f64) -> TickOutput {
        self.core.frame(self.dom.drain(), dt, js_sys::Date::now())
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.core.scene()
    }

    /// Unsubscribe from the DOM and freeze input. Idempotent.
    pub fn destroy(&mut self) {
        self.dom.destroy();
        self.core.input.destroy();
    }
}
