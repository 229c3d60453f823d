//! Snapshot reconciliation: keeps the client's presenters in step with the server.
//!
//! Each entity kind lives in a [`PresenterSet`] keyed by server id. A snapshot
//! creates presenters for new ids, updates existing ones in place (local
//! animation survives) and destroys presenters whose ids are gone.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::presenter::food::FoodPresenter;
use crate::presenter::player::PlayerPresenter;
use crate::presenter::{Presenter, Tuning};
use crate::snapshot::Snapshot;
use crate::viewport::Viewport;

/// Counts of presenter changes made by one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl ReconcileStats {
    /// Total number of presenters touched.
    #[must_use]
    pub fn touched(&self) -> usize {
        self.created + self.updated + self.removed
    }
}

impl std::ops::AddAssign for ReconcileStats {
    fn add_assign(&mut self, rhs: Self) {
        self.created += rhs.created;
        self.updated += rhs.updated;
        self.removed += rhs.removed;
    }
}

/// Outcome of [`Reconciler::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Applied(ReconcileStats),
    /// The snapshot was older than the last one applied and was dropped.
    Stale { ts: i64, last_ts: i64 },
}

/// Presenters of one kind, keyed by server id in stable order.
#[derive(Debug, Clone)]
pub struct PresenterSet<P> {
    items: BTreeMap<String, P>,
}

impl<P> Default for PresenterSet<P> {
    fn default() -> Self {
        Self { items: BTreeMap::new() }
    }
}

impl<P: Presenter> PresenterSet<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update `id` in place, or create it. Returns `true` when created.
    pub fn upsert(&mut self, id: &str, snapshot: &P::Snapshot) -> bool {
        if let Some(existing) = self.items.get_mut(id) {
            existing.apply_snapshot(snapshot);
            false
        } else {
            self.items.insert(id.to_owned(), P::from_snapshot(id, snapshot));
            true
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<P> {
        self.items.remove(id)
    }

    /// Make the set match `entries` exactly.
    pub fn sync_full(&mut self, entries: &BTreeMap<String, P::Snapshot>) -> ReconcileStats {
        let before = self.items.len();
        self.items.retain(|id, _| entries.contains_key(id));
        let mut stats = ReconcileStats { removed: before - self.items.len(), ..ReconcileStats::default() };
        stats += self.upsert_all(entries);
        stats
    }

    /// Upsert `entries`, then drop every id in `removed`.
    pub fn sync_partial(&mut self, entries: &BTreeMap<String, P::Snapshot>, removed: &[String]) -> ReconcileStats {
        let mut stats = self.upsert_all(entries);
        // An id both listed and removed in one snapshot ends up removed.
        let removed: BTreeSet<&String> = removed.iter().collect();
        for id in removed {
            if self.items.remove(id.as_str()).is_some() {
                stats.removed += 1;
            }
        }
        stats
    }

    fn upsert_all(&mut self, entries: &BTreeMap<String, P::Snapshot>) -> ReconcileStats {
        let mut stats = ReconcileStats::default();
        for (id, snap) in entries {
            if self.upsert(id, snap) {
                stats.created += 1;
            } else {
                stats.updated += 1;
            }
        }
        stats
    }

    /// Advance every presenter's local animation.
    pub fn update_all(&mut self, dt: f64, tuning: &Tuning) {
        for presenter in self.items.values_mut() {
            presenter.advance(dt, tuning);
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&P> {
        self.items.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &P)> {
        self.items.iter().map(|(id, p)| (id.as_str(), p))
    }

    /// Presenters that pass their own culling test against `viewport`.
    pub fn visible(&self, viewport: Viewport) -> impl Iterator<Item = &P> {
        self.items.values().filter(move |p| p.is_visible(viewport))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Client-side mirror of the whole world.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    food: PresenterSet<FoodPresenter>,
    players: PresenterSet<PlayerPresenter>,
    last_ts: Option<i64>,
    local_player_id: Option<String>,
    tuning: Tuning,
}

impl Reconciler {
    #[must_use]
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning, ..Self::default() }
    }

    /// Fold one server snapshot into the presenter sets.
    ///
    /// Snapshots with a timestamp older than the last applied one are dropped.
    /// Equal timestamps are applied, since a server may split one tick.
    pub fn apply(&mut self, snapshot: &Snapshot) -> Reconciled {
        if let Some(last_ts) = self.last_ts
            && snapshot.ts < last_ts
        {
            log::debug!("dropping stale snapshot ts={} last_ts={last_ts}", snapshot.ts);
            return Reconciled::Stale { ts: snapshot.ts, last_ts };
        }
        self.last_ts = Some(snapshot.ts);

        let mut stats = if snapshot.full {
            self.food.sync_full(&snapshot.food)
        } else {
            self.food.sync_partial(&snapshot.food, &snapshot.removed_food)
        };
        stats += if snapshot.full {
            self.players.sync_full(&snapshot.players)
        } else {
            self.players.sync_partial(&snapshot.players, &snapshot.removed_players)
        };
        Reconciled::Applied(stats)
    }

    /// Advance every presenter by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.food.update_all(dt, &self.tuning);
        self.players.update_all(dt, &self.tuning);
    }

    pub fn set_local_player(&mut self, id: Option<String>) {
        self.local_player_id = id;
    }

    #[must_use]
    pub fn local_player_id(&self) -> Option<&str> {
        self.local_player_id.as_deref()
    }

    /// The local player's presenter while the server still lists its id.
    ///
    /// Dead players are returned too, so the camera keeps framing the body until it is removed.
    #[must_use]
    pub fn local_player(&self) -> Option<&PlayerPresenter> {
        self.local_player_id.as_deref().and_then(|id| self.players.get(id))
    }

    pub fn visible_food(&self, viewport: Viewport) -> impl Iterator<Item = &FoodPresenter> {
        self.food.visible(viewport)
    }

    pub fn visible_players(&self, viewport: Viewport) -> impl Iterator<Item = &PlayerPresenter> {
        self.players.visible(viewport)
    }

    #[must_use]
    pub fn food(&self) -> &PresenterSet<FoodPresenter> {
        &self.food
    }

    #[must_use]
    pub fn players(&self) -> &PresenterSet<PlayerPresenter> {
        &self.players
    }

    #[must_use]
    pub fn last_ts(&self) -> Option<i64> {
        self.last_ts
    }

    #[must_use]
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Forget all entities and the timestamp watermark, e.g. after a reconnect.
    pub fn reset(&mut self) {
        self.food.clear();
        self.players.clear();
        self.last_ts = None;
    }
}
