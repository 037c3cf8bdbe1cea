//! Grace lifecycle controller.
//!
//! Owns the entity → `ActiveGrace` mapping. All other components read or
//! mutate grace state exclusively through this type: the frame processor
//! applies and cancels, the targeting filter queries, nothing else holds
//! a reference into the map.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, trace};

use crate::entity::EntityId;
use crate::icons::IconData;

use super::{ActiveGrace, DefinitionStore, GraceDefinition};

/// Tracks active grace instances and owns the effect definition.
#[derive(Debug, Default)]
pub struct GraceTracker {
    /// The process-wide effect template.
    store: DefinitionStore,

    /// Currently active instances, at most one per entity.
    active: HashMap<EntityId, ActiveGrace>,
}

impl GraceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the effect definition. Until this runs, `apply` is a no-op
    /// (startup-ordering condition; resolves once the host is ready).
    pub fn initialize(&mut self, duration_secs: u32, icon: Option<IconData>) {
        self.store.initialize(duration_secs, icon);
        debug!(duration_secs, "grace definition initialized");
    }

    pub fn definition(&self) -> Option<&GraceDefinition> {
        self.store.get()
    }

    /// Update the template duration. Active instances keep the duration
    /// they were created with; only later applies see the new value.
    pub fn set_duration(&mut self, duration_secs: u32) {
        self.store.set_duration(duration_secs);
    }

    /// Grant grace to an entity with ttl = configured duration at call time.
    ///
    /// Re-applying to an already graced entity refreshes the ttl to the
    /// full current duration. Returns false while uninitialized.
    pub fn apply(&mut self, entity_id: EntityId) -> bool {
        let Some(duration) = self.store.duration() else {
            debug!(entity_id, "grace apply skipped: definition not initialized");
            return false;
        };

        match self.active.get_mut(&entity_id) {
            Some(existing) => {
                existing.refresh(duration);
                trace!(entity_id, ?duration, "grace refreshed");
            }
            None => {
                self.active
                    .insert(entity_id, ActiveGrace::new(entity_id, duration));
                trace!(entity_id, ?duration, "grace applied");
            }
        }
        true
    }

    /// Pure query: does the entity currently hold grace?
    pub fn is_active(&self, entity_id: EntityId) -> bool {
        self.active.contains_key(&entity_id)
    }

    /// Cancel grace for an entity. Idempotent; returns whether an
    /// instance was actually removed.
    pub fn remove(&mut self, entity_id: EntityId) -> bool {
        let removed = self.active.remove(&entity_id).is_some();
        if removed {
            trace!(entity_id, "grace removed");
        }
        removed
    }

    /// Age every instance by one simulation step, dropping those whose
    /// ttl reaches zero. Must run exactly once per frame, after action
    /// cancellation and teleport application, before AI target queries.
    pub fn tick(&mut self, delta: Duration) {
        if self.active.is_empty() {
            return;
        }
        self.active.retain(|entity_id, grace| {
            grace.tick(delta);
            let keep = !grace.is_expired();
            if !keep {
                trace!(entity_id, "grace expired");
            }
            keep
        });
    }

    /// Look up the active instance for an entity.
    pub fn get(&self, entity_id: EntityId) -> Option<&ActiveGrace> {
        self.active.get(&entity_id)
    }

    /// All active instances, for display.
    pub fn active(&self) -> impl Iterator<Item = &ActiveGrace> {
        self.active.values()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Drop every active instance (e.g. on world unload).
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
