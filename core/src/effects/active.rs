//! Active grace instances (runtime state).
//!
//! An `ActiveGrace` exists from a successful teleport until either its
//! ttl runs out or a qualifying action cancels it. At most one instance
//! exists per entity; re-application refreshes the existing instance.

use std::time::Duration;

use crate::entity::EntityId;

/// A grace instance on a specific entity.
#[derive(Debug, Clone)]
pub struct ActiveGrace {
    /// Entity holding the grace.
    pub entity_id: EntityId,

    /// Remaining time before expiry.
    pub remaining: Duration,

    /// Total duration, captured from the definition at apply time.
    /// Later configuration changes do not alter this instance.
    pub duration: Duration,
}

impl ActiveGrace {
    pub fn new(entity_id: EntityId, duration: Duration) -> Self {
        Self {
            entity_id,
            remaining: duration,
            duration,
        }
    }

    /// Reset the ttl to the full current duration (re-teleport policy).
    pub fn refresh(&mut self, duration: Duration) {
        self.remaining = duration;
        self.duration = duration;
    }

    /// Age the instance by one simulation step.
    pub fn tick(&mut self, delta: Duration) {
        self.remaining = self.remaining.saturating_sub(delta);
    }

    /// Whether the ttl has run out.
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Remaining time in seconds, for display.
    pub fn remaining_secs(&self) -> f32 {
        self.remaining.as_secs_f32()
    }
}
