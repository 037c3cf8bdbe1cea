//! Early cancellation of grace on deliberate player action.

use tracing::debug;

use crate::effects::GraceTracker;
use crate::entity::EntityId;

use super::signal::FrameSignal;
use super::teleport::TeleportStatus;

/// Watches the frame's action signals and cancels grace for entities
/// that acted deliberately while not mid-teleport.
///
/// Must run before teleport-completion processing in the same frame:
/// the teleport status it consults is the pre-resolution state, so an
/// action landing in the same frame as the entity's own teleport does
/// not cancel the grace that teleport grants.
#[derive(Debug, Default)]
pub struct ActionCancelMonitor {
    /// Total early cancellations, for diagnostics.
    cancelled_total: u64,
}

impl ActionCancelMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one frame's signals, removing grace where a qualifying
    /// action occurred outside a teleport transaction.
    pub fn observe(
        &mut self,
        signals: &[FrameSignal],
        teleport: &dyn TeleportStatus,
        tracker: &mut GraceTracker,
    ) {
        for signal in signals {
            let FrameSignal::ActionTaken { entity_id } = signal else {
                continue;
            };
            self.cancel_if_acting(*entity_id, teleport, tracker);
        }
    }

    fn cancel_if_acting(
        &mut self,
        entity_id: EntityId,
        teleport: &dyn TeleportStatus,
        tracker: &mut GraceTracker,
    ) {
        if teleport.is_teleporting(entity_id) {
            return;
        }
        if tracker.remove(entity_id) {
            self.cancelled_total += 1;
            debug!(entity_id, "grace cancelled by deliberate action");
        }
    }

    pub fn cancelled_total(&self) -> u64 {
        self.cancelled_total
    }
}
