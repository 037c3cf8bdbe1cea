//! Contract with the host's teleport subsystem.

use crate::entity::EntityId;

/// Transient per-entity teleport state, supplied by the teleport
/// subsystem.
///
/// Contract: within a frame, answers reflect the state *prior to* this
/// frame's teleport resolution. An entity whose teleport completes this
/// frame still reports `true` here, so the input burst belonging to the
/// teleport itself never cancels the grace that teleport grants.
pub trait TeleportStatus {
    fn is_teleporting(&self, entity_id: EntityId) -> bool;
}

/// A set of in-flight entity IDs is itself a valid status source.
impl TeleportStatus for std::collections::HashSet<EntityId> {
    fn is_teleporting(&self, entity_id: EntityId) -> bool {
        self.contains(&entity_id)
    }
}
