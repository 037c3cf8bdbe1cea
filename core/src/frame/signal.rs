//! Per-frame input signals consumed by the frame processor.

use crate::entity::EntityId;

/// Signals collected by the host glue during one simulation frame.
///
/// These are "interesting things that happened" at a higher level than
/// raw input events; the glue layer is responsible for emitting only
/// qualifying actions (deliberate player actions: button presses,
/// movement commands, attacks) and never the teleport action itself or
/// AI/automated triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSignal {
    /// A qualifying deliberate action was taken this frame.
    ActionTaken { entity_id: EntityId },

    /// A teleport transaction finished this frame.
    TeleportCompleted {
        entity_id: EntityId,
        /// False for failed or cancelled teleports (no grace granted).
        success: bool,
    },
}
