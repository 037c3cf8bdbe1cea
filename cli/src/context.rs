//! Shared state for the simulation driver.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use grace_core::{ConfigSync, EntityId, FrameSignal, GraceSystem};

/// The simulation advances in one-second frames.
pub const FRAME_STEP: Duration = Duration::from_secs(1);

/// Holds the assembled system plus the frame the user is composing.
///
/// Commands queue signals; `tick` consumes the queue as one simulation
/// frame. Entities whose teleport completion is queued are reported as
/// in-flight for that frame, matching the teleport subsystem contract
/// (pre-resolution state).
pub struct CliContext {
    pub system: GraceSystem,
    pub config: ConfigSync,
    /// Signals queued for the next frame.
    pending: Vec<FrameSignal>,
    /// Entities mid-teleport while the queued signals were captured.
    teleporting: HashSet<EntityId>,
    /// Simulated clock in whole seconds.
    clock_secs: u64,
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CliContext {
    pub fn new() -> Self {
        let config = ConfigSync::load();
        let mut system = GraceSystem::new();
        let icon = grace_core::load_icon(Path::new("icons/grace.png"));
        system.initialize(&config, icon);
        Self {
            system,
            config,
            pending: Vec::new(),
            teleporting: HashSet::new(),
            clock_secs: 0,
        }
    }

    pub fn clock_secs(&self) -> u64 {
        self.clock_secs
    }

    pub fn pending(&self) -> &[FrameSignal] {
        &self.pending
    }

    /// Queue a teleport completion for the next frame.
    pub fn queue_teleport(&mut self, entity_id: EntityId, success: bool) {
        self.pending
            .push(FrameSignal::TeleportCompleted { entity_id, success });
        self.teleporting.insert(entity_id);
    }

    /// Queue a qualifying action for the next frame.
    pub fn queue_action(&mut self, entity_id: EntityId) {
        self.pending.push(FrameSignal::ActionTaken { entity_id });
    }

    /// Advance one frame, consuming the queued signals.
    pub fn advance(&mut self) {
        self.system.sync_config(&self.config);
        let signals = std::mem::take(&mut self.pending);
        let teleporting = std::mem::take(&mut self.teleporting);
        self.system.advance_frame(&signals, &teleporting, FRAME_STEP);
        self.clock_secs += 1;
    }
}
