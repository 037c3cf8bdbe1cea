//! Per-frame processing pipeline.
//!
//! One `advance` call per simulation frame, with a fixed internal phase
//! order:
//!
//! 1. action-driven cancellations (pre-resolution teleport state)
//! 2. teleport-completion applications
//! 3. ttl aging and expiry
//!
//! AI target queries are phase 4 and happen after `advance` returns, via
//! the targeting filter. Reordering these phases is a correctness bug:
//! a stale action signal could cancel a just-granted grace, or an
//! expired grace could protect its holder for one extra frame.

use std::time::Duration;

use tracing::trace;

use crate::effects::GraceTracker;

use super::cancel::ActionCancelMonitor;
use super::signal::FrameSignal;
use super::teleport::TeleportStatus;

/// Drives the grace lifecycle one frame at a time.
#[derive(Debug, Default)]
pub struct FrameProcessor {
    monitor: ActionCancelMonitor,
    /// Frames processed so far.
    frame: u64,
}

impl FrameProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one simulation frame.
    ///
    /// `signals` are the events the host glue collected during the frame;
    /// `teleport` answers per-entity in-flight queries with the state
    /// prior to this frame's teleport resolution; `delta` is the frame's
    /// simulated time step.
    pub fn advance(
        &mut self,
        tracker: &mut GraceTracker,
        signals: &[FrameSignal],
        teleport: &dyn TeleportStatus,
        delta: Duration,
    ) {
        self.frame += 1;
        trace!(frame = self.frame, signals = signals.len(), "frame start");

        // Phase 1: cancellations from deliberate actions.
        self.monitor.observe(signals, teleport, tracker);

        // Phase 2: grace grants from completed teleports.
        apply_teleport_completions(signals, tracker);

        // Phase 3: age out expired instances.
        tracker.tick(delta);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn cancelled_total(&self) -> u64 {
        self.monitor.cancelled_total()
    }
}

/// Grant grace for every teleport that completed successfully this
/// frame. Failed or cancelled teleports grant nothing.
fn apply_teleport_completions(signals: &[FrameSignal], tracker: &mut GraceTracker) {
    for signal in signals {
        let FrameSignal::TeleportCompleted { entity_id, success } = signal else {
            continue;
        };
        if *success {
            tracker.apply(*entity_id);
        }
    }
}
