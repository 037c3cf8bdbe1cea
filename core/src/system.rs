//! Top-level wiring of the grace components.
//!
//! `GraceSystem` owns the tracker, the frame processor and the targeting
//! filter, and exposes the four per-tick touch points in their required
//! order: the host calls `advance_frame` once per simulation step
//! (cancellations, then teleport grants, then aging), then performs its
//! AI target queries through `should_skip` / `should_skip_target`.

use std::time::Duration;

use tracing::debug;

use crate::config::ConfigSync;
use crate::effects::{ActiveGrace, GraceTracker};
use crate::entity::{EntityId, TargetCandidate};
use crate::frame::{FrameProcessor, FrameSignal, TeleportStatus};
use crate::icons::IconData;
use crate::targeting::{EligibilityFn, GraceTargetFilter, SkipPredicate};

/// The assembled grace system.
#[derive(Debug, Default)]
pub struct GraceSystem {
    tracker: GraceTracker,
    processor: FrameProcessor,
    filter: GraceTargetFilter,
    /// Last config version pulled into the definition store.
    config_version: u64,
}

impl GraceSystem {
    /// System with the default eligibility policy (players only).
    pub fn new() -> Self {
        Self::default()
    }

    /// System with a custom grace-eligibility predicate.
    pub fn with_eligibility(eligible: EligibilityFn) -> Self {
        Self {
            filter: GraceTargetFilter::with_eligibility(eligible),
            ..Self::default()
        }
    }

    /// Install the effect definition once the host is ready. Grace
    /// operations no-op until this runs.
    pub fn initialize(&mut self, config: &ConfigSync, icon: Option<IconData>) {
        self.tracker.initialize(config.duration_secs(), icon);
        self.config_version = config.version();
    }

    /// Pull a changed duration into the definition store. Idempotent
    /// per config version; call whenever the distributor may have
    /// accepted a write (or once per frame).
    pub fn sync_config(&mut self, config: &ConfigSync) {
        if config.version() == self.config_version {
            return;
        }
        self.tracker.set_duration(config.duration_secs());
        self.config_version = config.version();
        debug!(
            duration_secs = config.duration_secs(),
            "definition store synced to config"
        );
    }

    /// Process one simulation frame. See `FrameProcessor::advance` for
    /// the phase ordering.
    pub fn advance_frame(
        &mut self,
        signals: &[FrameSignal],
        teleport: &dyn TeleportStatus,
        delta: Duration,
    ) {
        self.processor
            .advance(&mut self.tracker, signals, teleport, delta);
    }

    /// Phase-4 read: the composed skip decision for one candidate.
    pub fn should_skip_target(&self, candidate: &TargetCandidate, base_decision: bool) -> bool {
        self.filter.should_skip(&self.tracker, candidate, base_decision)
    }

    /// Pure query: does the entity currently hold grace?
    pub fn is_active(&self, entity_id: EntityId) -> bool {
        self.tracker.is_active(entity_id)
    }

    /// Active instances, for display.
    pub fn active(&self) -> impl Iterator<Item = &ActiveGrace> {
        self.tracker.active()
    }

    pub fn tracker(&self) -> &GraceTracker {
        &self.tracker
    }

    pub fn processor(&self) -> &FrameProcessor {
        &self.processor
    }
}

/// Registration surface for the AI targeting subsystem.
impl SkipPredicate for GraceSystem {
    fn should_skip(&self, candidate: &TargetCandidate, base_decision: bool) -> bool {
        self.should_skip_target(candidate, base_decision)
    }
}
