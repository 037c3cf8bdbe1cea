//! Grace-aware skip decision for AI target selection.
//!
//! The AI targeting subsystem exposes a registrable per-candidate
//! predicate; the grace check composes with the engine's native skip
//! decision by logical OR. It never replaces or short-circuits the
//! native decision, so every other skip reason (friendly fire rules,
//! stealth, ...) stays intact.

use crate::effects::GraceTracker;
use crate::entity::{EntityKind, TargetCandidate};

/// Registrable extension point of the AI targeting subsystem.
///
/// `base_decision` is the engine's native skip decision for the
/// candidate. Implementations may only add skip reasons: if
/// `base_decision` is true the result must be true.
pub trait SkipPredicate {
    fn should_skip(&self, candidate: &TargetCandidate, base_decision: bool) -> bool;
}

/// Which candidates may hold grace at all.
pub type EligibilityFn = Box<dyn Fn(&TargetCandidate) -> bool + Send>;

/// The grace-aware skip predicate.
///
/// Pure read over the tracker; never mutates grace state.
pub struct GraceTargetFilter {
    /// Grace eligibility. Defaults to player-controlled entities only;
    /// configurable rather than hardcoded.
    eligible: EligibilityFn,
}

impl Default for GraceTargetFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraceTargetFilter {
    /// Default policy: only player-controlled entities are eligible.
    pub fn new() -> Self {
        Self::with_eligibility(Box::new(|candidate| candidate.kind == EntityKind::Player))
    }

    /// Custom eligibility policy.
    pub fn with_eligibility(eligible: EligibilityFn) -> Self {
        Self { eligible }
    }

    /// The composed skip decision:
    /// `base_decision OR (eligible(candidate) AND grace active)`.
    pub fn should_skip(
        &self,
        tracker: &GraceTracker,
        candidate: &TargetCandidate,
        base_decision: bool,
    ) -> bool {
        base_decision || ((self.eligible)(candidate) && tracker.is_active(candidate.id))
    }
}

impl std::fmt::Debug for GraceTargetFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraceTargetFilter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;

    fn make_tracker(graced: &[EntityId]) -> GraceTracker {
        let mut tracker = GraceTracker::new();
        tracker.initialize(60, None);
        for &id in graced {
            tracker.apply(id);
        }
        tracker
    }

    fn player(id: EntityId) -> TargetCandidate {
        TargetCandidate::new(id, EntityKind::Player, "player")
    }

    fn npc(id: EntityId) -> TargetCandidate {
        TargetCandidate::new(id, EntityKind::Npc, "npc")
    }

    #[test]
    fn graced_player_is_skipped() {
        let tracker = make_tracker(&[1]);
        let filter = GraceTargetFilter::new();

        assert!(filter.should_skip(&tracker, &player(1), false));
        assert!(!filter.should_skip(&tracker, &player(2), false));
    }

    #[test]
    fn base_decision_is_always_preserved() {
        let tracker = make_tracker(&[]);
        let filter = GraceTargetFilter::new();

        // Never weaker: an engine skip stays a skip even without grace.
        assert!(filter.should_skip(&tracker, &player(1), true));
        assert!(filter.should_skip(&tracker, &npc(9), true));
    }

    #[test]
    fn ineligible_entities_are_unaffected() {
        let tracker = make_tracker(&[7]);
        let filter = GraceTargetFilter::new();

        // Never over-broad: an NPC with a (stray) grace entry is still
        // targetable under the default policy.
        assert!(!filter.should_skip(&tracker, &npc(7), false));
    }

    #[test]
    fn eligibility_is_configurable() {
        let tracker = make_tracker(&[7]);
        let filter = GraceTargetFilter::with_eligibility(Box::new(|candidate| {
            matches!(candidate.kind, EntityKind::Player | EntityKind::Companion)
        }));

        let companion = TargetCandidate::new(7, EntityKind::Companion, "pet");
        assert!(filter.should_skip(&tracker, &companion, false));
    }

    #[test]
    fn decision_table_matches_or_composition() {
        let tracker = make_tracker(&[1]);
        let filter = GraceTargetFilter::new();

        for base in [false, true] {
            for candidate in [player(1), player(2), npc(1)] {
                let eligible = candidate.kind == EntityKind::Player;
                let expected = base || (eligible && tracker.is_active(candidate.id));
                assert_eq!(filter.should_skip(&tracker, &candidate, base), expected);
            }
        }
    }
}
