//! Entity identifiers and target candidates.
//!
//! The core never owns game entities; it only keys its state by the host
//! engine's entity identifier and classifies candidates for eligibility
//! checks in the targeting filter.

/// Host engine entity identifier.
pub type EntityId = i64;

/// Coarse classification of an entity, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Player-controlled character.
    Player,
    /// Player-owned companion/pet.
    Companion,
    /// AI-controlled character.
    Npc,
}

/// A potential target under evaluation by the AI's target selection.
#[derive(Debug, Clone)]
pub struct TargetCandidate {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Display name, used only for logging.
    pub name: String,
}

impl TargetCandidate {
    pub fn new(id: EntityId, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
        }
    }
}
