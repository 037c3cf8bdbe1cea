//! Teleport grace core.
//!
//! Grants a player-controlled entity a temporary immunity from hostile
//! AI targeting after a successful teleport, and revokes it the moment
//! the entity takes a deliberate action other than the teleport itself.
//!
//! The host engine integrates four touch points per simulation frame,
//! in this order:
//!
//! 1. collect frame signals (qualifying actions, teleport completions)
//! 2. [`GraceSystem::advance_frame`]: cancellations, grants, aging
//! 3. AI target selection consults [`SkipPredicate`] per candidate
//! 4. configuration changes flow through [`ConfigSync`] and
//!    [`GraceSystem::sync_config`]

pub mod config;
pub mod effects;
pub mod entity;
pub mod frame;
pub mod icons;
pub mod system;
pub mod targeting;

#[cfg(test)]
mod system_tests;

// Re-exports for convenience
pub use config::{ConfigError, ConfigSync, WriteOrigin};
pub use effects::{ActiveGrace, DefinitionStore, GraceDefinition, GraceTracker, GRACE_EFFECT_ID};
pub use entity::{EntityId, EntityKind, TargetCandidate};
pub use frame::{ActionCancelMonitor, FrameProcessor, FrameSignal, TeleportStatus};
pub use icons::{load_icon, IconData, IconError};
pub use system::GraceSystem;
pub use targeting::{EligibilityFn, GraceTargetFilter, SkipPredicate};
