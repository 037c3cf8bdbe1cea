//! Grace effect lifecycle.
//!
//! This module provides:
//! - **Definition**: the single process-wide template (name, tooltip,
//!   icon, configured duration)
//! - **Active instance**: runtime ttl state per entity
//! - **Tracker**: the controller owning the entity → instance mapping
//!
//! ```text
//! GraceDefinition ──(teleport completed)──▶ ActiveGrace
//!                                             │ tick / qualifying action
//!                                             ▼
//!                                          removed
//! ```

mod active;
mod definition;
pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use active::ActiveGrace;
pub use definition::{DefinitionStore, GraceDefinition, GRACE_EFFECT_ID, GRACE_TOOLTIP};
pub use tracker::GraceTracker;
