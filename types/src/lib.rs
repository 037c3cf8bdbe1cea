//! Shared configuration types for the teleport grace system.
//!
//! Kept in a separate crate so the core and any frontends agree on the
//! persisted config schema without depending on each other.

use serde::{Deserialize, Serialize};

/// Smallest accepted grace duration, in seconds.
pub const MIN_DURATION_SECS: u32 = 1;

/// Largest accepted grace duration, in seconds.
pub const MAX_DURATION_SECS: u32 = 300;

/// Duration used when no config file exists.
pub const DEFAULT_DURATION_SECS: u32 = 60;

/// User-facing configuration surface.
///
/// Exactly two values: the grace duration and the admin lock flag.
/// The lock restricts duration writes to authoritative sources only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraceConfig {
    /// Maximum time the grace period lasts, in seconds. Range [1, 300].
    pub duration_secs: u32,

    /// When true, only authoritative sources may change the duration.
    pub locked: bool,
}

impl Default for GraceConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            locked: true,
        }
    }
}

impl GraceConfig {
    /// Check a candidate duration against the accepted range.
    pub fn duration_in_range(secs: u32) -> bool {
        (MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_locked_sixty_seconds() {
        let config = GraceConfig::default();
        assert_eq!(config.duration_secs, 60);
        assert!(config.locked);
    }

    #[test]
    fn range_check_matches_bounds() {
        assert!(!GraceConfig::duration_in_range(0));
        assert!(GraceConfig::duration_in_range(1));
        assert!(GraceConfig::duration_in_range(300));
        assert!(!GraceConfig::duration_in_range(301));
    }
}
