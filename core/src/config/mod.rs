//! Configuration distribution.
//!
//! `ConfigSync` is the authoritative holder of the two user-facing
//! values (grace duration, lock flag). Writes go through validation and
//! lock checks; accepted changes bump a version counter that downstream
//! readers use as the change notification (the single-threaded
//! equivalent of a push subscription; see `GraceSystem::sync_config`).
//!
//! The network transport that carries the authoritative value between
//! simulation instances is an external collaborator: it replays remote
//! writes into `set_duration` with `WriteOrigin::Replica`, and
//! broadcasts accepted local authoritative writes.

mod error;

pub use error::ConfigError;

use tracing::{debug, info};

use grace_types::GraceConfig;

/// Application name used for the confy config path.
const APP_NAME: &str = "grace";
const CONFIG_NAME: &str = "config";

/// Where a configuration write originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOrigin {
    /// Privileged source (server admin / host). May bypass the lock.
    Authoritative,
    /// Non-privileged source (remote client, local UI on a replica).
    Replica,
}

/// Validated scalar storage for the grace configuration.
///
/// State machine for the duration: defaults → Configured(v) →
/// Configured(v'), transitions only via validated `set_duration` calls.
#[derive(Debug)]
pub struct ConfigSync {
    duration_secs: u32,
    locked: bool,
    /// Bumped on every accepted change; never decreases.
    version: u64,
}

impl Default for ConfigSync {
    fn default() -> Self {
        Self::from_config(GraceConfig::default())
    }
}

impl ConfigSync {
    pub fn from_config(config: GraceConfig) -> Self {
        Self {
            duration_secs: config.duration_secs,
            locked: config.locked,
            version: 1,
        }
    }

    /// Load persisted configuration, falling back to defaults on any
    /// load failure.
    pub fn load() -> Self {
        match confy::load::<GraceConfig>(APP_NAME, CONFIG_NAME) {
            Ok(config) if GraceConfig::duration_in_range(config.duration_secs) => {
                Self::from_config(config)
            }
            Ok(config) => {
                debug!(
                    duration_secs = config.duration_secs,
                    "persisted duration out of range, using defaults"
                );
                Self::default()
            }
            Err(err) => {
                debug!(%err, "no usable config file, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the current values.
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self.as_config()).map_err(ConfigError::Save)
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Change-notification counter. Readers re-sync when this grows.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Set the grace duration.
    ///
    /// Out-of-range values are rejected (never clamped) and the prior
    /// value is retained. While locked, only authoritative writes are
    /// accepted; rejected replica writes are surfaced to the caller and
    /// logged at debug only.
    pub fn set_duration(&mut self, secs: u32, origin: WriteOrigin) -> Result<(), ConfigError> {
        if !GraceConfig::duration_in_range(secs) {
            return Err(ConfigError::OutOfRange { value: secs });
        }
        if self.locked && origin != WriteOrigin::Authoritative {
            debug!(secs, "duration write rejected: configuration locked");
            return Err(ConfigError::Locked);
        }
        if self.duration_secs != secs {
            info!(from = self.duration_secs, to = secs, "grace duration changed");
            self.duration_secs = secs;
            self.version += 1;
        }
        Ok(())
    }

    /// Change the lock flag. Authoritative sources only.
    pub fn set_locked(&mut self, locked: bool, origin: WriteOrigin) -> Result<(), ConfigError> {
        if origin != WriteOrigin::Authoritative {
            debug!(locked, "lock write rejected: not authoritative");
            return Err(ConfigError::Locked);
        }
        if self.locked != locked {
            info!(locked, "configuration lock changed");
            self.locked = locked;
            self.version += 1;
        }
        Ok(())
    }

    fn as_config(&self) -> GraceConfig {
        GraceConfig {
            duration_secs: self.duration_secs,
            locked: self.locked,
        }
    }
}
