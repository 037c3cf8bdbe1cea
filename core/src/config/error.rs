//! Error types for configuration operations.

use thiserror::Error;

use grace_types::{MAX_DURATION_SECS, MIN_DURATION_SECS};

/// Errors during configuration validation and persistence.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "duration {value}s outside accepted range {min}-{max}s",
        min = MIN_DURATION_SECS,
        max = MAX_DURATION_SECS
    )]
    OutOfRange { value: u32 },

    #[error("configuration is locked; change requires an authoritative source")]
    Locked,

    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}
