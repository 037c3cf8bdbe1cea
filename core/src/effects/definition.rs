//! Grace effect definition (the template for new instances).
//!
//! A single definition exists per process. It is created once at system
//! initialization and mutated only by configuration updates; instances
//! capture its duration at apply time.

use std::time::Duration;

use crate::icons::IconData;

/// Stable identifier of the grace effect.
pub const GRACE_EFFECT_ID: &str = "grace";

/// Tooltip shown while the effect is active.
pub const GRACE_TOOLTIP: &str =
    "You recently teleported and are protected until you start to take action.";

/// Template describing the grace effect.
#[derive(Debug, Clone)]
pub struct GraceDefinition {
    /// Unique identifier ("grace").
    pub id: String,

    /// Display name shown in status bars.
    pub name: String,

    /// Tooltip text.
    pub tooltip: String,

    /// Icon resource. None when the asset failed to load (cosmetic only).
    pub icon: Option<IconData>,

    /// Duration granted to newly applied instances, in seconds.
    pub duration_secs: u32,
}

impl GraceDefinition {
    pub fn new(duration_secs: u32, icon: Option<IconData>) -> Self {
        Self {
            id: GRACE_EFFECT_ID.to_string(),
            name: "Grace".to_string(),
            tooltip: GRACE_TOOLTIP.to_string(),
            icon,
            duration_secs,
        }
    }

    /// Duration granted to new instances.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }
}

/// Holds the process-wide grace definition.
///
/// Starts uninitialized; until `initialize` runs, every grace operation
/// is a no-op. This is a startup-ordering condition (the host registers
/// status effects after its own object database is ready), not a fault.
#[derive(Debug, Default)]
pub struct DefinitionStore {
    definition: Option<GraceDefinition>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the definition. Called once the host is ready.
    pub fn initialize(&mut self, duration_secs: u32, icon: Option<IconData>) {
        self.definition = Some(GraceDefinition::new(duration_secs, icon));
    }

    pub fn is_initialized(&self) -> bool {
        self.definition.is_some()
    }

    pub fn get(&self) -> Option<&GraceDefinition> {
        self.definition.as_ref()
    }

    /// Duration for newly created instances, if initialized.
    pub fn duration(&self) -> Option<Duration> {
        self.definition.as_ref().map(GraceDefinition::duration)
    }

    /// Update the template duration. Affects only instances applied after
    /// this call; active instances keep the duration they were created with.
    /// No-op while uninitialized.
    pub fn set_duration(&mut self, duration_secs: u32) {
        if let Some(def) = self.definition.as_mut() {
            def.duration_secs = duration_secs;
        }
    }
}
