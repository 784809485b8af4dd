use super::entry::{compose, CronEntry};
use crate::action::{Action, ActionKind, ActionParam};
use crate::preset::Preset;
use crate::schedule::{Schedule, ScheduleField};
use tracing::{info, warn};

/// Stateful editor over one schedule and one action
///
/// This is the mutable surface an input layer drives: one field or parameter
/// changes at a time, presets replace both halves at once, and the composed
/// output is recomputed on demand by [`Composer::entry`], so there is no
/// cached derived state that could go stale between mutations.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    schedule: Schedule,
    action: Action,
}

impl Composer {
    /// All-wildcard schedule and the default shell action
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preset instead of the defaults
    pub fn with_preset(preset: &Preset) -> Self {
        let mut composer = Self::new();
        composer.apply_preset(preset);
        composer
    }

    /// Set one schedule field
    pub fn set_field(&mut self, field: ScheduleField, value: impl Into<String>) -> &mut Self {
        self.schedule.set(field, value);
        self
    }

    /// Switch the action kind, replacing the action with that kind's default
    /// descriptor. Parameters of the previous kind never survive the switch.
    pub fn set_kind(&mut self, kind: ActionKind) -> &mut Self {
        self.action = Action::default_for(kind);
        self
    }

    /// Set one parameter of the active action. A parameter that does not
    /// belong to the active kind is ignored with a warning.
    pub fn set_param(&mut self, param: ActionParam, value: impl Into<String>) -> &mut Self {
        if !self.action.set(param, value) {
            warn!(
                kind = %self.action.kind(),
                param = %param,
                "Ignoring parameter not used by the active action kind"
            );
        }
        self
    }

    /// Replace both the schedule and the action with a preset's values
    pub fn apply_preset(&mut self, preset: &Preset) -> &mut Self {
        info!(preset = %preset.name, "Applying preset");
        self.schedule = preset.schedule.clone();
        self.action = preset.action.clone();
        self
    }

    /// Restore the all-wildcard schedule and the default shell action
    pub fn clear(&mut self) -> &mut Self {
        self.schedule = Schedule::default();
        self.action = Action::default_for(ActionKind::Shell);
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Compose the current state into a crontab entry
    pub fn entry(&self) -> CronEntry {
        compose(&self.schedule, &self.action)
    }
}
