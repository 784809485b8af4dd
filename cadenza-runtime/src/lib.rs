//! Cadenza Runtime - Core translation engine for crontab composition
//!
//! This crate turns a five-field schedule plus an action descriptor into a
//! crontab command line and an English sentence describing it.

mod action;
mod composer;
mod config;
mod options;
mod preset;
mod schedule;

// Re-export public API
pub use action::{Action, ActionKind, ActionParam};
pub use composer::{compose, Composer, CronEntry};
pub use config::{load_catalog, load_toml_config, load_yaml_config, resolve_config_value};
pub use linkme;
pub use options::FieldOption;
pub use preset::{Preset, PRESETS};
pub use schedule::{Schedule, ScheduleField, WILDCARD};
