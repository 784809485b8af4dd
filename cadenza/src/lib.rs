//! # Cadenza - Crontab Composition for Rust
//!
//! This library translates a five-field schedule plus a parameterized action
//! into the two artifacts a crontab workflow needs: the literal crontab line,
//! and a plain-English sentence describing when and what will run.
//!
//! ## Features
//!
//! - **Schedule translation**: five crontab fields in, canonical expression
//!   and an English time phrase out
//! - **Seven action kinds**: shell, python, node, http, webhook, docker and
//!   custom commands, each with sensible defaults for unset parameters
//! - **Presets**: built-in schedule/action bundles, link-time registration
//!   for your own, and catalog files with `${key:default}` placeholders
//! - **Install scripts**: render any entry as a self-documenting shell script
//!
//! ## Quick Start
//!
//! ```rust
//! use cadenza::{ActionKind, ActionParam, Composer, ScheduleField};
//!
//! let mut composer = Composer::new();
//! composer
//!     .set_field(ScheduleField::Minute, "0")
//!     .set_field(ScheduleField::Hour, "2")
//!     .set_param(ActionParam::ScriptPath, "/scripts/backup-db.sh");
//!
//! let entry = composer.entry();
//! assert_eq!(entry.command, "0 2 * * * /scripts/backup-db.sh");
//! assert_eq!(entry.sentence, "Run shell script every at 2:00 am");
//!
//! // Switching kinds always starts from that kind's defaults
//! composer.set_kind(ActionKind::Http);
//! composer.set_param(ActionParam::Url, "https://api.healthcheck.io/ping");
//! ```
//!
//! ## Presets
//!
//! ```rust
//! use cadenza::{Composer, Preset};
//!
//! let preset = Preset::find("SEND HEARTBEAT").unwrap();
//! let entry = Composer::with_preset(&preset).entry();
//! assert_eq!(
//!     entry.command,
//!     "*/5 * * * * curl -X GET https://api.healthcheck.io/ping"
//! );
//! ```
//!
//! ## Catalog files
//!
//! Preset catalogs load from TOML or YAML through the same placeholder
//! grammar the rest of the configuration uses:
//!
//! ```toml
//! [backup]
//! script = "/backup/run.sh"
//!
//! [[presets]]
//! name = "NIGHTLY BACKUP"
//! description = "Backup at 1 AM"
//!
//! [presets.schedule]
//! minute = "0"
//! hour = "1"
//!
//! [presets.action]
//! type = "shell"
//! script_path = "${backup.script:/scripts/backup.sh}"
//! ```
//!
//! ```rust,no_run
//! use cadenza::{load_catalog, load_toml_config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_toml_config("config/catalog.toml")?;
//! let presets = load_catalog(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! You can also override catalog values with `APP_`-prefixed environment
//! variables:
//!
//! ```bash
//! export APP_BACKUP_SCRIPT=/srv/backup/run.sh
//! ```

// Re-export core types
pub use cadenza_runtime::{
    compose, load_catalog, load_toml_config, load_yaml_config, resolve_config_value, Action,
    ActionKind, ActionParam, Composer, CronEntry, FieldOption, Preset, Schedule, ScheduleField,
    PRESETS, WILDCARD,
};

// Make cadenza_runtime available for link-time preset registration
pub use cadenza_runtime;

// Re-export linkme for downstream #[distributed_slice] registration
pub use cadenza_runtime::linkme;
