use crate::action::Action;
use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};

/// Named, immutable bundle of a schedule and an action
///
/// Presets only initialize the editable state: applying one replaces the
/// current schedule and action atomically. See [`crate::Composer::apply_preset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: Schedule,
    pub action: Action,
}

/// Distributed slice for presets contributed by downstream crates
///
/// Register a provider to have it show up in [`Preset::catalog`] after the
/// built-in entries:
///
/// ```ignore
/// use cadenza_runtime::{linkme, Action, Preset, Schedule, PRESETS};
///
/// #[linkme::distributed_slice(PRESETS)]
/// static NIGHTLY_SYNC: fn() -> Preset = nightly_sync;
///
/// fn nightly_sync() -> Preset {
///     Preset {
///         name: "NIGHTLY SYNC".to_string(),
///         description: "Mirror sync at 4 AM".to_string(),
///         schedule: Schedule::new("0", "4", "*", "*", "*"),
///         action: Action::Shell {
///             script_path: Some("/scripts/mirror-sync.sh".to_string()),
///         },
///     }
/// }
/// ```
#[linkme::distributed_slice]
pub static PRESETS: [fn() -> Preset] = [..];

impl Preset {
    /// The built-in presets, fixed order
    pub fn builtin() -> Vec<Preset> {
        vec![
            backup_database(),
            send_heartbeat(),
            rotate_logs(),
            clear_temp_files(),
        ]
    }

    /// Built-in presets followed by everything registered through [`PRESETS`]
    pub fn catalog() -> Vec<Preset> {
        let mut presets = Self::builtin();
        presets.extend(PRESETS.iter().map(|provider| provider()));
        presets
    }

    /// Look a preset up by name, case-insensitively
    pub fn find(name: &str) -> Option<Preset> {
        Self::catalog()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

fn backup_database() -> Preset {
    Preset {
        name: "BACKUP DATABASE".to_string(),
        description: "Daily database backup at 2 AM".to_string(),
        schedule: Schedule::new("0", "2", "*", "*", "*"),
        action: Action::Shell {
            script_path: Some("/scripts/backup-db.sh".to_string()),
        },
    }
}

fn send_heartbeat() -> Preset {
    Preset {
        name: "SEND HEARTBEAT".to_string(),
        description: "Health check every 5 minutes".to_string(),
        schedule: Schedule::new("*/5", "*", "*", "*", "*"),
        action: Action::Http {
            url: Some("https://api.healthcheck.io/ping".to_string()),
            method: Some("GET".to_string()),
            headers: None,
            body: None,
        },
    }
}

fn rotate_logs() -> Preset {
    Preset {
        name: "ROTATE LOGS".to_string(),
        description: "Weekly log rotation on Sundays".to_string(),
        schedule: Schedule::new("0", "3", "*", "*", "0"),
        action: Action::Shell {
            script_path: Some("/usr/sbin/logrotate /etc/logrotate.conf".to_string()),
        },
    }
}

fn clear_temp_files() -> Preset {
    Preset {
        name: "CLEAR TEMP FILES".to_string(),
        description: "Daily cleanup at midnight".to_string(),
        schedule: Schedule::new("0", "0", "*", "*", "*"),
        action: Action::Shell {
            script_path: Some("find /tmp -type f -mtime +7 -delete".to_string()),
        },
    }
}
