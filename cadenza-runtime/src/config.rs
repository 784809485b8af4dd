use crate::action::Action;
use crate::preset::Preset;
use crate::schedule::ScheduleField;
use config::{Config, File, FileFormat};
use std::path::Path;
use tracing::info;

/// Load config from a specific TOML file
pub fn load_toml_config<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .add_source(config::Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Load config from a specific YAML file
pub fn load_yaml_config<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
        .add_source(config::Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Resolve config placeholder like ${backup.script} or ${backup.script:default}
pub fn resolve_config_value(
    value: &str,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    if value.starts_with("${") && value.ends_with('}') {
        let inner = &value[2..value.len() - 1];

        // Check if there's a default value (e.g., ${backup.script:/scripts/run.sh})
        if let Some(colon_pos) = inner.find(':') {
            let key = &inner[..colon_pos];
            let default_value = &inner[colon_pos + 1..];

            match config.get_string(key) {
                Ok(resolved) => Ok(resolved),
                Err(_) => Ok(default_value.to_string()),
            }
        } else {
            let resolved = config.get_string(inner)?;
            Ok(resolved)
        }
    } else {
        Ok(value.to_string())
    }
}

/// Load a preset catalog from the `presets` array of a config
///
/// Every schedule field and action parameter supports the `${key}` /
/// `${key:default}` placeholder grammar, resolved against the same config,
/// so a catalog entry can read values the deployment supplies elsewhere in
/// the file or through `APP_`-prefixed environment variables.
pub fn load_catalog(config: &Config) -> Result<Vec<Preset>, Box<dyn std::error::Error>> {
    let mut presets: Vec<Preset> = config.get("presets")?;
    for preset in &mut presets {
        resolve_preset(preset, config)?;
    }
    info!(presets = presets.len(), "Loaded preset catalog");
    Ok(presets)
}

/// Resolve placeholders in every string a preset carries
fn resolve_preset(preset: &mut Preset, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    for field in [
        ScheduleField::Minute,
        ScheduleField::Hour,
        ScheduleField::Day,
        ScheduleField::Month,
        ScheduleField::Weekday,
    ] {
        let resolved = resolve_config_value(preset.schedule.get(field), config)?;
        preset.schedule.set(field, resolved);
    }

    match &mut preset.action {
        Action::Shell { script_path } => resolve_param(script_path, config)?,
        Action::Python {
            script_file,
            script_content,
        }
        | Action::Node {
            script_file,
            script_content,
        } => {
            resolve_param(script_file, config)?;
            resolve_param(script_content, config)?;
        }
        Action::Http {
            url,
            method,
            headers,
            body,
        } => {
            resolve_param(url, config)?;
            resolve_param(method, config)?;
            resolve_param(headers, config)?;
            resolve_param(body, config)?;
        }
        Action::Webhook {
            webhook_url,
            payload,
        } => {
            resolve_param(webhook_url, config)?;
            resolve_param(payload, config)?;
        }
        Action::Docker {
            image,
            container_args,
        } => {
            resolve_param(image, config)?;
            resolve_param(container_args, config)?;
        }
        Action::Custom { command } => resolve_param(command, config)?,
    }
    Ok(())
}

fn resolve_param(
    value: &mut Option<String>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(v) = value {
        *v = resolve_config_value(v, config)?;
    }
    Ok(())
}
