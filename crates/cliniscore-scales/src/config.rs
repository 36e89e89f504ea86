use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tier::Locale;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Language of published risk wording. Added in v1.
    #[serde(default)]
    pub locale: Locale,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("config is not a JSON object")]
    NotAnObject,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(io_error(path))?;
    parse_config(&contents)
}

/// Parse raw JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> Result<EngineConfig, ConfigError> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(raw) => u32::try_from(raw).map_err(|_| ConfigError::UnsupportedVersion {
            found: raw,
            supported: CURRENT_VERSION,
        })?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add locale (English wording was the only option before)
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        obj.entry("locale")
            .or_insert(serde_json::Value::String("en".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated engine config v0 → v1 (added locale)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &EngineConfig) -> Result<(), ConfigError> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(io_error(&tmp_path))?;
    std::fs::rename(&tmp_path, path).map_err(io_error(path))?;

    tracing::info!(path = %path.display(), "engine config saved");
    Ok(())
}
