//! Assistant configuration: where a session starts, not what it remembers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::personality::Personality;

/// Construction-time settings for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssistantConfig {
    /// Artificial pause before each reply, in milliseconds. Stands in for
    /// the latency of a real backend; zero disables the pause.
    pub processing_delay_ms: u64,
    /// Personality active when the session starts.
    pub personality: Personality,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 1000,
            personality: Personality::Default,
        }
    }
}

impl AssistantConfig {
    /// Load configuration from a JSON file, falling back to defaults if the
    /// file is missing or malformed. `None` means no config file was given;
    /// there is no well-known config path.
    pub fn load(path: Option<&Path>) -> AssistantConfig {
        let path = match path {
            Some(path) => path,
            None => return AssistantConfig::default(),
        };
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config file {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config file {}: {}", path.display(), e);
                }
            }
        }
        AssistantConfig::default()
    }

    /// Load configuration from a JSON file, surfacing failures to the caller.
    pub fn from_file(path: &Path) -> Result<AssistantConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        fs::write(path, content).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }
}
