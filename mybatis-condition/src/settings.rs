use crate::dialect::Dialect;
use crate::error::{ConditionError, ConditionResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SETTINGS_FILE_NAME: &str = "mybatis-condition.json";

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dialect: Dialect,
}

impl Settings {
    /// Read settings from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> ConditionResult<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ConditionError::io(path, e)),
        };
        serde_json::from_str(&content).map_err(|e| ConditionError::json(path, e))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ConditionResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConditionError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| ConditionError::json(path, e))?;
        std::fs::write(path, json).map_err(|e| ConditionError::io(path, e))?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}
