//! User settings for kakeibo-form
//!
//! The config file holds the two things the submission adapter needs: the
//! form-collection endpoint URL and the external field-identifier table.
//! Everything else about the entry form is fixed.

use serde::{Deserialize, Serialize};

use super::paths::KakeiboPaths;
use crate::error::KakeiboError;
use crate::submit::FieldIds;

/// User settings for kakeibo-form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Where entries are POSTed. The collector is opaque: the URL is used
    /// as-is and the response body is never interpreted.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// External identifiers the collector expects for each form field
    #[serde(default)]
    pub field_ids: FieldIds,
}

fn default_schema_version() -> u32 {
    1
}

fn default_endpoint_url() -> String {
    "https://docs.google.com/forms/d/e/1FAIpQLScx3jYkW0mRq5uVtBAe9dK4nPzF7rH2gTiwD8sM6oUyNbXA/formResponse"
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            endpoint_url: default_endpoint_url(),
            field_ids: FieldIds::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KakeiboPaths) -> Result<Self, KakeiboError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| KakeiboError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                KakeiboError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KakeiboPaths) -> Result<(), KakeiboError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KakeiboError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| KakeiboError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
