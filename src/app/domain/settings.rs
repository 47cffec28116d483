use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Selector of the page element the application mounts into.
    #[serde(default = "default_mount_selector")]
    pub mount_selector: String,

    /// Base path the application is served under.
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_mount_selector() -> String {
    "#app".to_string()
}

fn default_base() -> String {
    "/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            mount_selector: default_mount_selector(),
            base: default_base(),
            log_level: default_log_level(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    log::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("markpad");
        path.push("settings.json");
        path
    }

    /// Reject values the bootstrap cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.mount_selector.starts_with('#') || self.mount_selector.len() < 2 {
            return Err(AppError::Settings(format!(
                "mount_selector '{}' must be an element id like '#app'",
                self.mount_selector
            )));
        }
        if self.base.contains('#') || self.base.contains('?') {
            return Err(AppError::Settings(format!(
                "base '{}' must be a plain path",
                self.base
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.mount_selector, "#app");
        assert_eq!(settings.base, "/");
        assert_eq!(settings.log_level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"base": "/editor"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.base, "/editor");
        assert_eq!(settings.mount_selector, "#app"); // Should use default
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_selector = AppSettings {
            mount_selector: ".app".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_selector.validate(), Err(AppError::Settings(_))));

        let bad_base = AppSettings {
            base: "/#/".to_string(),
            ..Default::default()
        };
        assert!(bad_base.validate().is_err());
    }
}
