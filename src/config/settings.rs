//! Persisted settings
//!
//! Stored as pretty JSON under the platform config dir. A missing file means
//! defaults. A malformed file is logged and ignored; it is left on disk until
//! the next save.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::GenerationOptions;
use crate::constants::config;
use crate::pools::PoolRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Last theme/mode/toggles chosen in the menu
    #[serde(default)]
    pub generation: GenerationOptions,
}

/// `<config_dir>/draw-idea/<filename>`, or the working directory if there is no config dir
pub fn app_file_path(filename: &str) -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(config::APP_DIR);
    path.push(filename);
    path
}

impl Settings {
    pub fn default_path() -> PathBuf {
        app_file_path(config::SETTINGS_FILENAME)
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                info!(path = %path.display(), error = %e, "No settings file, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse settings file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)
            .context("Failed to serialize settings to JSON")?;
        fs::write(path, contents)
            .context(format!("Failed to write settings file to {}", path.display()))?;
        Ok(())
    }

    /// Reset values the registry cannot serve
    pub fn validate(&mut self, registry: &PoolRegistry) {
        if !registry.contains(&self.generation.theme) {
            warn!(
                theme = %self.generation.theme,
                using = registry.universal_name(),
                "Unknown theme in settings, using universal theme"
            );
            self.generation.theme = registry.universal_name().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Mode;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        // Broken file is left for the user to inspect
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            generation: GenerationOptions {
                theme: "фэнтези".to_string(),
                mode: Mode::QuickSketch,
                include_mood: false,
                ..GenerationOptions::default()
            },
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_save_writes_readable_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        Settings::default().save_to(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"стандарт\""));
        assert!(contents.contains("\"любой\""));
    }

    #[test]
    fn test_validate_resets_unknown_theme() {
        let mut settings = Settings {
            generation: GenerationOptions {
                theme: "киберпанк".to_string(),
                ..GenerationOptions::default()
            },
        };
        settings.validate(PoolRegistry::builtin());
        assert_eq!(settings.generation.theme, "любой");
    }

    #[test]
    fn test_validate_keeps_known_theme() {
        let mut settings = Settings {
            generation: GenerationOptions {
                theme: "хоррор".to_string(),
                ..GenerationOptions::default()
            },
        };
        settings.validate(PoolRegistry::builtin());
        assert_eq!(settings.generation.theme, "хоррор");
    }
}
