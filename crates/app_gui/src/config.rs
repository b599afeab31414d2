//! Persistent user settings stored as JSON in the platform config directory.

use crate::i18n::LanguagePreference;
use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub language: LanguagePreference,
    /// Fixed seed for the classifier; `None` means seed from OS entropy.
    pub seed: Option<u64>,
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("nl", "wastesorter", "WasteSorter")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

impl AppSettings {
    /// Loads from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            tracing::warn!("no config directory available, using default settings");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("settings not loaded from {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = settings_path().context("no config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
        tracing::debug!("settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let settings = AppSettings::load_from(&dir.path().join("absent.json"))?;
        assert_eq!(settings, AppSettings::default());
        Ok(())
    }

    #[test]
    fn save_then_load_keeps_values() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = AppSettings {
            language: LanguagePreference::Dutch,
            seed: Some(1234),
        };
        settings.save_to(&path)?;
        assert_eq!(AppSettings::load_from(&path)?, settings);
        Ok(())
    }

    #[test]
    fn partial_file_fills_in_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "language": "english" }"#)?;
        let settings = AppSettings::load_from(&path)?;
        assert_eq!(settings.language, LanguagePreference::English);
        assert_eq!(settings.seed, None);
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "not json")?;
        assert!(AppSettings::load_from(&path).is_err());
        Ok(())
    }
}
