use std::path::Path;

use clap::ValueEnum;
use rp_core::{err, IntoIoError, IntoJsonError, JsonFileError, ROSTER_DIR, VERSION_NAME};
use serde::{Deserialize, Serialize};

/// Roughly a phone screen held upright.
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 640.0;

/// UI preferences stored in `RosterPad/config.json`.
///
/// Only preferences live here; the roster itself is in-memory only.
///
/// # Why `Option`?
///
/// Fields are `Option`s for backwards compatibility. When upgrading
/// from an older version, `serde` deserializes missing fields as
/// `None`, which is treated as a default value.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RosterConfig {
    /// The theme (Light/Dark) set by the user.
    pub theme: Option<ThemeLightness>,

    /// The version that was running last time the config was written.
    pub version: Option<String>,

    /// The scale of the UI, i.e. how big the window opens.
    ///
    /// - above 1.0: bigger window, for high DPI displays
    /// - 1.0: default
    pub ui_scale: Option<f64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            theme: None,
            version: Some(VERSION_NAME.to_owned()),
            ui_scale: None,
        }
    }
}

impl RosterConfig {
    /// Load the config from the roster directory.
    ///
    /// Designed to *not* fail fast: a nonexistent or corrupted config
    /// is backed up and reset to defaults (with an error log message)
    /// rather than returned as an error.
    ///
    /// # Errors
    /// - if the user doesn't have permission to access the roster
    ///   directory
    pub fn load_s() -> Result<Self, JsonFileError> {
        let config_path = ROSTER_DIR.join("config.json");
        if !config_path.exists() {
            return Self::create(&config_path);
        }

        match Self::read_from(&config_path) {
            Ok(config) => Ok(config),
            Err(JsonFileError::Json(error)) => {
                err!("Invalid config! This may be a sign of corruption.\nError: {error}");
                let old_path = ROSTER_DIR.join("config.json.bak");
                _ = std::fs::copy(&config_path, &old_path);
                Self::create(&config_path)
            }
            Err(error) => Err(error),
        }
    }

    pub async fn save(&self) -> Result<(), JsonFileError> {
        self.write_to(&ROSTER_DIR.join("config.json")).await
    }

    fn read_from(path: &Path) -> Result<Self, JsonFileError> {
        let config = std::fs::read_to_string(path).path(path)?;
        let mut config: Self = serde_json::from_str(&config).json()?;
        if config.version.is_none() {
            config.version = Some(VERSION_NAME.to_owned());
        }
        Ok(config)
    }

    async fn write_to(&self, path: &Path) -> Result<(), JsonFileError> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await.path(dir)?;
        }
        let config = serde_json::to_string(self).json_to()?;
        tokio::fs::write(path, config.as_bytes()).await.path(path)?;
        Ok(())
    }

    fn create(path: &Path) -> Result<Self, JsonFileError> {
        let config = Self::default();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).path(dir)?;
        }
        std::fs::write(path, serde_json::to_string(&config).json_to()?.as_bytes()).path(path)?;
        Ok(config)
    }

    pub fn c_theme(&self) -> iced::Theme {
        match self.theme.unwrap_or_default() {
            ThemeLightness::Light => iced::Theme::Light,
            ThemeLightness::Dark => iced::Theme::Dark,
        }
    }

    pub fn c_window_size(&self) -> (f32, f32) {
        let scale = self.ui_scale.unwrap_or(1.0) as f32;
        (WINDOW_WIDTH * scale, WINDOW_HEIGHT * scale)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeLightness {
    Light,
    #[default]
    Dark,
}

impl ThemeLightness {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = RosterConfig {
            theme: Some(ThemeLightness::Light),
            ui_scale: Some(1.5),
            ..Default::default()
        };
        config.write_to(&path).await.unwrap();

        let loaded = RosterConfig::read_from(&path).unwrap();
        assert_eq!(loaded.theme, Some(ThemeLightness::Light));
        assert_eq!(loaded.ui_scale, Some(1.5));
    }

    #[test]
    fn corrupt_config_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            RosterConfig::read_from(&path),
            Err(JsonFileError::Json(_))
        ));
    }

    #[test]
    fn missing_version_is_backfilled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let loaded = RosterConfig::read_from(&path).unwrap();
        assert_eq!(loaded.version.as_deref(), Some(VERSION_NAME));
    }

    #[test]
    fn flipping_lightness_is_an_involution() {
        assert_eq!(ThemeLightness::Dark.flipped(), ThemeLightness::Light);
        assert_eq!(ThemeLightness::Dark.flipped().flipped(), ThemeLightness::Dark);
    }
}
