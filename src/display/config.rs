use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::SurfaceError;
use crate::raster::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Window and buffer settings for a screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fullscreen: bool,
    /// Lock presentation to the display refresh
    pub vsync: bool,
    pub hide_cursor: bool,
}

impl ScreenConfig {
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Reject sizes no buffer can be allocated for
    pub fn validate(&self) -> Result<(), SurfaceError> {
        if self.width == 0 || self.height == 0 {
            return Err(SurfaceError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load config from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SurfaceError> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "SDL2".to_string(),
            fullscreen: false,
            vsync: true,
            hide_cursor: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScreenConfig::default();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.title, "SDL2");
        assert!(config.vsync);
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ScreenConfig =
            serde_json::from_str(r#"{"width": 320, "title": "clock"}"#).unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 480);
        assert_eq!(config.title, "clock");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.json");
        let mut config = ScreenConfig::new(800, 600, "demo");
        config.fullscreen = true;
        config.save(&path).unwrap();
        assert_eq!(ScreenConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.json");
        fs::write(&path, r#"{"width": 0}"#).unwrap();
        assert!(matches!(
            ScreenConfig::load(&path),
            Err(SurfaceError::InvalidSize { width: 0, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScreenConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SurfaceError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.json");
        fs::write(&path, "{ width: ").unwrap();
        assert!(matches!(ScreenConfig::load(&path), Err(SurfaceError::Config(_))));
    }
}
