//! Game settings and preferences
//!
//! Presentation only: nothing here changes how the game plays. Loaded from and
//! saved to JSON in the working directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// Frame rate the window clock aims for
    pub target_fps: u32,

    // === Audio ===
    /// Play the background music stream
    pub music_enabled: bool,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Music file, relative to the working directory
    pub music_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            target_fps: 60,

            music_enabled: true,
            music_volume: 1.0,
            music_path: "resources/background.mp3".to_string(),
        }
    }
}

impl Settings {
    /// Settings file name
    pub const FILE_NAME: &'static str = "brick_breaker_settings.json";

    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from `FILE_NAME` in the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `FILE_NAME` in the working directory
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE_NAME));
    }

    /// Save settings to a file, logging any failure
    pub fn save_to(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };

        match std::fs::write(path, json) {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(e) => log::warn!("Failed to save {}: {}", path.display(), e),
        }
    }

    /// Effective music volume (0 when music is off)
    pub fn effective_music_volume(&self) -> f32 {
        if self.music_enabled {
            self.music_volume
        } else {
            0.0
        }
    }

    fn sanitize(&mut self) {
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        if self.target_fps == 0 {
            self.target_fps = Self::default().target_fps;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.show_fps);
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.music_path, "resources/background.mp3");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "show_fps": false }"#).expect("parse");
        assert!(!settings.show_fps);
        assert_eq!(settings.target_fps, 60);
        assert!(settings.music_enabled);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "music_volume": 3.5, "target_fps": 0 }"#).expect("parse");
        assert_eq!(settings.music_volume, 1.0);
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ show_fps: ").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("does/not/exist.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "brick_breaker_settings_{}.json",
            std::process::id()
        ));
        let mut settings = Settings::default();
        settings.music_enabled = false;
        settings.target_fps = 144;

        settings.save_to(&path);
        let back = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(back, settings);
        assert_eq!(back.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_save_to_bad_path_does_not_panic() {
        let path = Path::new("does/not/exist/settings.json");
        Settings::default().save_to(path);
        assert!(!path.exists());
    }
}
