//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/safe-edit/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::field::{
    FieldOptions, DEFAULT_DISABLED_COLOR, DEFAULT_DISABLED_TEXT, DEFAULT_ENABLED_COLOR,
    DEFAULT_ENABLED_TEXT, DEFAULT_WIDGET_HEIGHT,
};
use crate::theme::DEFAULT_THEME_ID;
use crate::view::geometry::DEFAULT_FIELD_WIDTH;

/// Settings applied to every field of the demo window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub disabled_text: String,
    pub enabled_text: String,
    pub disabled_color: String,
    pub enabled_color: String,
    pub max_characters: Option<usize>,
    pub initial_text: String,
    pub height: u32,
    /// Width of the entry plus button, in logical pixels
    pub width: u32,
    pub pad_x: u32,
    pub pad_y: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            disabled_text: DEFAULT_DISABLED_TEXT.to_string(),
            enabled_text: DEFAULT_ENABLED_TEXT.to_string(),
            disabled_color: DEFAULT_DISABLED_COLOR.to_string(),
            enabled_color: DEFAULT_ENABLED_COLOR.to_string(),
            max_characters: Some(8),
            initial_text: String::new(),
            height: DEFAULT_WIDGET_HEIGHT,
            width: DEFAULT_FIELD_WIDTH,
            pad_x: 0,
            pad_y: 0,
        }
    }
}

impl FieldConfig {
    /// Builder options for one field (callbacks left unset)
    pub fn to_options(&self) -> FieldOptions {
        FieldOptions::new()
            .disabled_text(&self.disabled_text)
            .enabled_text(&self.enabled_text)
            .disabled_color(&self.disabled_color)
            .enabled_color(&self.enabled_color)
            .max_characters(self.max_characters)
            .text(&self.initial_text)
            .height(self.height)
            .layout(crate::field::FrameLayout {
                pad_x: self.pad_x,
                pad_y: self.pad_y,
            })
    }
}

/// Application configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Selected theme id (e.g., "blue", "dark-blue")
    pub theme: String,
    /// TrueType/OpenType font used for all text; system fonts are tried if unset
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub window_width: u32,
    pub window_height: u32,
    /// Number of fields stacked in the window
    pub field_count: usize,
    pub field: FieldConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            font_path: None,
            font_size: 14.0,
            window_width: 400,
            window_height: 400,
            field_count: 9,
            field: FieldConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_window() {
        let config = AppConfig::default();
        assert_eq!(config.field_count, 9);
        assert_eq!(config.field.max_characters, Some(8));
        assert_eq!((config.window_width, config.window_height), (400, 400));
        assert_eq!(config.field.disabled_text, "A");
        assert_eq!(config.field.enabled_color, "green");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("theme: green\nfield:\n  max_characters: 3\n").unwrap();
        assert_eq!(config.theme, "green");
        assert_eq!(config.field.max_characters, Some(3));
        assert_eq!(config.field.height, DEFAULT_WIDGET_HEIGHT);
        assert_eq!(config.field_count, 9);
    }

    #[test]
    fn test_null_max_characters_means_unlimited() {
        let config: AppConfig = serde_yaml::from_str("field:\n  max_characters: ~\n").unwrap();
        assert_eq!(config.field.max_characters, None);
    }

    #[test]
    fn test_to_options_carries_field_settings() {
        let field = FieldConfig {
            enabled_text: "W".into(),
            pad_x: 3,
            ..FieldConfig::default()
        };
        let options = field.to_options();
        assert_eq!(options.enabled_text, "W");
        assert_eq!(options.layout.pad_x, 3);
        assert_eq!(options.max_characters, Some(8));
    }
}
