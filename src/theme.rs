//! Theme system for the edit-toggle field
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/safe-edit/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary
//!
//! Besides the colors the renderer needs, a theme carries the button
//! palette (`ui.button.fg_color`), a table of named button colors that
//! the hover-color lookup consults before falling back to plain color names.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const BLUE_YAML: &str = include_str!("../themes/blue.yaml");
pub const DARK_BLUE_YAML: &str = include_str!("../themes/dark-blue.yaml");
pub const GREEN_YAML: &str = include_str!("../themes/green.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "blue", "dark-blue")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "blue",
        yaml: BLUE_YAML,
    },
    BuiltinTheme {
        id: "dark-blue",
        yaml: DARK_BLUE_YAML,
    },
    BuiltinTheme {
        id: "green",
        yaml: GREEN_YAML,
    },
];

/// Id of the theme used when nothing else is configured
pub const DEFAULT_THEME_ID: &str = "blue";

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/safe-edit/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    /// Display name from YAML (e.g., "Dark Blue")
    pub name: String,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if seen_ids.insert(id.to_string()) {
                    let name = from_file(&path)
                        .map(|t| t.name)
                        .unwrap_or_else(|_| id.to_string());
                    themes.push(ThemeInfo {
                        id: id.to_string(),
                        name,
                        source: ThemeSource::User,
                    });
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Format as a lowercase `#rrggbb` string (alpha is dropped)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Multiply every RGB channel by `factor`, truncating toward zero.
    ///
    /// Channels are clamped to 0..=255; alpha is preserved.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    ///
    /// Lenient form used for theme files: the leading `#` is optional.
    /// The hover-color utility uses the strict parser in [`crate::hover`].
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub frame: FrameThemeData,
    pub entry: EntryThemeData,
    pub button: ButtonThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameThemeData {
    pub background: String,
}

/// Text entry colors
#[derive(Debug, Clone, Deserialize)]
pub struct EntryThemeData {
    pub background: String,
    #[serde(default)]
    pub read_only_background: Option<String>,
    pub border: String,
    pub foreground: String,
    #[serde(default)]
    pub read_only_foreground: Option<String>,
    pub cursor_color: String,
    #[serde(default)]
    pub selection_background: Option<String>,
}

/// Toggle button colors
#[derive(Debug, Clone, Deserialize)]
pub struct ButtonThemeData {
    pub foreground: String,
    pub border: String,
    #[serde(default)]
    pub focus_ring: Option<String>,
    /// Named button colors, kept as raw strings: they are only ever read
    /// through the hover-color lookup, which validates them itself.
    #[serde(default)]
    pub fg_color: BTreeMap<String, PaletteEntry>,
}

/// A palette value: one color, or a `[default, alternate]` list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    Single(String),
    List(Vec<String>),
}

impl PaletteEntry {
    /// The color this entry contributes to a lookup (first item of a list)
    pub fn primary(&self) -> Option<&str> {
        match self {
            PaletteEntry::Single(value) => Some(value),
            PaletteEntry::List(values) => values.first().map(String::as_str),
        }
    }
}

/// Named button colors of a theme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<String, PaletteEntry>,
}

impl Palette {
    pub fn new(entries: BTreeMap<String, PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Raw palette value for `name`, if any
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.get(name)
    }

    /// Resolve `name` to a `#`-prefixed color string.
    ///
    /// Returns `None` when the name is missing, the entry is an empty list,
    /// or the value is not a `#` color (e.g. `"transparent"`).
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)?
            .primary()
            .filter(|value| value.starts_with('#'))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: PaletteEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub frame: FrameTheme,
    pub entry: EntryTheme,
    pub button: ButtonTheme,
}

#[derive(Debug, Clone)]
pub struct FrameTheme {
    pub background: Color,
}

/// Entry colors (resolved)
#[derive(Debug, Clone)]
pub struct EntryTheme {
    pub background: Color,
    pub read_only_background: Color,
    pub border: Color,
    pub foreground: Color,
    pub read_only_foreground: Color,
    pub cursor_color: Color,
    /// Background color for selected text
    pub selection_background: Color,
}

/// Button colors (resolved)
#[derive(Debug, Clone)]
pub struct ButtonTheme {
    /// Label color
    pub foreground: Color,
    pub border: Color,
    pub focus_ring: Color,
    /// Named button colors consulted by the hover-color lookup
    pub fg_color: Palette,
}

fn optional_color(value: &Option<String>, fallback: Color) -> Result<Color, String> {
    value
        .as_ref()
        .map(|s| Color::from_hex(s))
        .transpose()
        .map(|c| c.unwrap_or(fallback))
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let entry = &data.ui.entry;
        let button = &data.ui.button;

        let background = Color::from_hex(&entry.background)?;
        let foreground = Color::from_hex(&entry.foreground)?;
        let border = Color::from_hex(&button.border)?;

        Ok(Theme {
            name: data.name,
            frame: FrameTheme {
                background: Color::from_hex(&data.ui.frame.background)?,
            },
            entry: EntryTheme {
                background,
                read_only_background: optional_color(&entry.read_only_background, background)?,
                border: Color::from_hex(&entry.border)?,
                foreground,
                read_only_foreground: optional_color(&entry.read_only_foreground, foreground)?,
                cursor_color: Color::from_hex(&entry.cursor_color)?,
                selection_background: optional_color(
                    &entry.selection_background,
                    Color::rgb(0x3B, 0x8E, 0xD0),
                )?,
            },
            button: ButtonTheme {
                foreground: Color::from_hex(&button.foreground)?,
                border,
                focus_ring: optional_color(&button.focus_ring, border)?,
                fg_color: Palette::new(button.fg_color.clone()),
            },
        })
    }

    /// Default theme (YAML-backed with Rust fallback)
    pub fn default_blue() -> Self {
        match Theme::from_yaml(BLUE_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Blue".to_string(),
                frame: FrameTheme {
                    background: Color::rgb(0xDB, 0xDB, 0xDB),
                },
                entry: EntryTheme {
                    background: Color::rgb(0xF9, 0xF9, 0xFA),
                    read_only_background: Color::rgb(0xE6, 0xE7, 0xE9),
                    border: Color::rgb(0x97, 0x9D, 0xA2),
                    foreground: Color::rgb(0x1A, 0x1A, 0x1A),
                    read_only_foreground: Color::rgb(0x5C, 0x5F, 0x62),
                    cursor_color: Color::rgb(0x1A, 0x1A, 0x1A),
                    selection_background: Color::rgb(0x3B, 0x8E, 0xD0),
                },
                button: ButtonTheme {
                    foreground: Color::rgb(0xDC, 0xE4, 0xEE),
                    border: Color::rgb(0x56, 0x5B, 0x5E),
                    focus_ring: Color::rgb(0x1F, 0x6A, 0xA5),
                    fg_color: Palette::default(),
                },
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup_single_and_list() {
        let theme = Theme::default();
        assert_eq!(theme.button.fg_color.lookup("accent"), Some("#36719f"));
        assert_eq!(theme.button.fg_color.lookup("primary"), Some("#3b8ed0"));
    }

    #[test]
    fn test_palette_lookup_rejects_non_hex_values() {
        let theme = Theme::default();
        assert!(theme.button.fg_color.get("transparent").is_some());
        assert_eq!(theme.button.fg_color.lookup("transparent"), None);
    }

    #[test]
    fn test_palette_lookup_empty_list() {
        let mut palette = Palette::default();
        palette.insert("empty", PaletteEntry::List(vec![]));
        assert_eq!(palette.lookup("empty"), None);
        assert_eq!(palette.lookup("missing"), None);
    }

    #[test]
    fn test_color_scaled_truncates() {
        let c = Color::rgb(255, 128, 0).scaled(0.85);
        assert_eq!((c.r, c.g, c.b), (216, 108, 0));
    }

    #[test]
    fn test_color_to_hex_is_lowercase() {
        assert_eq!(Color::rgb(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
    }

    #[test]
    fn test_from_hex_rejects_non_ascii() {
        assert!(Color::from_hex("#ééé").is_err());
    }
}
