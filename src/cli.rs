//! Command-line argument parsing for the demo window
//!
//! Every option overrides the matching value from `config.yaml`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::theme::{ThemeInfo, ThemeSource};

/// Text fields that are read-only until their toggle button is pressed
#[derive(Parser, Debug, Default)]
#[command(
    name = "safe-edit",
    version,
    about = "Text fields that are read-only until their toggle button is pressed"
)]
pub struct CliArgs {
    /// Theme id (built-in: blue, dark-blue, green)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Number of fields to show
    #[arg(long, value_name = "N")]
    pub fields: Option<usize>,

    /// Maximum characters per field (0 keeps fields empty)
    #[arg(long, value_name = "N", conflicts_with = "unlimited")]
    pub max_characters: Option<usize>,

    /// Remove the character limit
    #[arg(long)]
    pub unlimited: bool,

    /// Font file (TrueType/OpenType, monospace recommended)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Print the hover shade of COLOR (palette name, color name or #RRGGBB) and exit
    #[arg(long, value_name = "COLOR")]
    pub hover: Option<String>,

    /// List built-in and user themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of `config`
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(theme) = &self.theme {
            config.theme.clone_from(theme);
        }
        if let Some(count) = self.fields {
            config.field_count = count;
        }
        if self.unlimited {
            config.field.max_characters = None;
        } else if let Some(max) = self.max_characters {
            config.field.max_characters = Some(max);
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        config
    }
}

/// One line per theme: id, display name, and `(user)` for themes from the config dir
pub fn format_theme_list(themes: &[ThemeInfo]) -> String {
    let width = themes.iter().map(|t| t.id.len()).max().unwrap_or(0);
    themes
        .iter()
        .map(|t| {
            let line = format!("{:width$}  {}", t.id, t.name, width = width);
            match t.source {
                ThemeSource::User => format!("{} (user)", line),
                ThemeSource::Builtin => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("safe-edit").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_args_keeps_config() {
        let config = parse(&[]).apply_to(AppConfig::default());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = parse(&["--theme", "green", "--fields", "3", "--max-characters", "4"])
            .apply_to(AppConfig::default());
        assert_eq!(config.theme, "green");
        assert_eq!(config.field_count, 3);
        assert_eq!(config.field.max_characters, Some(4));
    }

    #[test]
    fn test_unlimited() {
        let config = parse(&["--unlimited"]).apply_to(AppConfig::default());
        assert_eq!(config.field.max_characters, None);
    }

    #[test]
    fn test_unlimited_conflicts_with_max() {
        let result = CliArgs::try_parse_from(["safe-edit", "--unlimited", "--max-characters", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_hover_flag() {
        assert_eq!(parse(&["--hover", "#808080"]).hover.as_deref(), Some("#808080"));
    }

    #[test]
    fn test_list_themes_flag() {
        assert!(parse(&["--list-themes"]).list_themes);
        assert!(!parse(&[]).list_themes);
    }

    #[test]
    fn test_format_theme_list() {
        let themes = vec![
            ThemeInfo {
                id: "blue".to_string(),
                name: "Blue".to_string(),
                source: ThemeSource::Builtin,
            },
            ThemeInfo {
                id: "dark-blue".to_string(),
                name: "Night".to_string(),
                source: ThemeSource::User,
            },
        ];
        assert_eq!(
            format_theme_list(&themes),
            "blue       Blue\ndark-blue  Night (user)"
        );
        assert_eq!(format_theme_list(&[]), "");
    }
}
