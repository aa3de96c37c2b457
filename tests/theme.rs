use safe_edit::theme::{
    list_available_themes, Color, PaletteEntry, Theme, ThemeSource, BLUE_YAML, BUILTIN_THEMES,
    DARK_BLUE_YAML, DEFAULT_THEME_ID, GREEN_YAML,
};

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1E1E1E").unwrap();
    assert_eq!(color, Color::rgb(0x1E, 0x1E, 0x1E));
    assert_eq!(color.a, 255);
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#1E1E1E80").unwrap();
    assert_eq!(color.a, 0x80);
}

#[test]
fn test_color_to_argb_u32() {
    assert_eq!(Color::rgb(0x1E, 0x1E, 0x1E).to_argb_u32(), 0xFF1E1E1E);
}

#[test]
fn test_every_builtin_parses() {
    for builtin in BUILTIN_THEMES {
        let theme = Theme::from_builtin(builtin.id)
            .unwrap_or_else(|e| panic!("theme {} failed: {}", builtin.id, e));
        assert!(!theme.button.fg_color.is_empty(), "{} has no palette", builtin.id);
    }
}

#[test]
fn test_builtin_yaml_constants() {
    assert_eq!(Theme::from_yaml(BLUE_YAML).unwrap().name, "Blue");
    assert_eq!(Theme::from_yaml(DARK_BLUE_YAML).unwrap().name, "Dark Blue");
    assert_eq!(Theme::from_yaml(GREEN_YAML).unwrap().name, "Green");
}

#[test]
fn test_default_theme_is_blue() {
    let theme = Theme::default();
    assert_eq!(theme.name, "Blue");
    assert_eq!(DEFAULT_THEME_ID, "blue");
    assert_eq!(theme.frame.background, Color::rgb(0xDB, 0xDB, 0xDB));
}

#[test]
fn test_unknown_builtin() {
    assert!(Theme::from_builtin("nope").is_err());
}

#[test]
fn test_palette_entries() {
    let theme = Theme::default();
    let palette = &theme.button.fg_color;
    assert_eq!(palette.lookup("primary"), Some("#3b8ed0"));
    assert_eq!(palette.lookup("accent"), Some("#36719f"));
    assert_eq!(palette.lookup("transparent"), None);
    assert_eq!(
        palette.get("transparent"),
        Some(&PaletteEntry::Single("transparent".to_string()))
    );
    assert!(palette.names().any(|n| n == "danger"));
}

#[test]
fn test_optional_entry_colors_fall_back() {
    let yaml = r##"
version: 1
name: "Minimal"
ui:
  frame:
    background: "#000000"
  entry:
    background: "#111111"
    border: "#222222"
    foreground: "#eeeeee"
    cursor_color: "#ffffff"
  button:
    foreground: "#ffffff"
    border: "#333333"
"##;
    let theme = Theme::from_yaml(yaml).unwrap();
    assert_eq!(theme.entry.read_only_background, theme.entry.background);
    assert_eq!(theme.entry.read_only_foreground, theme.entry.foreground);
    assert_eq!(theme.button.focus_ring, theme.button.border);
    assert!(theme.button.fg_color.is_empty());
}

#[test]
fn test_invalid_theme_color() {
    let yaml = BLUE_YAML.replace("#dbdbdb", "#zz");
    assert!(Theme::from_yaml(&yaml).is_err());
}

#[test]
fn test_list_includes_builtins() {
    let themes = list_available_themes();
    for builtin in BUILTIN_THEMES {
        assert!(
            themes.iter().any(|t| t.id == builtin.id),
            "missing {}",
            builtin.id
        );
    }
    assert!(themes
        .iter()
        .any(|t| t.id == "blue" && matches!(t.source, ThemeSource::Builtin | ThemeSource::User)));
}
