//! Hover color derivation for the toggle button
//!
//! A hover color is a darker shade of the button's base color. The base
//! color is given the way users configure it: a theme palette name
//! (`"primary"`), a color name (`"red"`) or an HTML code (`"#RRGGBB"`).
//!
//! Resolution is two-staged:
//! 1. look the input up in the theme's button palette; anything that does
//!    not produce a `#` color falls back to the literal input
//! 2. resolve the result as a named color, or parse it as `#RRGGBB`

use thiserror::Error;

use crate::named_colors::{NamedColorResolver, TkColors};
use crate::theme::{Color, Theme};

/// Channel multiplier applied to produce the hover shade
pub const HOVER_DARKEN_FACTOR: f64 = 0.85;

/// Invalid or unresolvable color input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A `#` code that is not exactly seven characters long
    #[error("Color code must be in format '#RRGGBB'.")]
    MalformedHex,

    /// A `#` code of the right length with non-hex characters
    #[error("Invalid hex values in color code.")]
    InvalidHexDigits,

    /// A name neither the theme nor the color table knows
    #[error("Unknown or invalid color name: '{0}'")]
    UnknownName(String),
}

/// Parse a strict `#RRGGBB` code
pub fn parse_hex_rgb(code: &str) -> Result<Color, ColorError> {
    if code.chars().count() != 7 || !code.starts_with('#') {
        return Err(ColorError::MalformedHex);
    }
    let digits = &code[1..];
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexDigits);
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHexDigits)
    };
    Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Resolve a palette name, color name or `#RRGGBB` code to a color
pub fn resolve_color<R>(input: &str, theme: &Theme, names: &R) -> Result<Color, ColorError>
where
    R: NamedColorResolver + ?Sized,
{
    let code = match theme.button.fg_color.lookup(input) {
        Some(code) => code,
        None => {
            tracing::trace!(input, "no palette entry, using literal color");
            input
        }
    };

    if code.starts_with('#') {
        parse_hex_rgb(code)
    } else {
        names
            .resolve(code)
            .ok_or_else(|| ColorError::UnknownName(code.to_string()))
    }
}

/// Darker shade of `input`, as a lowercase `#rrggbb` string
///
/// Named colors are resolved through the built-in Tk color table.
pub fn hover_color(input: &str, theme: &Theme) -> Result<String, ColorError> {
    hover_color_with(input, theme, &TkColors)
}

/// [`hover_color`] with a caller-supplied named color table
pub fn hover_color_with<R>(input: &str, theme: &Theme, names: &R) -> Result<String, ColorError>
where
    R: NamedColorResolver + ?Sized,
{
    let base = resolve_color(input, theme, names)?;
    Ok(base.scaled(HOVER_DARKEN_FACTOR).to_hex())
}
