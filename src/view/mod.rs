//! View module - software rendering of the field column
//!
//! Contains the Renderer (softbuffer surface + fontdue glyphs) and the
//! drawing helpers for entries and toggle buttons.

pub mod button;
pub mod frame;
pub mod geometry;
pub mod text_field;

pub use button::{render_toggle_button, ButtonState};
pub use frame::{Frame, TextPainter};
pub use geometry::{FieldGeometry, HitTarget, Rect};
pub use text_field::{render_entry, TextFieldContent, TextFieldOptions, TextFieldRenderer};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use crate::model::AppModel;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Monospace fonts tried, in order, when no font path is configured
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Pick the font file to load: the configured one, else the first system
/// candidate that exists
pub fn find_font(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Load a TrueType/OpenType font (first face of a collection)
pub fn load_font(path: &Path) -> Result<Font> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to load font {}: {}", path.display(), e))
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    base_font_size: f32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a renderer for `window`, sized to its current inner size
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Font,
        base_font_size: f32,
    ) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(size.width), non_zero(size.height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let font_size = base_font_size * scale_factor as f32;
        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow::anyhow!("Font missing horizontal line metrics"))?;
        let char_width = font.metrics('M', font_size).advance_width;

        Ok(Self {
            font,
            surface,
            width: size.width,
            height: size.height,
            base_font_size,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
            scale_factor,
        })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    /// Re-derive font metrics after a DPI change
    pub fn set_scale_factor(&mut self, scale_factor: f64) -> Result<()> {
        self.scale_factor = scale_factor;
        self.font_size = self.base_font_size * scale_factor as f32;
        self.line_metrics = self
            .font
            .horizontal_line_metrics(self.font_size)
            .ok_or_else(|| anyhow::anyhow!("Font missing horizontal line metrics"))?;
        self.char_width = self.font.metrics('M', self.font_size).advance_width;
        self.glyph_cache.clear();
        Ok(())
    }

    /// Draw the whole model and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window_size;
        if width == 0 || height == 0 {
            return Ok(());
        }
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let line_height = self.line_height();
        let ascent = self.line_metrics.ascent;
        let geometry = model.geometry();

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                ascent,
                self.char_width,
                line_height,
            );

            frame.clear(model.theme.frame.background.to_argb_u32());

            for (index, (field, g)) in model.fields.iter().zip(&geometry).enumerate() {
                render_entry(
                    &mut frame,
                    &mut painter,
                    &model.theme,
                    g.entry,
                    field.entry(),
                    model.ui.cursor_visible,
                    model.scale_factor,
                );
                render_toggle_button(
                    &mut frame,
                    &mut painter,
                    &model.theme,
                    g.button,
                    field.button(),
                    model.ui.focused == Some(index),
                    model.scale_factor,
                );
            }
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_font_prefers_configured_path() {
        let path = Path::new("/nonexistent/font.ttf");
        assert_eq!(find_font(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_load_font_reports_missing_file() {
        let err = load_font(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/font.ttf"));
    }

    #[test]
    fn test_load_font_rejects_garbage() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"not a font").unwrap();
        assert!(load_font(file.path()).is_err());
    }
}
