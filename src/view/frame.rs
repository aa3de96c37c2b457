//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use fontdue::Font;

use super::geometry::Rect;
use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Whether the pixel centered at (`px`, `py`) lies inside a rounded rectangle
fn inside_rounded(px: f32, py: f32, rect: &Rect, radius: f32) -> bool {
    if !rect.contains(px, py) {
        return false;
    }
    if radius <= 0.0 {
        return true;
    }
    // Nearest point on the rect shrunk by the radius
    let cx = px.max(rect.x + radius).min(rect.x + rect.width - radius);
    let cy = py.max(rect.y + radius).min(rect.y + rect.height - radius);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= radius * radius
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer actually holds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn bounds(&self) -> (usize, usize, usize, usize) {
        match self.clip {
            Some(c) => (c.x0, c.y0, c.x1, c.y1),
            None => (0, 0, self.width, self.height),
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        let len = self.width * self.height;
        self.buffer[..len].fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x = rect.x.max(0.0) as usize;
        let y = rect.y.max(0.0) as usize;
        let x1 = (rect.x + rect.width).max(0.0) as usize;
        let y1 = (rect.y + rect.height).max(0.0) as usize;
        self.fill_rect_px(x, y, x1.saturating_sub(x), y1.saturating_sub(y), color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let x0 = x.max(min_x);
        let y0 = y.max(min_y);
        let x1 = x.saturating_add(w).min(max_x);
        let y1 = y.saturating_add(h).min(max_y);
        if x0 >= x1 {
            return;
        }

        for py in y0..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Set a single pixel (bounds-checked, respects clip rect)
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        if x >= min_x && x < max_x && y >= min_y && y < max_y {
            self.buffer[y * self.width + x] = color;
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        if x < min_x || x >= max_x || y < min_y || y >= max_y {
            return;
        }

        let idx = y * self.width + x;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Fill a rectangle with rounded corners
    ///
    /// The radius is clamped to half the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: u32) {
        let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let x0 = (rect.x.max(0.0) as usize).max(min_x);
        let y0 = (rect.y.max(0.0) as usize).max(min_y);
        let x1 = ((rect.x + rect.width).ceil().max(0.0) as usize).min(max_x);
        let y1 = ((rect.y + rect.height).ceil().max(0.0) as usize).min(max_y);

        for py in y0..y1 {
            for px in x0..x1 {
                if inside_rounded(px as f32 + 0.5, py as f32 + 0.5, &rect, radius) {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    /// Rounded rectangle with a border of `border_width` pixels
    pub fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        fill_color: u32,
        border_color: u32,
        border_width: f32,
    ) {
        if border_width <= 0.0 {
            return self.fill_rounded_rect(rect, radius, fill_color);
        }
        self.fill_rounded_rect(rect, radius, border_color);
        let inner = Rect::new(
            rect.x + border_width,
            rect.y + border_width,
            (rect.width - 2.0 * border_width).max(0.0),
            (rect.height - 2.0 * border_width).max(0.0),
        );
        self.fill_rounded_rect(inner, (radius - border_width).max(0.0), fill_color);
    }
}

/// Text rendering context wrapping font and glyph cache.
///
/// Provides methods for drawing text with proper font metrics and glyph caching.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
            line_height,
        }
    }

    /// Average advance width, used for cursor placement
    #[inline]
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text with its top-left corner at (`x`, `y`), honoring the clip rect
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;
        let rgb = color & 0x00FF_FFFF;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for (i, &coverage) in bitmap.iter().enumerate() {
                if coverage == 0 || metrics.width == 0 {
                    continue;
                }
                let px = current_x as isize + (i % metrics.width) as isize + metrics.xmin as isize;
                let py = (glyph_top + (i / metrics.width) as f32) as isize;
                if px >= 0 && py >= 0 {
                    frame.blend_pixel(px as usize, py as usize, ((coverage as u32) << 24) | rgb);
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        text.chars()
            .map(|ch| {
                let key = (ch, self.font_size.to_bits());
                let (metrics, _) = self
                    .glyph_cache
                    .entry(key)
                    .or_insert_with(|| self.font.rasterize(ch, self.font_size));
                metrics.advance_width
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fill_rect() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);

        frame.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), 0xFFFF0000);

        assert_eq!(frame.get_pixel(15, 15), 0xFFFF0000);
        assert_eq!(frame.get_pixel(5, 5), 0);
        assert_eq!(frame.get_pixel(30, 30), 0);
    }

    #[test]
    fn test_frame_blend_pixel() {
        let mut buffer = vec![0xFFFFFFFF_u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        // 50% black over white
        frame.blend_pixel(5, 5, 0x80000000);

        let r = (frame.get_pixel(5, 5) >> 16) & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);
    }

    #[test]
    fn test_frame_out_of_bounds() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        frame.set_pixel(100, 100, 0xFFFFFFFF);
        frame.blend_pixel(100, 100, 0x80FFFFFF);
        frame.fill_rect_px(5, 5, usize::MAX, usize::MAX, 0xFF00FF00);
        assert_eq!(frame.get_pixel(100, 100), 0);
        assert_eq!(frame.get_pixel(9, 9), 0xFF00FF00);
    }

    #[test]
    fn test_short_buffer_reduces_height() {
        let mut buffer = vec![0u32; 10 * 4];
        let frame = Frame::new(&mut buffer, 10, 10);
        assert_eq!(frame.height(), 4);
    }

    #[test]
    fn test_clip_restricts_fill() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);
        frame.set_clip(Rect::new(10.0, 10.0, 30.0, 30.0));

        frame.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 0xFFFF0000);

        assert_eq!(frame.get_pixel(10, 10), 0xFFFF0000);
        assert_eq!(frame.get_pixel(39, 39), 0xFFFF0000);
        assert_eq!(frame.get_pixel(5, 5), 0);
        assert_eq!(frame.get_pixel(40, 40), 0);

        frame.clear_clip();
        frame.set_pixel(5, 5, 0xFF0000FF);
        assert_eq!(frame.get_pixel(5, 5), 0xFF0000FF);
    }

    #[test]
    fn test_rounded_rect_leaves_corners() {
        let mut buffer = vec![0u32; 40 * 40];
        let mut frame = Frame::new(&mut buffer, 40, 40);
        frame.fill_rounded_rect(Rect::new(0.0, 0.0, 28.0, 28.0), 6.0, 0xFF00FF00);

        assert_eq!(frame.get_pixel(0, 0), 0);
        assert_eq!(frame.get_pixel(27, 27), 0);
        assert_eq!(frame.get_pixel(14, 0), 0xFF00FF00);
        assert_eq!(frame.get_pixel(14, 14), 0xFF00FF00);
        assert_eq!(frame.get_pixel(28, 14), 0);
    }

    #[test]
    fn test_rounded_rect_border() {
        let mut buffer = vec![0u32; 40 * 40];
        let mut frame = Frame::new(&mut buffer, 40, 40);
        frame.draw_rounded_rect(
            Rect::new(0.0, 0.0, 30.0, 30.0),
            6.0,
            0xFFFFFFFF,
            0xFF000000,
            2.0,
        );
        assert_eq!(frame.get_pixel(15, 0), 0xFF000000);
        assert_eq!(frame.get_pixel(15, 1), 0xFF000000);
        assert_eq!(frame.get_pixel(15, 2), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(15, 15), 0xFFFFFFFF);
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.fill_rounded_rect(Rect::new(2.0, 2.0, 4.0, 4.0), 0.0, 0xFF123456);
        assert_eq!(frame.get_pixel(2, 2), 0xFF123456);
        assert_eq!(frame.get_pixel(5, 5), 0xFF123456);
        assert_eq!(frame.get_pixel(6, 6), 0);
    }
}
