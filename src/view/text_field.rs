//! Text entry rendering.
//!
//! `TextFieldRenderer` draws the contents of a single-line input: selection
//! background, visible slice of the text, and the cursor bar. `render_entry`
//! wraps it with the entry's rounded box and read-only styling.
//!
//! Text layout assumes a monospace font (one `char_width` per character).

use crate::editable::{EditableState, Selection};
use crate::field::TextEntry;
use crate::theme::Theme;

use super::frame::Frame;
use super::geometry::{Rect, ENTRY_TEXT_PADDING};
use super::TextPainter;

/// Corner radius of the entry box, in logical pixels
pub const ENTRY_CORNER_RADIUS: f32 = 6.0;
/// Border width of the entry box, in logical pixels
pub const ENTRY_BORDER_WIDTH: f32 = 2.0;

/// Options for rendering a text field.
#[derive(Debug, Clone)]
pub struct TextFieldOptions {
    /// X position of text area in pixels
    pub x: usize,
    /// Y position of text area in pixels
    pub y: usize,
    /// Width of text area in pixels
    pub width: usize,
    /// Height of text area in pixels (typically line_height)
    pub height: usize,
    /// Character width (monospace font)
    pub char_width: f32,
    /// Text foreground color
    pub text_color: u32,
    /// Cursor color
    pub cursor_color: u32,
    /// Selection background color
    pub selection_color: u32,
    /// Whether cursor should be drawn (focus + blink phase)
    pub cursor_visible: bool,
    /// Horizontal scroll offset in characters
    pub scroll_x: usize,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 200,
            height: 20,
            char_width: 8.0,
            text_color: 0xFF1A1A1A,
            cursor_color: 0xFF1A1A1A,
            selection_color: 0xFF3B8ED0,
            cursor_visible: true,
            scroll_x: 0,
        }
    }
}

/// Content that can be rendered as a text field.
pub trait TextFieldContent {
    fn text(&self) -> &str;

    /// Cursor column in characters
    fn cursor(&self) -> usize;

    fn selection(&self) -> Selection;
}

impl TextFieldContent for EditableState {
    fn text(&self) -> &str {
        self.buffer.as_str()
    }

    fn cursor(&self) -> usize {
        self.selection.head
    }

    fn selection(&self) -> Selection {
        self.selection
    }
}

/// Column span of `selection` that is visible after scrolling, in screen columns
pub fn visible_selection(
    selection: Selection,
    scroll_x: usize,
    visible_chars: usize,
) -> Option<(usize, usize)> {
    if selection.is_empty() {
        return None;
    }
    let start = selection.start().saturating_sub(scroll_x);
    let end = selection.end().saturating_sub(scroll_x).min(visible_chars);
    (end > start).then_some((start, end))
}

pub struct TextFieldRenderer;

impl TextFieldRenderer {
    /// Render selection, text and cursor
    pub fn render(
        frame: &mut Frame,
        painter: &mut TextPainter,
        content: &dyn TextFieldContent,
        opts: &TextFieldOptions,
    ) {
        let visible_chars = if opts.char_width > 0.0 {
            (opts.width as f32 / opts.char_width).floor() as usize
        } else {
            0
        };

        if let Some((start, end)) =
            visible_selection(content.selection(), opts.scroll_x, visible_chars)
        {
            let sel_x = opts.x + (start as f32 * opts.char_width).round() as usize;
            let sel_width = ((end - start) as f32 * opts.char_width).round() as usize;
            frame.fill_rect_px(sel_x, opts.y, sel_width, opts.height, opts.selection_color);
        }

        let visible_text: String = content
            .text()
            .chars()
            .skip(opts.scroll_x)
            .take(visible_chars + 1)
            .collect();
        let text_y = opts.y + opts.height.saturating_sub(painter.line_height()) / 2;
        painter.draw(frame, opts.x, text_y, &visible_text, opts.text_color);

        if opts.cursor_visible {
            let col = content.cursor().saturating_sub(opts.scroll_x);
            let cursor_x = opts.x + (col as f32 * opts.char_width).round() as usize;
            if cursor_x <= opts.x + opts.width {
                // 2px wide cursor bar
                frame.fill_rect_px(
                    cursor_x,
                    opts.y + 1,
                    2,
                    opts.height.saturating_sub(2),
                    opts.cursor_color,
                );
            }
        }
    }
}

/// Draw an entry box with its text
///
/// The cursor is only drawn for a focused, writable entry in the visible
/// blink phase; read-only entries use the theme's read-only colors.
pub fn render_entry(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    rect: Rect,
    entry: &TextEntry,
    cursor_blink_on: bool,
    scale_factor: f64,
) {
    let scale = scale_factor as f32;
    let colors = &theme.entry;
    let (background, foreground) = if entry.is_read_only() {
        (colors.read_only_background, colors.read_only_foreground)
    } else {
        (colors.background, colors.foreground)
    };

    frame.draw_rounded_rect(
        rect,
        ENTRY_CORNER_RADIUS * scale,
        background.to_argb_u32(),
        colors.border.to_argb_u32(),
        ENTRY_BORDER_WIDTH * scale,
    );

    let pad = ENTRY_TEXT_PADDING * scale;
    let inner = Rect::new(
        rect.x + pad,
        rect.y + ENTRY_BORDER_WIDTH * scale,
        (rect.width - 2.0 * pad).max(0.0),
        (rect.height - 2.0 * ENTRY_BORDER_WIDTH * scale).max(0.0),
    );

    let opts = TextFieldOptions {
        x: inner.x.round() as usize,
        y: inner.y.round() as usize,
        width: inner.width.round() as usize,
        height: inner.height.round() as usize,
        char_width: painter.char_width(),
        text_color: foreground.to_argb_u32(),
        cursor_color: colors.cursor_color.to_argb_u32(),
        selection_color: colors.selection_background.to_argb_u32(),
        cursor_visible: entry.focused && !entry.is_read_only() && cursor_blink_on,
        scroll_x: entry.scroll_x,
    };

    frame.set_clip(inner);
    TextFieldRenderer::render(frame, painter, &entry.editable, &opts);
    frame.clear_clip();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_selection_collapsed() {
        assert_eq!(visible_selection(Selection::collapsed(3), 0, 20), None);
    }

    #[test]
    fn test_visible_selection_scrolled() {
        let sel = Selection::new(2, 12);
        assert_eq!(visible_selection(sel, 0, 20), Some((2, 12)));
        assert_eq!(visible_selection(sel, 5, 20), Some((0, 7)));
        assert_eq!(visible_selection(sel, 0, 8), Some((2, 8)));
        assert_eq!(visible_selection(sel, 12, 20), None);
    }

    #[test]
    fn test_editable_state_content() {
        let mut state = EditableState::default();
        state.set_content("hello");
        state.select_all();
        let content: &dyn TextFieldContent = &state;
        assert_eq!(content.text(), "hello");
        assert_eq!(content.cursor(), 5);
        assert_eq!(content.selection().len(), 5);
    }
}
