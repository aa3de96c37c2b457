//! Geometry helpers for rendering and hit-testing
//!
//! Single source of truth for where each field's entry and button sit in
//! the window. Shared between the view (rendering) and update (pointer
//! handling) layers. All functions here are pure.
//!
//! Fields are stacked top to bottom, each centered horizontally like a
//! packed frame. Within a field the entry takes the remaining width and the
//! button is a square whose side is the field height.

use crate::field::{EditToggleField, FrameLayout};

/// Default width of one field (entry + button), in logical pixels
pub const DEFAULT_FIELD_WIDTH: u32 = 200;

/// Horizontal inset of text inside the entry, in logical pixels
pub const ENTRY_TEXT_PADDING: f32 = 6.0;

/// Axis-aligned rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Placement of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGeometry {
    /// Entry and button together (padding excluded)
    pub frame: Rect,
    pub entry: Rect,
    pub button: Rect,
}

/// Size of one row before scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpec {
    pub height: u32,
    pub padding: FrameLayout,
}

impl From<&EditToggleField> for RowSpec {
    fn from(field: &EditToggleField) -> Self {
        Self {
            height: field.entry().height,
            padding: field.layout(),
        }
    }
}

/// Lay out rows top to bottom in a window `window_width` physical pixels wide
pub fn layout_rows(
    rows: &[RowSpec],
    window_width: u32,
    field_width: u32,
    scale_factor: f64,
) -> Vec<FieldGeometry> {
    let scale = scale_factor as f32;
    let window_width = window_width as f32;
    let mut y = 0.0_f32;

    rows.iter()
        .map(|row| {
            let height = row.height as f32 * scale;
            let pad_x = row.padding.pad_x as f32 * scale;
            let pad_y = row.padding.pad_y as f32 * scale;

            // Never narrower than the square button
            let width = (field_width as f32 * scale).max(height);
            let outer_width = width + 2.0 * pad_x;
            let x = ((window_width - outer_width) / 2.0).max(0.0) + pad_x;

            let frame = Rect::new(x, y + pad_y, width, height);
            y += height + 2.0 * pad_y;

            FieldGeometry {
                frame,
                entry: Rect::new(frame.x, frame.y, width - height, height),
                button: Rect::new(frame.x + width - height, frame.y, height, height),
            }
        })
        .collect()
}

/// Lay out `fields` in the order given
pub fn layout_fields(
    fields: &[EditToggleField],
    window_width: u32,
    field_width: u32,
    scale_factor: f64,
) -> Vec<FieldGeometry> {
    let rows: Vec<RowSpec> = fields.iter().map(RowSpec::from).collect();
    layout_rows(&rows, window_width, field_width, scale_factor)
}

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Entry(usize),
    Button(usize),
}

impl HitTarget {
    pub fn index(self) -> usize {
        match self {
            HitTarget::Entry(i) | HitTarget::Button(i) => i,
        }
    }
}

/// Find the entry or button under a point
pub fn hit_test(geometry: &[FieldGeometry], x: f64, y: f64) -> Option<HitTarget> {
    let (x, y) = (x as f32, y as f32);
    geometry.iter().enumerate().find_map(|(i, g)| {
        if g.button.contains(x, y) {
            Some(HitTarget::Button(i))
        } else if g.entry.contains(x, y) {
            Some(HitTarget::Entry(i))
        } else {
            None
        }
    })
}

/// Number of whole characters that fit in an entry
pub fn visible_chars(entry: &Rect, char_width: f32, scale_factor: f64) -> usize {
    if char_width <= 0.0 {
        return 0;
    }
    let inner = entry.width - 2.0 * ENTRY_TEXT_PADDING * scale_factor as f32;
    (inner.max(0.0) / char_width).floor() as usize
}

/// Map a click at `x` inside an entry to a character column
pub fn column_at_x(
    entry: &Rect,
    x: f64,
    char_width: f32,
    scroll_x: usize,
    scale_factor: f64,
    len_chars: usize,
) -> usize {
    if char_width <= 0.0 {
        return 0;
    }
    let text_x = entry.x + ENTRY_TEXT_PADDING * scale_factor as f32;
    let offset = ((x as f32 - text_x) / char_width).round().max(0.0) as usize;
    (offset + scroll_x).min(len_chars)
}

/// Scroll offset (in characters) that keeps the cursor visible
pub fn calculate_scroll(cursor_col: usize, scroll_x: usize, visible_chars: usize) -> usize {
    if visible_chars == 0 {
        return cursor_col;
    }
    if cursor_col < scroll_x {
        cursor_col
    } else if cursor_col > scroll_x + visible_chars {
        cursor_col - visible_chars
    } else {
        scroll_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<RowSpec> {
        vec![
            RowSpec {
                height: 28,
                padding: FrameLayout::default(),
            };
            n
        ]
    }

    #[test]
    fn test_button_is_square_and_right_aligned() {
        let geo = layout_rows(&rows(1), 400, 200, 1.0);
        let g = geo[0];
        assert_eq!(g.button.width, g.button.height);
        assert_eq!(g.button.x + g.button.width, g.frame.x + g.frame.width);
        assert_eq!(g.entry.width + g.button.width, g.frame.width);
    }

    #[test]
    fn test_rows_are_centered_and_stacked() {
        let geo = layout_rows(&rows(3), 400, 200, 1.0);
        assert_eq!(geo[0].frame.x, 100.0);
        assert_eq!(geo[0].frame.y, 0.0);
        assert_eq!(geo[1].frame.y, 28.0);
        assert_eq!(geo[2].frame.y, 56.0);
    }

    #[test]
    fn test_padding_and_scale() {
        let spec = [RowSpec {
            height: 28,
            padding: FrameLayout { pad_x: 5, pad_y: 4 },
        }];
        let geo = layout_rows(&spec, 800, 200, 2.0);
        assert_eq!(geo[0].frame.y, 8.0);
        assert_eq!(geo[0].frame.height, 56.0);
        assert_eq!(geo[0].frame.width, 400.0);
        assert_eq!(geo[0].frame.x, 200.0);
    }

    #[test]
    fn test_narrow_window_pins_left() {
        let geo = layout_rows(&rows(1), 100, 200, 1.0);
        assert_eq!(geo[0].frame.x, 0.0);
    }

    #[test]
    fn test_hit_test() {
        let geo = layout_rows(&rows(2), 400, 200, 1.0);
        assert_eq!(hit_test(&geo, 110.0, 10.0), Some(HitTarget::Entry(0)));
        assert_eq!(hit_test(&geo, 290.0, 40.0), Some(HitTarget::Button(1)));
        assert_eq!(hit_test(&geo, 10.0, 10.0), None);
        assert_eq!(hit_test(&geo, 110.0, 60.0), None);
    }

    #[test]
    fn test_column_at_x_clamps() {
        let entry = Rect::new(100.0, 0.0, 172.0, 28.0);
        assert_eq!(column_at_x(&entry, 50.0, 8.0, 0, 1.0, 5), 0);
        assert_eq!(column_at_x(&entry, 106.0 + 8.0 * 2.0, 8.0, 0, 1.0, 5), 2);
        assert_eq!(column_at_x(&entry, 260.0, 8.0, 0, 1.0, 5), 5);
        assert_eq!(column_at_x(&entry, 106.0, 8.0, 3, 1.0, 10), 3);
    }

    #[test]
    fn test_calculate_scroll() {
        assert_eq!(calculate_scroll(5, 0, 20), 0);
        assert_eq!(calculate_scroll(25, 0, 20), 5);
        assert_eq!(calculate_scroll(5, 10, 20), 5);
    }

    #[test]
    fn test_visible_chars() {
        let entry = Rect::new(0.0, 0.0, 172.0, 28.0);
        assert_eq!(visible_chars(&entry, 8.0, 1.0), 20);
        assert_eq!(visible_chars(&entry, 0.0, 1.0), 0);
    }
}
