//! Toggle button rendering
//!
//! Pure-function rendering: the caller passes the button model and the
//! visual state is derived from its hover/press flags.

use crate::field::ToggleButton;
use crate::hover::resolve_color;
use crate::named_colors::TkColors;
use crate::theme::{Color, Theme};

use super::frame::{Frame, TextPainter};
use super::geometry::Rect;

/// Corner radius of the toggle button, in logical pixels
pub const BUTTON_CORNER_RADIUS: f32 = 6.0;

/// Visual state of a button, determined from UI interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Default idle state
    #[default]
    Normal,
    /// Mouse is hovering over the button
    Hovered,
    /// Mouse button is pressed on the button
    Pressed,
}

impl ButtonState {
    pub fn of(button: &ToggleButton) -> Self {
        if button.pressed {
            ButtonState::Pressed
        } else if button.hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }
}

/// Fill color for `button` in `state`
///
/// Pressed buttons show the hover shade. A color that no longer resolves
/// (after direct reconfiguration through `button_mut`) falls back to the
/// theme's border color.
pub fn button_fill(button: &ToggleButton, state: ButtonState, theme: &Theme) -> Color {
    let spec = match state {
        ButtonState::Normal => &button.fg_color,
        ButtonState::Hovered | ButtonState::Pressed => &button.hover_color,
    };
    resolve_color(spec, theme, &TkColors).unwrap_or_else(|err| {
        tracing::trace!(color = %spec, %err, "unresolvable button color");
        theme.button.border
    })
}

/// Render a toggle button with its centered label
pub fn render_toggle_button(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    rect: Rect,
    button: &ToggleButton,
    focused: bool,
    scale_factor: f64,
) {
    let state = ButtonState::of(button);
    let fill = button_fill(button, state, theme).to_argb_u32();
    let radius = BUTTON_CORNER_RADIUS * scale_factor as f32;

    frame.fill_rounded_rect(rect, radius, fill);

    // Focus ring: a 1px rounded outline just inside the edge
    if focused && rect.width > 4.0 && rect.height > 4.0 {
        frame.draw_rounded_rect(
            rect,
            radius,
            fill,
            theme.button.focus_ring.to_argb_u32(),
            scale_factor.max(1.0) as f32,
        );
    }

    let fg = theme.button.foreground.to_argb_u32();
    let text_w = painter.measure_width(&button.text).round() as usize;
    let x = rect.x.round() as usize;
    let y = rect.y.round() as usize;
    let w = rect.width.round() as usize;
    let h = rect.height.round() as usize;
    let text_x = x + w.saturating_sub(text_w) / 2;
    let text_y = y + h.saturating_sub(painter.line_height()) / 2;

    frame.set_clip(rect);
    painter.draw(frame, text_x, text_y, &button.text, fg);
    frame.clear_clip();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(fg: &str, hover: &str) -> ToggleButton {
        ToggleButton {
            text: "A".into(),
            fg_color: fg.into(),
            hover_color: hover.into(),
            width: 28,
            height: 28,
            hovered: false,
            pressed: false,
        }
    }

    #[test]
    fn test_state_prefers_pressed() {
        let mut b = button("red", "#d80000");
        assert_eq!(ButtonState::of(&b), ButtonState::Normal);
        b.hovered = true;
        assert_eq!(ButtonState::of(&b), ButtonState::Hovered);
        b.pressed = true;
        assert_eq!(ButtonState::of(&b), ButtonState::Pressed);
    }

    #[test]
    fn test_fill_uses_hover_shade() {
        let theme = Theme::default();
        let b = button("red", "#d80000");
        assert_eq!(button_fill(&b, ButtonState::Normal, &theme), Color::rgb(255, 0, 0));
        assert_eq!(button_fill(&b, ButtonState::Hovered, &theme), Color::rgb(0xd8, 0, 0));
    }

    #[test]
    fn test_fill_falls_back_to_border() {
        let theme = Theme::default();
        let b = button("not a color", "#d80000");
        assert_eq!(button_fill(&b, ButtonState::Normal, &theme), theme.button.border);
    }
}
