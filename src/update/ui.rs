//! UI message handlers (focus cycling, pointer, cursor blink)

use crate::commands::Cmd;
use crate::editable::TextEditMsg;
use crate::messages::{FieldMsg, UiMsg};
use crate::model::{AppModel, CURSOR_BLINK_INTERVAL};
use crate::view::geometry::{column_at_x, hit_test, HitTarget};

use super::field::update_field;

/// Handle UI messages (focus, pointer, cursor blink)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::FocusNext => {
            let count = model.fields.len();
            if count == 0 {
                return None;
            }
            let next = model.ui.focused.map_or(0, |i| (i + 1) % count);
            model.set_focus(Some(next));
            Some(Cmd::Redraw)
        }

        UiMsg::FocusPrevious => {
            let count = model.fields.len();
            if count == 0 {
                return None;
            }
            let prev = model
                .ui
                .focused
                .map_or(count - 1, |i| (i + count - 1) % count);
            model.set_focus(Some(prev));
            Some(Cmd::Redraw)
        }

        UiMsg::ClearFocus => {
            if model.ui.focused.is_none() {
                return None;
            }
            model.set_focus(None);
            Some(Cmd::Redraw)
        }

        UiMsg::BlinkCursor => {
            if model.ui.update_cursor_blink(CURSOR_BLINK_INTERVAL) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::PointerMoved { x, y } => {
            model.ui.pointer = Some((x, y));
            let hovered = match hit_test(&model.geometry(), x, y) {
                Some(HitTarget::Button(i)) => Some(i),
                _ => None,
            };
            set_hovered_button(model, hovered)
        }

        UiMsg::PointerLeft => {
            model.ui.pointer = None;
            set_hovered_button(model, None)
        }

        UiMsg::PointerPressed => {
            let (x, y) = model.ui.pointer?;
            let geometry = model.geometry();
            match hit_test(&geometry, x, y) {
                Some(HitTarget::Button(i)) => update_field(model, i, FieldMsg::ButtonPressed),
                Some(HitTarget::Entry(i)) => {
                    let entry = model.fields[i].entry();
                    let column = column_at_x(
                        &geometry[i].entry,
                        x,
                        model.char_width,
                        entry.scroll_x,
                        model.scale_factor,
                        entry.editable.len_chars(),
                    );
                    model.set_focus(Some(i));
                    update_field(model, i, FieldMsg::Edit(TextEditMsg::SetCursor(column)))
                }
                None => update_ui(model, UiMsg::ClearFocus),
            }
        }

        UiMsg::PointerReleased => {
            let index = model.ui.pressed_button?;
            let inside = model
                .ui
                .pointer
                .and_then(|(x, y)| hit_test(&model.geometry(), x, y))
                == Some(HitTarget::Button(index));
            update_field(model, index, FieldMsg::ButtonReleased { inside })
        }
    }
}

/// Move the hover highlight to `hovered`, returning a redraw if anything changed
fn set_hovered_button(model: &mut AppModel, hovered: Option<usize>) -> Option<Cmd> {
    let previous = model.ui.hovered_button;
    if previous == hovered {
        return None;
    }
    let left = previous.and_then(|i| update_field(model, i, FieldMsg::ButtonHover(false)));
    let entered = hovered.and_then(|i| update_field(model, i, FieldMsg::ButtonHover(true)));
    Cmd::merge(left, entered).map(|_| Cmd::Redraw)
}
