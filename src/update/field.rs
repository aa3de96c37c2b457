//! Field message handlers (toggle, editing, button interaction)

use crate::commands::Cmd;
use crate::editable::TextEditMsg;
use crate::field::EditMode;
use crate::messages::FieldMsg;
use crate::model::AppModel;

/// Handle a message addressed to the field at `index`
pub fn update_field(model: &mut AppModel, index: usize, msg: FieldMsg) -> Option<Cmd> {
    if index >= model.fields.len() {
        tracing::warn!(index, count = model.fields.len(), "message for unknown field");
        return None;
    }

    match msg {
        FieldMsg::ToggleEdit => {
            let mode = model.fields[index].toggle_edit_mode();
            after_mode_change(model, index, mode);
            Some(Cmd::Redraw)
        }

        FieldMsg::SetEditMode(mode) => {
            if model.fields[index].set_edit_mode(mode) {
                after_mode_change(model, index, mode);
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        FieldMsg::Edit(edit) => update_edit(model, index, edit),

        FieldMsg::RequestPaste => {
            if model.fields[index].is_editable() {
                Some(Cmd::RequestPaste)
            } else {
                None
            }
        }

        FieldMsg::SetText(text) => {
            model.fields[index].set_text(&text);
            model.scroll_to_cursor(index);
            Some(Cmd::Redraw)
        }

        FieldMsg::SetMaxCharacters(max) => {
            model.fields[index].set_max_characters(max);
            model.scroll_to_cursor(index);
            Some(Cmd::Redraw)
        }

        FieldMsg::ButtonHover(hovered) => {
            let button = model.fields[index].button_mut();
            if button.hovered == hovered {
                return None;
            }
            button.hovered = hovered;
            if hovered {
                model.ui.hovered_button = Some(index);
            } else if model.ui.hovered_button == Some(index) {
                model.ui.hovered_button = None;
            }
            Some(Cmd::Redraw)
        }

        FieldMsg::ButtonPressed => {
            model.fields[index].button_mut().pressed = true;
            model.ui.pressed_button = Some(index);
            Some(Cmd::Redraw)
        }

        FieldMsg::ButtonReleased { inside } => {
            let was_pressed = std::mem::replace(&mut model.fields[index].button_mut().pressed, false);
            if model.ui.pressed_button == Some(index) {
                model.ui.pressed_button = None;
            }
            if was_pressed && inside {
                update_field(model, index, FieldMsg::ToggleEdit)
            } else {
                Some(Cmd::Redraw)
            }
        }

        FieldMsg::Focus(true) => {
            model.set_focus(Some(index));
            Some(Cmd::Redraw)
        }

        FieldMsg::Focus(false) => {
            if model.ui.focused == Some(index) {
                model.set_focus(None);
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}

fn after_mode_change(model: &mut AppModel, index: usize, mode: EditMode) {
    // Enabling moves keyboard focus to the field, disabling drops it
    match mode {
        EditMode::Enabled => model.set_focus(Some(index)),
        EditMode::Disabled if model.ui.focused == Some(index) => model.set_focus(None),
        EditMode::Disabled => {}
    }
    model.ui.reset_cursor_blink();
    model.scroll_to_cursor(index);
}

fn update_edit(model: &mut AppModel, index: usize, edit: TextEditMsg) -> Option<Cmd> {
    let field = &mut model.fields[index];

    match edit {
        TextEditMsg::Copy => {
            let text = field.entry().editable.selected_text();
            (!text.is_empty()).then_some(Cmd::SetClipboard(text))
        }

        TextEditMsg::Cut => {
            let text = field.entry().editable.selected_text();
            if text.is_empty() || !field.handle_edit(&TextEditMsg::Cut) {
                return None;
            }
            model.ui.reset_cursor_blink();
            model.scroll_to_cursor(index);
            Some(Cmd::Batch(vec![Cmd::SetClipboard(text), Cmd::Redraw]))
        }

        edit => {
            if edit.is_editing() && !field.is_editable() {
                tracing::trace!(index, ?edit, "field is read-only");
                return None;
            }
            field.handle_edit(&edit);
            model.ui.reset_cursor_blink();
            model.scroll_to_cursor(index);
            Some(Cmd::Redraw)
        }
    }
}
