//! Keyboard input mapping
//!
//! Translates winit keys into messages. "Command" means Cmd on macOS and
//! Ctrl elsewhere; word-wise movement uses Option on macOS and Ctrl
//! elsewhere.

use winit::keyboard::{Key, ModifiersState, NamedKey};

use safe_edit::editable::{MoveTarget, TextEditMsg};
use safe_edit::messages::{AppMsg, FieldMsg, Msg, UiMsg};

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub logo: bool,
}

impl From<ModifiersState> for KeyModifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            ctrl: state.control_key(),
            shift: state.shift_key(),
            alt: state.alt_key(),
            logo: state.super_key(),
        }
    }
}

impl KeyModifiers {
    fn command(self) -> bool {
        if cfg!(target_os = "macos") {
            self.logo
        } else {
            self.ctrl
        }
    }

    fn word(self) -> bool {
        if cfg!(target_os = "macos") {
            self.alt
        } else {
            self.ctrl
        }
    }
}

fn movement(target: MoveTarget, mods: KeyModifiers) -> Msg {
    Msg::move_cursor(target, mods.shift)
}

/// Map a pressed key to a message, if it means anything here
pub fn map_key(key: &Key, mods: KeyModifiers) -> Option<Msg> {
    if mods.command() {
        if let Key::Character(s) = key {
            return match s.to_lowercase().as_str() {
                "e" => Some(Msg::Focused(FieldMsg::ToggleEdit)),
                "a" => Some(Msg::edit(TextEditMsg::SelectAll)),
                "c" => Some(Msg::edit(TextEditMsg::Copy)),
                "x" => Some(Msg::edit(TextEditMsg::Cut)),
                "v" => Some(Msg::Focused(FieldMsg::RequestPaste)),
                "q" => Some(Msg::App(AppMsg::Quit)),
                _ => None,
            };
        }
    }

    match key {
        Key::Named(NamedKey::Tab) if mods.shift => Some(Msg::Ui(UiMsg::FocusPrevious)),
        Key::Named(NamedKey::Tab) => Some(Msg::Ui(UiMsg::FocusNext)),
        Key::Named(NamedKey::Escape) => Some(Msg::Ui(UiMsg::ClearFocus)),

        Key::Named(NamedKey::ArrowLeft) if mods.word() => {
            Some(movement(MoveTarget::WordLeft, mods))
        }
        Key::Named(NamedKey::ArrowRight) if mods.word() => {
            Some(movement(MoveTarget::WordRight, mods))
        }
        Key::Named(NamedKey::ArrowLeft) if mods.logo => Some(movement(MoveTarget::Start, mods)),
        Key::Named(NamedKey::ArrowRight) if mods.logo => Some(movement(MoveTarget::End, mods)),
        Key::Named(NamedKey::ArrowLeft) => Some(movement(MoveTarget::Left, mods)),
        Key::Named(NamedKey::ArrowRight) => Some(movement(MoveTarget::Right, mods)),
        Key::Named(NamedKey::Home) => Some(movement(MoveTarget::Start, mods)),
        Key::Named(NamedKey::End) => Some(movement(MoveTarget::End, mods)),

        Key::Named(NamedKey::Backspace) if mods.word() => {
            Some(Msg::edit(TextEditMsg::DeleteWordBackward))
        }
        Key::Named(NamedKey::Backspace) => Some(Msg::edit(TextEditMsg::DeleteBackward)),
        Key::Named(NamedKey::Delete) if mods.word() => {
            Some(Msg::edit(TextEditMsg::DeleteWordForward))
        }
        Key::Named(NamedKey::Delete) => Some(Msg::edit(TextEditMsg::DeleteForward)),

        Key::Named(NamedKey::Space) if !mods.command() => Some(Msg::insert_char(' ')),

        Key::Character(s) if !mods.command() && !mods.ctrl => {
            let text: String = s.chars().filter(|c| !c.is_control()).collect();
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (None, _) => None,
                (Some(ch), None) => Some(Msg::insert_char(ch)),
                _ => Some(Msg::edit(TextEditMsg::InsertText(text))),
            }
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> KeyModifiers {
        if cfg!(target_os = "macos") {
            KeyModifiers {
                logo: true,
                ..Default::default()
            }
        } else {
            KeyModifiers {
                ctrl: true,
                ..Default::default()
            }
        }
    }

    fn ch(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn test_typing_inserts_into_focused_field() {
        assert_eq!(
            map_key(&ch("x"), KeyModifiers::default()),
            Some(Msg::insert_char('x'))
        );
        assert_eq!(
            map_key(&Key::Named(NamedKey::Space), KeyModifiers::default()),
            Some(Msg::insert_char(' '))
        );
    }

    #[test]
    fn test_command_shortcuts() {
        assert_eq!(
            map_key(&ch("e"), command()),
            Some(Msg::Focused(FieldMsg::ToggleEdit))
        );
        assert_eq!(
            map_key(&ch("V"), command()),
            Some(Msg::Focused(FieldMsg::RequestPaste))
        );
        assert_eq!(map_key(&ch("z"), command()), None);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let shift = KeyModifiers {
            shift: true,
            ..Default::default()
        };
        assert_eq!(
            map_key(&Key::Named(NamedKey::Tab), KeyModifiers::default()),
            Some(Msg::Ui(UiMsg::FocusNext))
        );
        assert_eq!(
            map_key(&Key::Named(NamedKey::Tab), shift),
            Some(Msg::Ui(UiMsg::FocusPrevious))
        );
    }

    #[test]
    fn test_shift_arrow_extends_selection() {
        let shift = KeyModifiers {
            shift: true,
            ..Default::default()
        };
        assert_eq!(
            map_key(&Key::Named(NamedKey::ArrowLeft), shift),
            Some(Msg::edit(TextEditMsg::MoveWithSelection(MoveTarget::Left)))
        );
    }

    #[test]
    fn test_control_characters_are_dropped() {
        assert_eq!(map_key(&ch("\r"), KeyModifiers::default()), None);
        assert_eq!(
            map_key(&ch("ab"), KeyModifiers::default()),
            Some(Msg::edit(TextEditMsg::InsertText("ab".into())))
        );
    }
}
