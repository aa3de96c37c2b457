//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::editable::{MoveTarget, TextEditMsg};
use crate::field::EditMode;

/// Messages addressed to one edit-toggle field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMsg {
    /// Flip between read-only and writable (button click, Ctrl+E)
    ToggleEdit,
    /// Force a specific mode
    SetEditMode(EditMode),
    /// Keystroke-level edit; ignored while the field is read-only
    Edit(TextEditMsg),
    /// Ask the runtime for the clipboard contents (Ctrl+V)
    RequestPaste,
    /// Replace the text programmatically
    SetText(String),
    /// Change the character limit
    SetMaxCharacters(Option<usize>),
    /// Pointer entered (true) or left (false) the toggle button
    ButtonHover(bool),
    /// Pointer button went down on the toggle button
    ButtonPressed,
    /// Pointer button came up; `inside` if still over the button
    ButtonReleased { inside: bool },
    /// Give or take keyboard focus
    Focus(bool),
}

/// UI messages (focus, pointer, animation)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Move focus to the next field (Tab)
    FocusNext,
    /// Move focus to the previous field (Shift+Tab)
    FocusPrevious,
    ClearFocus,
    /// Toggle cursor blink state
    BlinkCursor,
    /// Pointer moved to physical position
    PointerMoved { x: f64, y: f64 },
    /// Pointer left the window
    PointerLeft,
    /// Primary button pressed at the last pointer position
    PointerPressed,
    /// Primary button released at the last pointer position
    PointerReleased,
}

/// App messages (window)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Display scale factor changed (e.g., moving between monitors)
    ScaleFactorChanged(f64),
    /// Renderer measured the font (advance width in physical pixels)
    FontMetrics { char_width: f32 },
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Message for the field at `index`
    Field { index: usize, msg: FieldMsg },
    /// Message for whichever field has keyboard focus (dropped if none)
    Focused(FieldMsg),
    /// UI messages (focus, pointer, animation)
    Ui(UiMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn field(index: usize, msg: FieldMsg) -> Self {
        Msg::Field { index, msg }
    }

    /// Create an insert character message for the focused field
    pub fn insert_char(ch: char) -> Self {
        Msg::Focused(FieldMsg::Edit(TextEditMsg::InsertChar(ch)))
    }

    /// Create a cursor movement message for the focused field
    pub fn move_cursor(target: MoveTarget, extend_selection: bool) -> Self {
        let edit = if extend_selection {
            TextEditMsg::MoveWithSelection(target)
        } else {
            TextEditMsg::Move(target)
        };
        Msg::Focused(FieldMsg::Edit(edit))
    }

    pub fn edit(msg: TextEditMsg) -> Self {
        Msg::Focused(FieldMsg::Edit(msg))
    }
}
