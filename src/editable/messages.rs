//! Message types for single-line text editing.

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move one word left
    WordLeft,
    /// Move one word right
    WordRight,
    /// Move to start of the text
    Start,
    /// Move to end of the text
    End,
}

/// Unified message type for text editing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move cursor without affecting selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),
    /// Place the cursor at a column (mouse click)
    SetCursor(usize),

    // === Insertion ===
    InsertChar(char),
    /// Insert a string (e.g. from paste)
    InsertText(String),

    // === Deletion ===
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    /// Delete word before cursor (Ctrl/Option+Backspace)
    DeleteWordBackward,
    /// Delete word after cursor (Ctrl/Option+Delete)
    DeleteWordForward,

    // === Selection ===
    SelectAll,
    /// Collapse selection to cursor position
    CollapseSelection,

    // === Clipboard ===
    /// Copy selection to clipboard
    Copy,
    /// Cut selection to clipboard
    Cut,
    /// Paste text from clipboard
    Paste(String),
}

impl TextEditMsg {
    /// Check if this message modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_)
                | TextEditMsg::InsertText(_)
                | TextEditMsg::DeleteBackward
                | TextEditMsg::DeleteForward
                | TextEditMsg::DeleteWordBackward
                | TextEditMsg::DeleteWordForward
                | TextEditMsg::Cut
                | TextEditMsg::Paste(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_editing() {
        assert!(TextEditMsg::InsertChar('a').is_editing());
        assert!(TextEditMsg::Cut.is_editing());
        assert!(!TextEditMsg::Copy.is_editing());
        assert!(!TextEditMsg::SelectAll.is_editing());
        assert!(!TextEditMsg::Move(MoveTarget::Left).is_editing());
    }
}
