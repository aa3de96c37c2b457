//! EditableState - buffer, cursor and selection of a single-line input.

use crate::util::{char_type, CharType};

use super::buffer::StringBuffer;
use super::constraints::EditConstraints;
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::Selection;

/// Editable single-line text with one cursor and one selection.
///
/// The cursor is the selection head. Every mutation ends with
/// [`EditableState::enforce_max_length`], so the text never exceeds
/// `constraints.max_length`.
#[derive(Debug, Clone, Default)]
pub struct EditableState {
    pub buffer: StringBuffer,
    pub selection: Selection,
    pub constraints: EditConstraints,
}

impl EditableState {
    /// Create a new state with the cursor at the start of `buffer`.
    ///
    /// Text over the length limit is truncated right away.
    pub fn new(buffer: StringBuffer, constraints: EditConstraints) -> Self {
        let mut state = Self {
            buffer,
            selection: Selection::collapsed(0),
            constraints,
        };
        state.enforce_max_length();
        state
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Cursor column (selection head)
    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer
            .slice(self.selection.start()..self.selection.end())
    }

    pub fn collapse_selection(&mut self) {
        self.selection = Selection::collapsed(self.selection.head);
    }

    /// Truncate the text to the configured maximum.
    ///
    /// Keeps the first `max_length` characters and clamps the selection.
    /// Returns true if characters were dropped.
    pub fn enforce_max_length(&mut self) -> bool {
        let Some(max) = self.constraints.max_length else {
            return false;
        };
        let truncated = self.buffer.truncate_chars(max);
        if truncated {
            tracing::trace!(max, "text truncated to maximum length");
        }
        self.selection.clamp(self.buffer.len_chars());
        truncated
    }

    /// Change the maximum length, truncating immediately if needed.
    pub fn set_max_length(&mut self, max: Option<usize>) -> bool {
        self.constraints.max_length = max;
        self.enforce_max_length()
    }

    /// Replace the content, placing the cursor at the end
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set(text);
        self.selection = Selection::collapsed(self.buffer.len_chars());
        self.enforce_max_length();
    }

    pub fn clear(&mut self) {
        self.set_content("");
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl EditableState {
    /// Finish a movement: extend the selection or collapse onto the new head
    fn finish_move(&mut self, column: usize, extend_selection: bool) {
        self.selection.head = column.min(self.buffer.len_chars());
        if !extend_selection {
            self.collapse_selection();
        }
    }

    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            return self.finish_move(start, false);
        }
        let column = self.cursor().saturating_sub(1);
        self.finish_move(column, extend_selection);
    }

    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            return self.finish_move(end, false);
        }
        let column = (self.cursor() + 1).min(self.buffer.len_chars());
        self.finish_move(column, extend_selection);
    }

    pub fn move_start(&mut self, extend_selection: bool) {
        self.finish_move(0, extend_selection);
    }

    pub fn move_end(&mut self, extend_selection: bool) {
        let end = self.buffer.len_chars();
        self.finish_move(end, extend_selection);
    }

    /// Column of the word start before `from`
    fn word_start_before(&self, from: usize) -> usize {
        let chars: Vec<char> = self.buffer.as_str().chars().collect();
        let mut pos = from.min(chars.len());

        // Skip any whitespace/punctuation first (moving backwards)
        while pos > 0 && char_type(chars[pos - 1]) != CharType::WordChar {
            pos -= 1;
        }
        // Then skip word characters
        while pos > 0 && char_type(chars[pos - 1]) == CharType::WordChar {
            pos -= 1;
        }
        pos
    }

    /// Column after the word (and trailing whitespace) at `from`
    fn word_end_after(&self, from: usize) -> usize {
        let chars: Vec<char> = self.buffer.as_str().chars().collect();
        let mut pos = from.min(chars.len());

        // Skip current word type
        if let Some(&first) = chars.get(pos) {
            let start_type = char_type(first);
            while pos < chars.len() && char_type(chars[pos]) == start_type {
                pos += 1;
            }
        }
        // Skip any following whitespace
        while pos < chars.len() && char_type(chars[pos]) == CharType::Whitespace {
            pos += 1;
        }
        pos
    }

    pub fn move_word_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            return self.finish_move(start, false);
        }
        let column = self.word_start_before(self.cursor());
        self.finish_move(column, extend_selection);
    }

    pub fn move_word_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            return self.finish_move(end, false);
        }
        let column = self.word_end_after(self.cursor());
        self.finish_move(column, extend_selection);
    }

    pub fn move_to(&mut self, target: MoveTarget, extend_selection: bool) {
        match target {
            MoveTarget::Left => self.move_left(extend_selection),
            MoveTarget::Right => self.move_right(extend_selection),
            MoveTarget::WordLeft => self.move_word_left(extend_selection),
            MoveTarget::WordRight => self.move_word_right(extend_selection),
            MoveTarget::Start => self.move_start(extend_selection),
            MoveTarget::End => self.move_end(extend_selection),
        }
    }

    /// Place the cursor at `column` (clamped), dropping the selection
    pub fn set_cursor(&mut self, column: usize) {
        self.finish_move(column, false);
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.buffer.len_chars());
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl EditableState {
    /// Remove the selected text, leaving the cursor at its start.
    ///
    /// Returns true if there was a selection.
    fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let start = self.selection.start();
        self.buffer.remove(start..self.selection.end());
        self.selection = Selection::collapsed(start);
        true
    }

    /// Insert a character at the cursor, replacing the selection.
    /// Returns true if the text changed
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.constraints.is_char_allowed(ch) {
            return false;
        }
        let mut tmp = [0u8; 4];
        self.insert_allowed(ch.encode_utf8(&mut tmp))
    }

    /// Insert text at the cursor, replacing the selection.
    ///
    /// Characters rejected by the constraints (line breaks, filtered
    /// characters) are skipped. Returns true if the text changed.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let allowed: String = text
            .chars()
            .filter(|&ch| self.constraints.is_char_allowed(ch))
            .collect();
        if allowed.is_empty() {
            return false;
        }
        self.insert_allowed(&allowed)
    }

    fn insert_allowed(&mut self, text: &str) -> bool {
        self.delete_selection();
        let at = self.cursor();
        self.buffer.insert(at, text);
        self.selection = Selection::collapsed(at + text.chars().count());
        self.enforce_max_length();
        true
    }

    /// Delete the character before the cursor (or the selection)
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor();
        if cursor == 0 {
            return false;
        }
        self.buffer.remove(cursor - 1..cursor);
        self.selection = Selection::collapsed(cursor - 1);
        true
    }

    /// Delete the character after the cursor (or the selection)
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor();
        if cursor >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(cursor..cursor + 1);
        true
    }

    pub fn delete_word_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor();
        let start = self.word_start_before(cursor);
        if start == cursor {
            return false;
        }
        self.buffer.remove(start..cursor);
        self.selection = Selection::collapsed(start);
        true
    }

    pub fn delete_word_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let cursor = self.cursor();
        let end = self.word_end_after(cursor);
        if end == cursor {
            return false;
        }
        self.buffer.remove(cursor..end);
        true
    }

    /// Apply an editing message.
    ///
    /// `Copy` only reads and returns false; callers take the selected text
    /// themselves before applying `Cut`. Returns true if the text changed.
    pub fn apply(&mut self, msg: &TextEditMsg) -> bool {
        let changed = match msg {
            TextEditMsg::Move(target) => {
                self.move_to(*target, false);
                false
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_to(*target, true);
                false
            }
            TextEditMsg::SetCursor(column) => {
                self.set_cursor(*column);
                false
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(*ch),
            TextEditMsg::InsertText(text) | TextEditMsg::Paste(text) => self.insert_text(text),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::DeleteWordBackward => self.delete_word_backward(),
            TextEditMsg::DeleteWordForward => self.delete_word_forward(),
            TextEditMsg::SelectAll => {
                self.select_all();
                false
            }
            TextEditMsg::CollapseSelection => {
                self.collapse_selection();
                false
            }
            TextEditMsg::Copy => false,
            TextEditMsg::Cut => self.delete_selection(),
        };
        // The maximum can be lowered through `constraints` between edits
        let truncated = self.enforce_max_length();
        changed || truncated
    }
}
