//! Text buffer for single-line inputs.
//!
//! All positions are character offsets; byte offsets never leak out of this
//! module.

use std::ops::Range;

/// String-backed buffer addressed by character offsets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
    /// Cached character count
    len_chars: usize,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            len_chars: text.chars().count(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Convert a character offset to a byte offset (clamped to the end)
    fn byte_offset(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    /// Get slice of text as String (by character offsets)
    pub fn slice(&self, range: Range<usize>) -> String {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end.max(range.start));
        self.text[start..end].to_string()
    }

    /// Insert text at character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        let byte = self.byte_offset(offset);
        self.text.insert_str(byte, text);
        self.len_chars += text.chars().count();
    }

    /// Remove a character range
    pub fn remove(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, "");
        self.len_chars = self.text.chars().count();
    }

    /// Keep only the first `max_chars` characters.
    ///
    /// Returns true if anything was dropped.
    pub fn truncate_chars(&mut self, max_chars: usize) -> bool {
        if self.len_chars <= max_chars {
            return false;
        }
        let byte = self.byte_offset(max_chars);
        self.text.truncate(byte);
        self.len_chars = max_chars;
        true
    }

    /// Replace the whole content
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.len_chars = text.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_by_chars() {
        let mut buf = StringBuffer::from_text("héllo");
        buf.insert(2, "XY");
        assert_eq!(buf.as_str(), "héXYllo");
        assert_eq!(buf.len_chars(), 7);

        buf.remove(1..4);
        assert_eq!(buf.as_str(), "hllo");
        assert_eq!(buf.len_chars(), 4);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let mut buf = StringBuffer::from_text("ääää");
        assert!(buf.truncate_chars(2));
        assert_eq!(buf.as_str(), "ää");
        assert!(!buf.truncate_chars(5));
    }

    #[test]
    fn test_slice_out_of_range_is_clamped() {
        let buf = StringBuffer::from_text("abc");
        assert_eq!(buf.slice(1..10), "bc");
        assert_eq!(buf.slice(5..10), "");
    }
}
