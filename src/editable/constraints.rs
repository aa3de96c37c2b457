//! Edit constraints for single-line inputs.
//!
//! Constraints define what operations are allowed in an editing context.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what an input accepts.
#[derive(Debug, Clone, Default)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited).
    ///
    /// Enforced by truncation after each mutation: the text keeps its first
    /// `max_length` characters.
    pub max_length: Option<usize>,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl EditConstraints {
    /// Single-line input without restrictions
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Single-line input limited to `max` characters
    pub fn with_max_length(max: Option<usize>) -> Self {
        Self {
            max_length: max,
            char_filter: None,
        }
    }

    /// Check if a character is accepted.
    ///
    /// Line breaks are never accepted by single-line inputs.
    pub fn is_char_allowed(&self, ch: char) -> bool {
        if ch == '\n' || ch == '\r' {
            return false;
        }
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_rejects_newlines() {
        let c = EditConstraints::single_line();
        assert!(c.is_char_allowed('a'));
        assert!(!c.is_char_allowed('\n'));
        assert!(!c.is_char_allowed('\r'));
    }

    #[test]
    fn test_char_filter() {
        let c = EditConstraints {
            max_length: None,
            char_filter: Some(|c| c.is_ascii_digit()),
        };
        assert!(c.is_char_allowed('7'));
        assert!(!c.is_char_allowed('x'));
    }

    #[test]
    fn test_max_length() {
        let c = EditConstraints::with_max_length(Some(8));
        assert_eq!(c.max_length, Some(8));
        assert!(c.is_char_allowed('a'));
        assert_eq!(EditConstraints::single_line().max_length, None);
    }
}
