//! Selection type for single-line inputs.

/// A text selection with anchor (start point) and head (cursor position).
/// The anchor stays fixed while the head moves during selection extension.
/// Both are character columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the cursor is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(column: usize) -> Self {
        Self {
            anchor: column,
            head: column,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Clamp both ends to `max_column`
    pub fn clamp(&mut self, max_column: usize) {
        self.anchor = self.anchor.min(max_column);
        self.head = self.head.min(max_column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_selection_bounds() {
        let sel = Selection::new(7, 2);
        assert_eq!(sel.start(), 2);
        assert_eq!(sel.end(), 7);
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_clamp() {
        let mut sel = Selection::new(2, 9);
        sel.clamp(4);
        assert_eq!(sel, Selection::new(2, 4));
    }
}
