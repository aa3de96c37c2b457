//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Put text on the system clipboard
    SetClipboard(String),
    /// Read the system clipboard and paste into the focused field
    RequestPaste,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Clipboard writes don't change what is on screen
            Cmd::SetClipboard(_) => false,
            // The paste itself comes back as a message and redraws then
            Cmd::RequestPaste => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }

    /// Combine two optional commands into one
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_needs_redraw_if_any_member_does() {
        assert!(!Cmd::Batch(vec![Cmd::None, Cmd::SetClipboard("x".into())]).needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::SetClipboard("x".into()), Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_merge() {
        assert_eq!(Cmd::merge(None, None), None);
        assert_eq!(Cmd::merge(Some(Cmd::Redraw), None), Some(Cmd::Redraw));
        assert_eq!(
            Cmd::merge(Some(Cmd::Redraw), Some(Cmd::Quit)),
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::Quit]))
        );
    }
}
