//! Logging setup and state snapshots for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=field=debug,message=debug` - scoped filtering
//! - `RUST_LOG=safe_edit::editable=trace` - module-level filtering (clamps)
//!
//! # Log Files
//!
//! Logs are written to `~/.config/safe-edit/logs/safe-edit.log` with daily
//! rotation, at debug level.

use std::fmt;

use tracing_subscriber::{fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::field::{EditMode, EditToggleField};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// the config logs directory with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = tracing_fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                tracing_fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of one field for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub mode: EditMode,
    pub len_chars: usize,
    pub anchor: usize,
    pub head: usize,
    pub focused: bool,
    pub hovered: bool,
}

impl FieldSnapshot {
    pub fn from_field(field: &EditToggleField) -> Self {
        let entry = field.entry();
        Self {
            mode: field.mode(),
            len_chars: entry.editable.len_chars(),
            anchor: entry.editable.selection.anchor,
            head: entry.editable.selection.head,
            focused: entry.focused,
            hovered: field.button().hovered,
        }
    }

    /// Describe what changed between two snapshots, if anything
    pub fn diff(&self, other: &FieldSnapshot) -> Option<FieldDiff> {
        let mut changes = Vec::new();
        if self.mode != other.mode {
            changes.push(format!("mode {:?} → {:?}", self.mode, other.mode));
        }
        if self.len_chars != other.len_chars {
            changes.push(format!("len {} → {}", self.len_chars, other.len_chars));
        }
        if (self.anchor, self.head) != (other.anchor, other.head) {
            changes.push(format!(
                "selection {}..{} → {}..{}",
                self.anchor, self.head, other.anchor, other.head
            ));
        }
        if self.focused != other.focused {
            changes.push(format!("focused {}", other.focused));
        }
        if self.hovered != other.hovered {
            changes.push(format!("hovered {}", other.hovered));
        }
        (!changes.is_empty()).then_some(FieldDiff(changes))
    }
}

/// Human-readable list of changes in one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff(pub Vec<String>);

impl fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldOptions;
    use crate::theme::Theme;

    #[test]
    fn test_snapshot_diff_reports_toggle() {
        let mut field = EditToggleField::new(FieldOptions::new().text("abc"), &Theme::default())
            .unwrap();
        let before = FieldSnapshot::from_field(&field);
        assert_eq!(before.diff(&before), None);

        field.toggle_edit_mode();
        let after = FieldSnapshot::from_field(&field);
        let diff = before.diff(&after).unwrap().to_string();
        assert!(diff.contains("mode Disabled → Enabled"), "{}", diff);
        assert!(diff.contains("focused true"), "{}", diff);
    }
}
