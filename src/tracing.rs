//! Debug tracing infrastructure for development diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - history records, loads, unhandled messages
//! - `RUST_LOG=selection=trace` - cursor/selection diffs per message
//! - `RUST_LOG=textview_core::editable=trace` - module-level filtering
//!
//! Logs are also written to `~/.config/textview/logs/textview.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{self, LOG_FILE_PREFIX};
use crate::editable::{Position, TextEditor};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
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

    // A host application may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub cursor: Position,
    pub anchor: Position,
    pub selecting: bool,
    pub line_count: usize,
}

impl SelectionSnapshot {
    pub fn from_editor(editor: &TextEditor) -> Self {
        Self {
            cursor: editor.cursor_position(),
            anchor: editor.selection().anchor,
            selecting: editor.is_selecting(),
            line_count: editor.line_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.cursor != other.cursor {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.cursor.line, self.cursor.column, other.cursor.line, other.cursor.column
            ));
        }
        if self.anchor != other.anchor && other.selecting {
            changes.push(format!(
                "anchor: ({},{}) → ({},{})",
                self.anchor.line, self.anchor.column, other.anchor.line, other.anchor.column
            ));
        }
        if self.selecting != other.selecting {
            let status = if other.selecting { "active" } else { "cleared" };
            changes.push(format!("selection {}", status));
        }
        if self.line_count != other.line_count {
            changes.push(format!("lines: {} → {}", self.line_count, other.line_count));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{EditConstraints, SharedClipboard};

    #[test]
    fn test_snapshot_diff() {
        let mut editor =
            TextEditor::new("hello\nworld", EditConstraints::editor(), SharedClipboard::new());
        let before = SelectionSnapshot::from_editor(&editor);
        assert_eq!(before.diff(&before), None);

        editor.move_right(true);
        let after = SelectionSnapshot::from_editor(&editor);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("cursor: (0,0) → (0,1)"));
        assert!(diff.contains("selection active"));
    }

    #[test]
    fn test_snapshot_reports_line_changes() {
        let mut editor = TextEditor::new("a", EditConstraints::editor(), SharedClipboard::new());
        let before = SelectionSnapshot::from_editor(&editor);
        editor.insert_newline();
        let diff = before.diff(&SelectionSnapshot::from_editor(&editor)).unwrap();
        assert!(diff.contains("lines: 1 → 2"));
    }
}
