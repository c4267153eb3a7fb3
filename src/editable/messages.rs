//! Key-neutral commands for the text view.
//!
//! Key bindings live outside this crate; the input layer maps keys to these
//! messages and hands them to [`crate::update::update_text_edit`].

use super::search::FindOptions;

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move one line up
    Up,
    /// Move one line down
    Down,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
    /// Move to the start of the previous word
    WordBackward,
    /// Move to the start of the next word
    WordForward,
    /// Move to start of document
    DocumentStart,
    /// Move to end of document
    DocumentEnd,
    /// Move up by the given number of lines
    PageUp(usize),
    /// Move down by the given number of lines
    PageDown(usize),
}

/// Message type for all text-view editing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move cursor without affecting selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),

    // === Insertion ===
    /// Insert a single character
    InsertChar(char),
    /// Insert a string (one history record)
    InsertText(String),
    /// Split the line at the cursor
    InsertNewline,
    /// Toggle overwrite mode
    ToggleOverwrite,

    // === Deletion ===
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    /// Kill word before cursor
    DeleteWordBackward,
    /// Kill word after cursor
    DeleteWordForward,
    /// Kill to end of line
    KillToEndOfLine,
    /// Kill to start of line
    KillToStartOfLine,
    /// Empty the buffer
    DeleteAll,

    // === Selection ===
    SelectAll,
    SelectWord,
    /// Collapse selection to cursor position
    CollapseSelection,

    // === Clipboard ===
    Copy,
    Cut,
    /// Paste the register content
    Paste,

    // === Undo/Redo ===
    Undo,
    Redo,

    // === Indentation ===
    Tab,
    BackTab,

    // === Find / replace ===
    FindNext { term: String, options: FindOptions },
    FindPrevious { term: String, options: FindOptions },
    ReplaceNext {
        term: String,
        replacement: String,
        options: FindOptions,
    },
    ReplaceAll {
        term: String,
        replacement: String,
        options: FindOptions,
    },
}

impl TextEditMsg {
    /// Check if this message requires multiline support
    pub fn requires_multiline(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertNewline
                | TextEditMsg::Move(
                    MoveTarget::Up | MoveTarget::Down | MoveTarget::PageUp(_) | MoveTarget::PageDown(_)
                )
                | TextEditMsg::MoveWithSelection(
                    MoveTarget::Up | MoveTarget::Down | MoveTarget::PageUp(_) | MoveTarget::PageDown(_)
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_multiline() {
        assert!(TextEditMsg::InsertNewline.requires_multiline());
        assert!(TextEditMsg::MoveWithSelection(MoveTarget::PageDown(10)).requires_multiline());
        assert!(!TextEditMsg::Move(MoveTarget::Left).requires_multiline());
    }
}
