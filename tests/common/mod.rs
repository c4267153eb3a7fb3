//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use textview_core::editable::{EditConstraints, Position, SharedClipboard, TextEditor};

/// Create a test editor with given text and cursor position
pub fn test_editor(text: &str, line: usize, column: usize) -> TextEditor {
    let mut editor = TextEditor::new(text, EditConstraints::editor(), SharedClipboard::new());
    editor.set_cursor_position(Position::new(line, column));
    editor
}

/// Create a test editor with given text and a selection (anchor to head)
/// The cursor will be at the head position
pub fn test_editor_with_selection(
    text: &str,
    anchor_line: usize,
    anchor_col: usize,
    head_line: usize,
    head_col: usize,
) -> TextEditor {
    let mut editor = test_editor(text, 0, 0);
    editor.select_range(
        Position::new(anchor_line, anchor_col),
        Position::new(head_line, head_col),
    );
    editor
}

/// Create a test editor whose register can be inspected through the
/// returned clipboard handle
pub fn shared_clipboard(text: &str, line: usize, column: usize) -> (TextEditor, SharedClipboard) {
    let register = SharedClipboard::new();
    let mut editor = TextEditor::new(text, EditConstraints::editor(), register.clone());
    editor.set_cursor_position(Position::new(line, column));
    (editor, register)
}

/// Create an editor with custom constraints
pub fn test_editor_with(text: &str, constraints: EditConstraints) -> TextEditor {
    TextEditor::new(text, constraints, SharedClipboard::new())
}

/// Cursor as a `(line, column)` pair for compact assertions
pub fn cursor_of(editor: &TextEditor) -> (usize, usize) {
    let pos = editor.cursor_position();
    (pos.line, pos.column)
}
