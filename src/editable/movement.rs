//! Cursor movement and selection extension. Available in read-only mode.

use crate::util::text::{char_type, CharType};

use super::cursor::Position;
use super::editor::TextEditor;
use super::selection::Selection;

impl TextEditor {
    /// Anchor a new selection at the cursor when a move starts extending
    fn begin_move(&mut self, extend_selection: bool) {
        if extend_selection && !self.selecting {
            self.selecting = true;
            self.selection.anchor = self.cursor.to_position();
        }
    }

    /// Sync selection head with the cursor, collapsing unless extending
    fn finish_move(&mut self, extend_selection: bool) {
        self.selection.head = self.cursor.to_position();
        if !extend_selection {
            self.selecting = false;
            self.selection.collapse();
        }
    }

    fn move_to(&mut self, pos: Position, extend_selection: bool) {
        self.begin_move(extend_selection);
        let pos = self.buffer.clamp(pos);
        self.cursor.line = pos.line;
        self.cursor.column = pos.column;
        self.cursor.clear_desired_column();
        self.finish_move(extend_selection);
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            self.move_to(start, false);
            return;
        }
        let target = if self.cursor.column > 0 || self.constraints.allow_multiline {
            self.buffer.prev_position(self.cursor.to_position())
        } else {
            self.cursor.to_position()
        };
        self.move_to(target, extend_selection);
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            self.move_to(end, false);
            return;
        }
        let pos = self.cursor.to_position();
        let at_line_end = pos.column >= self.buffer.line_length(pos.line);
        let target = if !at_line_end || self.constraints.allow_multiline {
            self.buffer.next_position(pos)
        } else {
            pos
        };
        self.move_to(target, extend_selection);
    }

    /// Move cursor up by one line, keeping the desired column
    pub fn move_up(&mut self, extend_selection: bool) {
        self.move_vertically(true, 1, extend_selection);
    }

    /// Move cursor down by one line, keeping the desired column
    pub fn move_down(&mut self, extend_selection: bool) {
        self.move_vertically(false, 1, extend_selection);
    }

    /// Move by a page of `page_lines` lines
    pub fn move_page_up(&mut self, page_lines: usize, extend_selection: bool) {
        self.move_vertically(true, page_lines.max(1), extend_selection);
    }

    pub fn move_page_down(&mut self, page_lines: usize, extend_selection: bool) {
        self.move_vertically(false, page_lines.max(1), extend_selection);
    }

    fn move_vertically(&mut self, up: bool, lines: usize, extend_selection: bool) {
        self.begin_move(extend_selection);

        let target_line = if up {
            self.cursor.line.saturating_sub(lines)
        } else {
            self.cursor
                .line
                .saturating_add(lines)
                .min(self.buffer.last_line())
        };
        if target_line != self.cursor.line {
            self.cursor.set_desired_column();
            self.cursor.line = target_line;
            let line_len = self.buffer.line_length(target_line);
            self.cursor.column = self.cursor.effective_column().min(line_len);
        }

        self.finish_move(extend_selection);
    }

    /// Move cursor to start of line
    pub fn move_line_start(&mut self, extend_selection: bool) {
        let line = self.cursor.line;
        self.move_to(Position::new(line, 0), extend_selection);
    }

    /// Move cursor to end of line
    pub fn move_line_end(&mut self, extend_selection: bool) {
        let line = self.cursor.line;
        let len = self.buffer.line_length(line);
        self.move_to(Position::new(line, len), extend_selection);
    }

    /// Move cursor to start of document
    pub fn move_document_start(&mut self, extend_selection: bool) {
        self.move_to(Position::zero(), extend_selection);
    }

    /// Move cursor to end of document
    pub fn move_document_end(&mut self, extend_selection: bool) {
        let end = self.buffer.end_position();
        self.move_to(end, extend_selection);
    }

    /// Move cursor to the start of the next word
    pub fn move_word_forward(&mut self, extend_selection: bool) {
        let target = self.word_forward_position(self.cursor.to_position());
        self.move_to(target, extend_selection);
    }

    /// Move cursor to the start of the previous word
    pub fn move_word_backward(&mut self, extend_selection: bool) {
        let target = self.word_backward_position(self.cursor.to_position());
        self.move_to(target, extend_selection);
    }

    /// Forward word boundary: skip the rest of the run under the cursor
    /// (whatever its class), then the whitespace run after it. Line
    /// separators count as whitespace.
    pub(super) fn word_forward_position(&self, from: Position) -> Position {
        let buffer = &self.buffer;
        let mut pos = buffer.clamp(from);

        if let Some(first) = buffer.char_after(pos) {
            let run = char_type(first);
            while let Some(ch) = buffer.char_after(pos) {
                if char_type(ch) != run {
                    break;
                }
                pos = buffer.next_position(pos);
            }
        }

        while let Some(ch) = buffer.char_after(pos) {
            if char_type(ch) != CharType::Whitespace {
                break;
            }
            pos = buffer.next_position(pos);
        }

        pos
    }

    /// Backward word boundary: skip the whitespace run before the cursor,
    /// then the single-class run before that, landing at its start.
    pub(super) fn word_backward_position(&self, from: Position) -> Position {
        let buffer = &self.buffer;
        let mut pos = buffer.clamp(from);

        while let Some(ch) = buffer.char_before(pos) {
            if char_type(ch) != CharType::Whitespace {
                break;
            }
            pos = buffer.prev_position(pos);
        }

        if let Some(last) = buffer.char_before(pos) {
            let run = char_type(last);
            while let Some(ch) = buffer.char_before(pos) {
                if char_type(ch) != run {
                    break;
                }
                pos = buffer.prev_position(pos);
            }
        }

        pos
    }

    /// Select all text, leaving the cursor at the end
    pub fn select_all(&mut self) {
        let end = self.buffer.end_position();
        self.select_range(Position::zero(), end);
        self.cursor.clear_desired_column();
    }

    /// Select the run (word, punctuation or whitespace) under the cursor
    pub fn select_word(&mut self) {
        let line = self.cursor.line;
        let Some(chars) = self.buffer.line(line) else {
            return;
        };
        if chars.is_empty() {
            return;
        }

        let col = self.cursor.column.min(chars.len() - 1);
        let target_type = char_type(chars[col]);

        let mut start = col;
        while start > 0 && char_type(chars[start - 1]) == target_type {
            start -= 1;
        }
        let mut end = col;
        while end < chars.len() && char_type(chars[end]) == target_type {
            end += 1;
        }

        self.selection = Selection::new(Position::new(line, start), Position::new(line, end));
        self.selecting = true;
        self.cursor.column = end;
        self.cursor.clear_desired_column();
    }
}

#[cfg(test)]
mod tests {
    use super::super::clipboard::SharedClipboard;
    use super::super::constraints::EditConstraints;
    use super::*;

    fn create_test_editor(text: &str, line: usize, column: usize) -> TextEditor {
        let mut editor = TextEditor::new(text, EditConstraints::editor(), SharedClipboard::new());
        editor.set_cursor_position(Position::new(line, column));
        editor
    }

    #[test]
    fn test_cursor_movement() {
        let mut editor = create_test_editor("hello", 0, 2);
        editor.move_left(false);
        assert_eq!(editor.cursor().column, 1);
        editor.move_right(false);
        assert_eq!(editor.cursor().column, 2);
    }

    #[test]
    fn test_left_right_cross_lines() {
        let mut editor = create_test_editor("ab\ncd", 1, 0);
        editor.move_left(false);
        assert_eq!(editor.cursor_position(), Position::new(0, 2));
        editor.move_right(false);
        assert_eq!(editor.cursor_position(), Position::new(1, 0));
    }

    #[test]
    fn test_word_forward_skips_run_then_whitespace() {
        let mut editor = create_test_editor("hello world", 0, 0);
        editor.move_word_forward(false);
        assert_eq!(editor.cursor().column, 6);
        editor.move_word_backward(false);
        assert_eq!(editor.cursor().column, 0);
    }

    #[test]
    fn test_word_forward_crosses_line_end() {
        let mut editor = create_test_editor("abc  \n  def", 0, 1);
        editor.move_word_forward(false);
        assert_eq!(editor.cursor_position(), Position::new(1, 2));
    }

    #[test]
    fn test_word_forward_lands_on_next_line_start() {
        let mut editor = create_test_editor("abc\ndef", 0, 0);
        editor.move_word_forward(false);
        assert_eq!(editor.cursor_position(), Position::new(1, 0));
    }

    #[test]
    fn test_punctuation_runs_are_units() {
        let mut editor = create_test_editor("a+=b;", 0, 0);
        editor.move_word_forward(false);
        assert_eq!(editor.cursor().column, 1);
        editor.move_word_forward(false);
        assert_eq!(editor.cursor().column, 3);
        editor.move_word_forward(false);
        assert_eq!(editor.cursor().column, 4);

        editor.move_word_backward(false);
        assert_eq!(editor.cursor().column, 3);
        editor.move_word_backward(false);
        assert_eq!(editor.cursor().column, 1);
    }

    #[test]
    fn test_word_backward_crosses_line_start() {
        let mut editor = create_test_editor("foo bar\n  baz", 1, 2);
        editor.move_word_backward(false);
        assert_eq!(editor.cursor_position(), Position::new(0, 4));
    }

    #[test]
    fn test_extend_selection_with_word_moves() {
        let mut editor = create_test_editor("hello world", 0, 0);
        editor.move_word_forward(true);
        assert_eq!(editor.selection().anchor, Position::new(0, 0));
        assert_eq!(editor.selection().head, Position::new(0, 6));
        assert_eq!(editor.selected_text(), "hello ");
    }

    #[test]
    fn test_vertical_keeps_desired_column() {
        let mut editor = create_test_editor("long line\nx\nanother line", 0, 7);
        editor.move_down(false);
        assert_eq!(editor.cursor_position(), Position::new(1, 1));
        editor.move_down(false);
        assert_eq!(editor.cursor_position(), Position::new(2, 7));
    }

    #[test]
    fn test_page_moves_clamp() {
        let mut editor = create_test_editor("1\n2\n3\n4\n5", 1, 0);
        editor.move_page_down(10, false);
        assert_eq!(editor.cursor().line, 4);
        editor.move_page_up(2, false);
        assert_eq!(editor.cursor().line, 2);
    }

    #[test]
    fn test_move_left_collapses_selection_to_start() {
        let mut editor = create_test_editor("hello", 0, 1);
        editor.move_right(true);
        editor.move_right(true);
        editor.move_left(false);
        assert!(!editor.has_selection());
        assert_eq!(editor.cursor().column, 1);
    }

    #[test]
    fn test_select_all_and_word() {
        let mut editor = create_test_editor("one two\nthree", 0, 5);
        editor.select_word();
        assert_eq!(editor.selected_text(), "two");

        editor.select_all();
        assert_eq!(editor.selected_text(), "one two\nthree");
        assert_eq!(editor.cursor_position(), Position::new(1, 5));
    }

    #[test]
    fn test_line_start_end() {
        let mut editor = create_test_editor("hello", 0, 2);
        editor.move_line_end(false);
        assert_eq!(editor.cursor().column, 5);
        editor.move_line_start(false);
        assert_eq!(editor.cursor().column, 0);
    }
}
