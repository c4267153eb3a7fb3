//! Buffer-mutating operations.
//!
//! Each operation returns whether it was handled. Every mutation runs inside
//! [`TextEditor::record_edit`] so it lands in the history log as one record,
//! and every non-kill mutation ends the current kill sequence.

use super::clipboard::KillDirection;
use super::cursor::Position;
use super::editor::TextEditor;
use super::search::{self, FindOptions, FindResult};

impl TextEditor {
    // =========================================================================
    // Insertion
    // =========================================================================

    /// Replace the selection with `text`, or insert it at the cursor.
    /// One call is one history record regardless of length.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if !self.guard_mutation() || !self.constraints.accepts_text(text) {
            return false;
        }
        let lines = self.edit_lines();
        self.record_edit(lines, |ed| ed.replace_selection_raw(text));
        self.kill_ring.reset();
        true
    }

    /// Type a single character, honouring overwrite mode
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' {
            return self.insert_newline();
        }
        if !self.overwrite || self.has_selection() {
            let mut buf = [0u8; 4];
            return self.insert_text(ch.encode_utf8(&mut buf));
        }
        if !self.guard_mutation() {
            return false;
        }

        let pos = self.cursor.to_position();
        let line = pos.line;
        self.record_edit(line..=line, |ed| {
            if pos.column < ed.buffer.line_length(line) {
                ed.buffer
                    .delete_range(pos, Position::new(line, pos.column + 1));
            }
            let mut buf = [0u8; 4];
            let end = ed.buffer.insert(pos, ch.encode_utf8(&mut buf));
            ed.place_cursor(end);
        });
        self.kill_ring.reset();
        true
    }

    /// Split the line at the cursor
    pub fn insert_newline(&mut self) -> bool {
        if !self.guard_mutation() || !self.constraints.accepts_return() {
            return false;
        }
        let lines = self.edit_lines();
        self.record_edit(lines, |ed| ed.replace_selection_raw("\n"));
        self.kill_ring.reset();
        true
    }

    /// Delete the selection (if any) and insert `text` where it started.
    /// Not recorded on its own; callers wrap it.
    fn replace_selection_raw(&mut self, text: &str) {
        let pos = if self.has_selection() {
            let (start, end) = self.selection.ordered();
            self.buffer.delete_range(start, end);
            start
        } else {
            self.cursor.to_position()
        };
        let end = self.buffer.insert(pos, text);
        self.place_cursor(end);
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Delete the scalar left of the cursor (merging lines at column 0), or
    /// the selection
    pub fn delete_char_left(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        if self.has_selection() {
            self.delete_selection();
            return true;
        }

        let pos = self.cursor.to_position();
        let prev = self.buffer.prev_position(pos);
        if prev == pos {
            return false;
        }
        self.record_edit(prev.line..=pos.line, |ed| {
            ed.buffer.delete_range(prev, pos);
            ed.place_cursor(prev);
        });
        self.kill_ring.reset();
        true
    }

    /// Delete the scalar right of the cursor (merging lines at line end), or
    /// the selection
    pub fn delete_char_right(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        if self.has_selection() {
            self.delete_selection();
            return true;
        }

        let pos = self.cursor.to_position();
        let next = self.buffer.next_position(pos);
        if next == pos {
            return false;
        }
        self.record_edit(pos.line..=next.line, |ed| {
            ed.buffer.delete_range(pos, next);
            ed.place_cursor(pos);
        });
        self.kill_ring.reset();
        true
    }

    fn delete_selection(&mut self) {
        let (start, end) = self.selection.ordered();
        let lines = self.edit_lines();
        self.record_edit(lines, |ed| {
            ed.buffer.delete_range(start, end);
            ed.place_cursor(start);
        });
        self.kill_ring.reset();
    }

    /// Empty the buffer as a single record
    pub fn delete_all(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        let last = self.buffer.last_line();
        self.record_edit(0..=last, |ed| {
            ed.buffer.set_lines(Vec::new());
            ed.place_cursor(Position::zero());
        });
        self.kill_ring.reset();
        true
    }

    // =========================================================================
    // Kills
    // =========================================================================

    /// Kill up to the next word boundary
    pub fn delete_word_forward(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        if self.has_selection() {
            self.kill_selection(KillDirection::Forward);
            return true;
        }
        let pos = self.cursor.to_position();
        let target = self.word_forward_position(pos);
        self.kill_range(pos, target, KillDirection::Forward);
        true
    }

    /// Kill back to the previous word boundary
    pub fn delete_word_backward(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        if self.has_selection() {
            self.kill_selection(KillDirection::Backward);
            return true;
        }
        let pos = self.cursor.to_position();
        let target = self.word_backward_position(pos);
        self.kill_range(target, pos, KillDirection::Backward);
        true
    }

    /// Kill to the end of the line. At the line end the separator is killed
    /// instead; at the end of the buffer nothing is.
    pub fn kill_to_end_of_line(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        if self.has_selection() {
            self.kill_selection(KillDirection::Forward);
            return true;
        }

        let pos = self.cursor.to_position();
        let len = self.buffer.line_length(pos.line);
        let end = if pos.column < len {
            Position::new(pos.line, len)
        } else {
            self.buffer.next_position(pos)
        };
        self.kill_range(pos, end, KillDirection::Forward);
        true
    }

    /// Kill to the start of the line. At column 0 the preceding separator is
    /// killed instead; at the start of the buffer nothing is.
    pub fn kill_to_start_of_line(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        if self.has_selection() {
            self.kill_selection(KillDirection::Backward);
            return true;
        }

        let pos = self.cursor.to_position();
        let start = if pos.column > 0 {
            Position::new(pos.line, 0)
        } else {
            self.buffer.prev_position(pos)
        };
        self.kill_range(start, pos, KillDirection::Backward);
        true
    }

    fn kill_selection(&mut self, direction: KillDirection) {
        let (start, end) = self.selection.ordered();
        self.kill_range(start, end, direction);
    }

    /// Remove `from..to` and feed it to the kill ring. An empty range only
    /// settles the cursor; the register is left alone.
    fn kill_range(&mut self, from: Position, to: Position, direction: KillDirection) {
        if from == to {
            self.place_cursor(from);
            return;
        }
        let lines = from.line.min(self.cursor.line)..=to.line.max(self.cursor.line);
        let removed = self.record_edit(lines, |ed| {
            let removed = ed.buffer.delete_range(from, to);
            ed.place_cursor(from);
            removed
        });
        self.kill_ring.kill(removed, direction);
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    /// Insert a tab. With a selection spanning several lines, every selected
    /// line is indented instead and the selection is kept.
    pub fn tab(&mut self) -> bool {
        if !self.constraints.accepts_tab() {
            if self.constraints.read_only {
                self.set_selecting(false);
            }
            return false;
        }
        if self.has_selection() && self.selection.spans_lines() {
            self.indent_lines();
            self.kill_ring.reset();
            return true;
        }
        self.insert_text("\t")
    }

    /// Remove one tab unit (a tab, or up to `tab_width` spaces) from the
    /// start of the current line or of every selected line
    pub fn back_tab(&mut self) -> bool {
        if !self.constraints.accepts_back_tab() {
            if self.constraints.read_only {
                self.set_selecting(false);
            }
            return false;
        }

        let lines = self.selected_block_lines();
        let removals: Vec<(usize, usize)> = lines
            .clone()
            .map(|line| (line, self.leading_tab_unit(line)))
            .filter(|&(_, count)| count > 0)
            .collect();
        if removals.is_empty() {
            return true;
        }

        self.record_edit(lines, |ed| {
            for &(line, count) in &removals {
                ed.buffer
                    .delete_range(Position::new(line, 0), Position::new(line, count));
                ed.shift_line_positions(line, -(count as isize));
            }
        });
        self.kill_ring.reset();
        true
    }

    fn indent_lines(&mut self) {
        let lines = self.selected_block_lines();
        self.record_edit(lines.clone(), |ed| {
            for line in lines {
                ed.buffer.insert(Position::new(line, 0), "\t");
                ed.shift_line_positions(line, 1);
            }
        });
    }

    /// Lines covered by the selection, or the cursor line
    fn selected_block_lines(&self) -> std::ops::RangeInclusive<usize> {
        if self.has_selection() {
            self.selection.line_range()
        } else {
            self.cursor.line..=self.cursor.line
        }
    }

    /// Scalars forming one leading tab unit on `line`
    fn leading_tab_unit(&self, line: usize) -> usize {
        let Some(chars) = self.buffer.line(line) else {
            return 0;
        };
        if chars.first() == Some(&'\t') {
            return 1;
        }
        chars
            .iter()
            .take(self.constraints.tab_width)
            .take_while(|&&ch| ch == ' ')
            .count()
    }

    /// Move cursor and selection endpoints on `line` by `delta` columns
    fn shift_line_positions(&mut self, line: usize, delta: isize) {
        let shift = |pos: &mut Position| {
            if pos.line == line {
                pos.column = pos.column.saturating_add_signed(delta);
            }
        };
        shift(&mut self.selection.anchor);
        shift(&mut self.selection.head);
        if self.cursor.line == line {
            self.cursor.column = self.cursor.column.saturating_add_signed(delta);
            self.cursor.clear_desired_column();
        }
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    /// Copy the selected text to the register, even when it is empty.
    /// Works in read-only mode.
    pub fn copy(&mut self) -> bool {
        let text = self.selected_text();
        self.kill_ring.copy(text);
        true
    }

    /// Remove the selection into the register, starting a kill sequence
    pub fn cut(&mut self) -> bool {
        if !self.guard_mutation() || !self.has_selection() {
            return false;
        }
        let (start, end) = self.selection.ordered();
        let lines = self.edit_lines();
        let removed = self.record_edit(lines, |ed| {
            let removed = ed.buffer.delete_range(start, end);
            ed.place_cursor(start);
            removed
        });
        self.kill_ring.cut(removed);
        true
    }

    /// Insert the register content verbatim, replacing the selection.
    /// The kill sequence is left as it was.
    pub fn paste(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        let text = self.kill_ring.contents();
        if !self.constraints.accepts_text(&text) {
            return false;
        }
        let lines = self.edit_lines();
        self.record_edit(lines, |ed| ed.replace_selection_raw(&text));
        true
    }

    // =========================================================================
    // Find and replace
    // =========================================================================

    /// Select the next match after the cursor, wrapping once
    pub fn find_next(&mut self, term: &str, options: FindOptions) -> Option<FindResult> {
        let from = if self.has_selection() {
            self.selection.end()
        } else {
            self.cursor.to_position()
        };
        let found = search::find_next(&self.buffer, term, from, options)?;
        tracing::trace!(?found, "find next");
        self.select_range(found.start, found.end);
        Some(found)
    }

    /// Select the previous match before the cursor, wrapping once. The cursor
    /// lands on the match start.
    pub fn find_previous(&mut self, term: &str, options: FindOptions) -> Option<FindResult> {
        let from = if self.has_selection() {
            self.selection.start()
        } else {
            self.cursor.to_position()
        };
        let found = search::find_previous(&self.buffer, term, from, options)?;
        tracing::trace!(?found, "find previous");
        self.select_range(found.end, found.start);
        Some(found)
    }

    /// Replace the next match (the selected one, if it matches) with
    /// `replacement`
    pub fn replace_next(&mut self, term: &str, replacement: &str, options: FindOptions) -> bool {
        if !self.guard_mutation() || !self.constraints.accepts_text(replacement) {
            return false;
        }
        let from = if self.has_selection() {
            self.selection.start()
        } else {
            self.cursor.to_position()
        };
        let Some(found) = search::find_next(&self.buffer, term, from, options) else {
            return false;
        };

        self.select_range(found.start, found.end);
        let lines = self.edit_lines();
        self.record_edit(lines, |ed| ed.replace_selection_raw(replacement));
        self.kill_ring.reset();
        true
    }

    /// Replace every match as one history record. Returns the match count.
    pub fn replace_all(&mut self, term: &str, replacement: &str, options: FindOptions) -> usize {
        if !self.guard_mutation() || !self.constraints.accepts_text(replacement) {
            return 0;
        }
        let matches = search::find_all(&self.buffer, term, options);
        let (Some(first), Some(last)) = (matches.first(), matches.last()) else {
            return 0;
        };

        let first_start = first.start;
        let lines = first_start.line.min(self.cursor.line)..=last.end.line.max(self.cursor.line);
        self.record_edit(lines, |ed| {
            // Back to front so earlier positions stay valid
            for found in matches.iter().rev() {
                ed.buffer.delete_range(found.start, found.end);
                ed.buffer.insert(found.start, replacement);
            }
            ed.place_cursor(first_start);
        });
        self.kill_ring.reset();
        tracing::debug!(count = matches.len(), "replace all");
        matches.len()
    }
}
