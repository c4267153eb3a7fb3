//! TextEditor - the line buffer, cursor/selection, clipboard and history
//! owned together by one text view.

use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::config::TextViewConfig;
use crate::util::file_validation::LoadError;

use super::buffer::LineBuffer;
use super::clipboard::{ClipboardService, KillRing, KillState};
use super::constraints::EditConstraints;
use super::cursor::{Cursor, Position};
use super::history::HistoryLog;
use super::selection::Selection;

/// Editing core of a multi-line text view.
///
/// Every mutating operation is wrapped by the history log, which snapshots
/// the touched line range before and after it runs. Out-of-range cursor and
/// selection coordinates are clamped, never rejected.
#[derive(Debug)]
pub struct TextEditor {
    pub(super) buffer: LineBuffer,
    pub(super) cursor: Cursor,
    /// Anchor and head; the head always equals the cursor
    pub(super) selection: Selection,
    /// Whether the anchor is live. When false, anchor == head.
    pub(super) selecting: bool,
    /// Constraints for this editor
    pub constraints: EditConstraints,
    pub(super) word_wrap: bool,
    pub(super) overwrite: bool,
    pub(super) history: HistoryLog,
    pub(super) kill_ring: KillRing,
}

impl TextEditor {
    /// Create an editor over `text` with the given constraints and clipboard register
    pub fn new(
        text: &str,
        constraints: EditConstraints,
        clipboard: impl ClipboardService + 'static,
    ) -> Self {
        let buffer = LineBuffer::from_text(text);
        let history = HistoryLog::new(&buffer, Position::zero());
        Self {
            buffer,
            cursor: Cursor::default(),
            selection: Selection::default(),
            selecting: false,
            constraints,
            word_wrap: false,
            overwrite: false,
            history,
            kill_ring: KillRing::new(Box::new(clipboard)),
        }
    }

    /// Create an editor configured from a [`TextViewConfig`]
    pub fn from_config(
        text: &str,
        config: &TextViewConfig,
        clipboard: impl ClipboardService + 'static,
    ) -> Self {
        let mut editor = Self::new(text, config.constraints(), clipboard);
        editor.history = HistoryLog::new(&editor.buffer, Position::zero())
            .with_max_records(config.history_limit);
        editor.set_word_wrap(config.word_wrap);
        editor
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the content with `text`; history restarts from a new baseline
    pub fn load_text(&mut self, text: &str) {
        self.replace_buffer(LineBuffer::from_text(text));
    }

    /// Decode a UTF-8 byte stream and replace the content with it
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<(), LoadError> {
        let buffer = LineBuffer::from_reader(reader)?;
        self.replace_buffer(buffer);
        Ok(())
    }

    /// Validate and load a file from disk
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let buffer = LineBuffer::from_file(path).inspect_err(|e| {
            tracing::warn!("Failed to load {}: {}", path.display(), e);
        })?;
        tracing::debug!(lines = buffer.line_count(), "loaded {}", path.display());
        self.replace_buffer(buffer);
        Ok(())
    }

    fn replace_buffer(&mut self, buffer: LineBuffer) {
        self.buffer = buffer;
        self.cursor = Cursor::default();
        self.selection = Selection::default();
        self.selecting = false;
        self.history.reset(&self.buffer, Position::zero());
        self.kill_ring.reset();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Full text, lines joined by the canonical separator
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line(&self, line: usize) -> Option<String> {
        self.buffer.line_text(line)
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor.to_position()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Check if there is a non-empty live selection
    pub fn has_selection(&self) -> bool {
        self.selecting && !self.selection.is_empty()
    }

    /// Text between anchor and cursor in document order, separators included.
    /// Recomputed on every call.
    pub fn selected_text(&self) -> String {
        if !self.has_selection() {
            return String::new();
        }
        self.buffer.slice(self.selection.anchor, self.selection.head)
    }

    /// Scalar count of [`Self::selected_text`]
    pub fn selected_length(&self) -> usize {
        if !self.has_selection() {
            return 0;
        }
        self.buffer.distance(self.selection.anchor, self.selection.head)
    }

    pub fn is_read_only(&self) -> bool {
        self.constraints.read_only
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn kill_state(&self) -> KillState {
        self.kill_ring.state()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    // =========================================================================
    // Cursor and selection assignment (always clamped)
    // =========================================================================

    /// Move the cursor. A live selection keeps its anchor.
    pub fn set_cursor_position(&mut self, pos: Position) {
        let pos = self.buffer.clamp(pos);
        self.cursor = Cursor::at_position(pos);
        self.selection.head = pos;
        if !self.selecting {
            self.selection.anchor = pos;
        }
    }

    /// Set the selection anchor and start selecting
    pub fn set_selection_start(&mut self, pos: Position) {
        self.selection.anchor = self.buffer.clamp(pos);
        self.selection.head = self.cursor.to_position();
        self.selecting = true;
    }

    /// Turning selecting off collapses the anchor onto the cursor
    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting;
        if !selecting {
            self.selection.collapse();
        }
    }

    /// Select `anchor..head`, leaving the cursor on `head`
    pub fn select_range(&mut self, anchor: Position, head: Position) {
        let head = self.buffer.clamp(head);
        self.selection = Selection::new(self.buffer.clamp(anchor), head);
        self.cursor = Cursor::at_position(head);
        self.selecting = true;
    }

    /// Collapse selection to cursor position
    pub fn collapse_selection(&mut self) {
        self.set_selecting(false);
    }

    /// Place the cursor after an edit: clamped, selection cleared
    pub(super) fn place_cursor(&mut self, pos: Position) {
        let pos = self.buffer.clamp(pos);
        self.cursor = Cursor::at_position(pos);
        self.selection = Selection::collapsed(pos);
        self.selecting = false;
    }

    // =========================================================================
    // Modes
    // =========================================================================

    /// Word-wrap presentation splits lines visually, which invalidates
    /// line-range history; while it is on, nothing is recorded and undo/redo
    /// do nothing. Toggling in either direction restarts the log.
    pub fn set_word_wrap(&mut self, word_wrap: bool) {
        if self.word_wrap == word_wrap {
            return;
        }
        self.word_wrap = word_wrap;
        self.history
            .set_enabled(!word_wrap, &self.buffer, self.cursor.to_position());
    }

    /// In overwrite mode typed characters replace the one under the cursor
    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Run `op` as one history record covering `lines` (pre-edit line indices).
    /// Lines outside the range must not change.
    pub(super) fn record_edit<R>(
        &mut self,
        lines: RangeInclusive<usize>,
        op: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let pending = self
            .history
            .begin(&self.buffer, lines, self.cursor.to_position());
        let result = op(self);
        if let Some(pending) = pending {
            self.history
                .commit(pending, &self.buffer, self.cursor.to_position());
        }
        result
    }

    /// Lines touched by replacing the selection (or inserting at the cursor)
    pub(super) fn edit_lines(&self) -> RangeInclusive<usize> {
        let line = self.cursor.line;
        if self.has_selection() {
            let range = self.selection.line_range();
            (*range.start()).min(line)..=(*range.end()).max(line)
        } else {
            line..=line
        }
    }

    /// Reject a mutation on a read-only editor, clearing the selection
    pub(super) fn guard_mutation(&mut self) -> bool {
        if self.constraints.read_only {
            self.set_selecting(false);
            return false;
        }
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.constraints.read_only && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.constraints.read_only && self.history.can_redo()
    }

    /// Undo the last recorded edit
    pub fn undo(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        match self.history.undo(&mut self.buffer) {
            Some(pos) => {
                self.place_cursor(pos);
                self.kill_ring.reset();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit
    pub fn redo(&mut self) -> bool {
        if !self.guard_mutation() {
            return false;
        }
        match self.history.redo(&mut self.buffer) {
            Some(pos) => {
                self.place_cursor(pos);
                self.kill_ring.reset();
                true
            }
            None => false,
        }
    }

    /// Content differs from the last loaded or cleared state
    pub fn is_dirty(&self) -> bool {
        self.history.is_dirty(&self.buffer)
    }

    /// The history pointer moved away from the clean marker
    pub fn has_history_changes(&self) -> bool {
        self.history.has_changes()
    }

    /// Mark the current state clean without dropping undo/redo
    pub fn clear_history_changes(&mut self) {
        self.history.clear_changes(&self.buffer);
    }

    // =========================================================================
    // Invariants
    // =========================================================================

    /// Panic (debug builds) if cursor or selection left the buffer
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let pos = self.cursor.to_position();
        debug_assert_eq!(
            self.buffer.clamp(pos),
            pos,
            "[{}] cursor outside buffer",
            context
        );
        debug_assert_eq!(
            self.selection.head, pos,
            "[{}] selection head detached from cursor",
            context
        );
        debug_assert_eq!(
            self.buffer.clamp(self.selection.anchor),
            self.selection.anchor,
            "[{}] anchor outside buffer",
            context
        );
        debug_assert!(
            self.selecting || self.selection.is_empty(),
            "[{}] anchor live while not selecting",
            context
        );
    }
}
