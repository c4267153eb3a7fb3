//! Line-range undo/redo log for the editing core.
//!
//! Every mutating editor call is wrapped: the lines it is about to touch are
//! copied before it runs, the same (shifted) range is copied afterwards, and
//! the pair is appended as a [`HistoryRecord`] trimmed to the lines that
//! actually changed. Undo and redo splice those copies back into the buffer,
//! so records never point into the live buffer.
//!
//! The first record is always a `Baseline` holding the loaded text. A
//! separate clean marker tracks the last saved/cleared state:
//! - `is_dirty` compares buffer content with the clean content
//! - `has_changes` compares the log pointer with the clean marker

use std::ops::RangeInclusive;

use super::buffer::{Line, LineBuffer};
use super::cursor::Position;

/// What a record did to the line count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Initial state; only ever the first record
    Baseline,
    /// Same number of lines, content changed
    Replaced,
    /// Net lines added
    Inserted,
    /// Net lines removed
    Removed,
}

/// Snapshot of one edit. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    line_range_start: usize,
    before_lines: Vec<Line>,
    after_lines: Vec<Line>,
    cursor_before: Position,
    cursor_after: Position,
    kind: RecordKind,
}

impl HistoryRecord {
    fn baseline(buffer: &LineBuffer, cursor: Position) -> Self {
        Self {
            line_range_start: 0,
            before_lines: Vec::new(),
            after_lines: buffer.lines().to_vec(),
            cursor_before: cursor,
            cursor_after: cursor,
            kind: RecordKind::Baseline,
        }
    }

    pub fn line_range_start(&self) -> usize {
        self.line_range_start
    }

    pub fn before_lines(&self) -> &[Line] {
        &self.before_lines
    }

    pub fn after_lines(&self) -> &[Line] {
        &self.after_lines
    }

    pub fn cursor_before(&self) -> Position {
        self.cursor_before
    }

    pub fn cursor_after(&self) -> Position {
        self.cursor_after
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

/// Snapshot taken before a wrapped edit runs; finished by [`HistoryLog::commit`]
#[derive(Debug)]
pub struct PendingEdit {
    start: usize,
    before_lines: Vec<Line>,
    line_count_before: usize,
    cursor_before: Position,
}

/// Append-only, pointer-addressed history log
#[derive(Debug, Clone)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
    /// Index of the most recently applied record
    current: usize,
    /// Index of the clean marker; None once that state left the log
    clean: Option<usize>,
    /// Content at the clean marker, for `is_dirty`
    clean_lines: Vec<Line>,
    enabled: bool,
    /// Maximum number of non-baseline records (None = unlimited)
    max_records: Option<usize>,
}

impl HistoryLog {
    pub fn new(buffer: &LineBuffer, cursor: Position) -> Self {
        Self {
            records: vec![HistoryRecord::baseline(buffer, cursor)],
            current: 0,
            clean: Some(0),
            clean_lines: buffer.lines().to_vec(),
            enabled: true,
            max_records: None,
        }
    }

    pub fn with_max_records(mut self, max_records: Option<usize>) -> Self {
        self.max_records = max_records;
        self
    }

    /// Start over from a new baseline (the buffer text was (re)assigned)
    pub fn reset(&mut self, buffer: &LineBuffer, cursor: Position) {
        self.records = vec![HistoryRecord::baseline(buffer, cursor)];
        self.current = 0;
        self.clean = Some(0);
        self.clean_lines = buffer.lines().to_vec();
        tracing::debug!(lines = buffer.line_count(), "history reset to baseline");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable recording. Either transition discards the log and
    /// starts from a baseline of the current text, since edits made while
    /// disabled invalidate the recorded line ranges. The clean content is kept.
    pub fn set_enabled(&mut self, enabled: bool, buffer: &LineBuffer, cursor: Position) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.records = vec![HistoryRecord::baseline(buffer, cursor)];
        self.current = 0;
        self.clean = (buffer.lines() == self.clean_lines.as_slice()).then_some(0);
        tracing::debug!(enabled, "history recording toggled");
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_record(&self) -> &HistoryRecord {
        &self.records[self.current]
    }

    pub fn can_undo(&self) -> bool {
        self.enabled && self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.enabled && self.current + 1 < self.records.len()
    }

    /// Snapshot the lines an edit is about to touch. None while disabled.
    pub fn begin(
        &self,
        buffer: &LineBuffer,
        lines: RangeInclusive<usize>,
        cursor: Position,
    ) -> Option<PendingEdit> {
        if !self.enabled {
            return None;
        }
        let last = buffer.last_line();
        let start = (*lines.start()).min(last);
        let end = (*lines.end()).clamp(start, last);
        Some(PendingEdit {
            start,
            before_lines: buffer.lines_range(start, end + 1),
            line_count_before: buffer.line_count(),
            cursor_before: cursor,
        })
    }

    /// Finish a wrapped edit. Appends a record only if the lines changed.
    pub fn commit(&mut self, pending: PendingEdit, buffer: &LineBuffer, cursor: Position) -> bool {
        let PendingEdit {
            start,
            mut before_lines,
            line_count_before,
            cursor_before,
        } = pending;

        // Lines outside the range are untouched and only shift, so the
        // range after the edit grows or shrinks by the line-count delta.
        let after_len = (before_lines.len() + buffer.line_count())
            .saturating_sub(line_count_before);
        let mut after_lines = buffer.lines_range(start, start + after_len);

        if before_lines == after_lines {
            return false;
        }

        let prefix = before_lines
            .iter()
            .zip(&after_lines)
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = before_lines.len().min(after_lines.len()) - prefix;
        let suffix = before_lines
            .iter()
            .rev()
            .zip(after_lines.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();
        before_lines.truncate(before_lines.len() - suffix);
        before_lines.drain(..prefix);
        after_lines.truncate(after_lines.len() - suffix);
        after_lines.drain(..prefix);

        let kind = match after_lines.len().cmp(&before_lines.len()) {
            std::cmp::Ordering::Equal => RecordKind::Replaced,
            std::cmp::Ordering::Greater => RecordKind::Inserted,
            std::cmp::Ordering::Less => RecordKind::Removed,
        };

        // Branch discard: anything after the pointer is gone
        self.records.truncate(self.current + 1);
        if self.clean.is_some_and(|clean| clean > self.current) {
            self.clean = None;
        }

        self.records.push(HistoryRecord {
            line_range_start: start + prefix,
            before_lines,
            after_lines,
            cursor_before,
            cursor_after: cursor,
            kind,
        });
        self.current += 1;
        tracing::debug!(
            index = self.current,
            ?kind,
            start = start + prefix,
            "history record"
        );

        self.enforce_limit();
        true
    }

    /// Restore the state before the current record. Returns the cursor to restore.
    pub fn undo(&mut self, buffer: &mut LineBuffer) -> Option<Position> {
        if !self.can_undo() {
            return None;
        }
        let record = &self.records[self.current];
        buffer.replace_lines(
            record.line_range_start,
            record.after_lines.len(),
            record.before_lines.clone(),
        );
        let cursor = record.cursor_before;
        self.current -= 1;
        tracing::debug!(index = self.current, "undo");
        Some(cursor)
    }

    /// Re-apply the record after the pointer. Returns the cursor to restore.
    pub fn redo(&mut self, buffer: &mut LineBuffer) -> Option<Position> {
        if !self.can_redo() {
            return None;
        }
        self.current += 1;
        let record = &self.records[self.current];
        buffer.replace_lines(
            record.line_range_start,
            record.before_lines.len(),
            record.after_lines.clone(),
        );
        tracing::debug!(index = self.current, "redo");
        Some(record.cursor_after)
    }

    /// Content differs from the clean content (value comparison)
    pub fn is_dirty(&self, buffer: &LineBuffer) -> bool {
        buffer.lines() != self.clean_lines.as_slice()
    }

    /// The pointer is not at the clean marker
    pub fn has_changes(&self) -> bool {
        self.clean != Some(self.current)
    }

    /// Move the clean marker to the pointer; undo/redo stay available
    pub fn clear_changes(&mut self, buffer: &LineBuffer) {
        self.clean = Some(self.current);
        self.clean_lines = buffer.lines().to_vec();
    }

    /// Fold the oldest records into the baseline once over capacity
    fn enforce_limit(&mut self) {
        let Some(max) = self.max_records else {
            return;
        };
        while self.records.len() - 1 > max.max(1) && self.current > 1 {
            let folded = self.records.remove(1);
            let baseline = &mut self.records[0];
            let start = folded.line_range_start.min(baseline.after_lines.len());
            let end = (start + folded.before_lines.len()).min(baseline.after_lines.len());
            baseline.after_lines.splice(start..end, folded.after_lines);
            baseline.cursor_after = folded.cursor_after;

            self.current -= 1;
            self.clean = match self.clean {
                Some(0) | None => None,
                Some(idx) => Some(idx - 1),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(
        log: &mut HistoryLog,
        buffer: &mut LineBuffer,
        lines: RangeInclusive<usize>,
        f: impl FnOnce(&mut LineBuffer) -> Position,
    ) -> bool {
        let pending = log.begin(buffer, lines, Position::zero()).unwrap();
        let cursor = f(buffer);
        log.commit(pending, buffer, cursor)
    }

    #[test]
    fn test_new_log_has_baseline() {
        let buffer = LineBuffer::from_text("a\nb");
        let log = HistoryLog::new(&buffer, Position::zero());
        assert_eq!(log.records().len(), 1);
        assert_eq!(log.current_record().kind(), RecordKind::Baseline);
        assert!(!log.can_undo());
        assert!(!log.is_dirty(&buffer));
        assert!(!log.has_changes());
    }

    #[test]
    fn test_record_is_trimmed_to_changed_lines() {
        let mut buffer = LineBuffer::from_text("one\ntwo\nthree");
        let mut log = HistoryLog::new(&buffer, Position::zero());

        assert!(edit(&mut log, &mut buffer, 0..=2, |b| {
            b.insert(Position::new(1, 3), "!")
        }));
        let record = log.current_record();
        assert_eq!(record.kind(), RecordKind::Replaced);
        assert_eq!(record.line_range_start(), 1);
        assert_eq!(record.before_lines(), &[vec!['t', 'w', 'o']]);
        assert_eq!(record.after_lines(), &[vec!['t', 'w', 'o', '!']]);
    }

    #[test]
    fn test_kinds_follow_line_count() {
        let mut buffer = LineBuffer::from_text("ab");
        let mut log = HistoryLog::new(&buffer, Position::zero());

        edit(&mut log, &mut buffer, 0..=0, |b| b.insert(Position::new(0, 1), "\n"));
        assert_eq!(log.current_record().kind(), RecordKind::Inserted);

        edit(&mut log, &mut buffer, 0..=1, |b| {
            b.delete_range(Position::new(0, 1), Position::new(1, 0));
            Position::new(0, 1)
        });
        assert_eq!(log.current_record().kind(), RecordKind::Removed);
        assert_eq!(buffer.content(), "ab");
    }

    #[test]
    fn test_no_change_appends_nothing() {
        let mut buffer = LineBuffer::from_text("same");
        let mut log = HistoryLog::new(&buffer, Position::zero());
        assert!(!edit(&mut log, &mut buffer, 0..=0, |_| Position::new(0, 2)));
        assert_eq!(log.records().len(), 1);
    }

    #[test]
    fn test_undo_redo_restore_lines() {
        let mut buffer = LineBuffer::from_text("x\ny");
        let mut log = HistoryLog::new(&buffer, Position::zero());

        edit(&mut log, &mut buffer, 0..=1, |b| b.insert(Position::new(0, 1), "1\n2\n3"));
        assert_eq!(buffer.content(), "x1\n2\n3\ny");

        assert_eq!(log.undo(&mut buffer), Some(Position::zero()));
        assert_eq!(buffer.content(), "x\ny");
        assert_eq!(log.undo(&mut buffer), None);

        assert_eq!(log.redo(&mut buffer), Some(Position::new(2, 1)));
        assert_eq!(buffer.content(), "x1\n2\n3\ny");
        assert_eq!(log.redo(&mut buffer), None);
    }

    #[test]
    fn test_branch_discard() {
        let mut buffer = LineBuffer::from_text("");
        let mut log = HistoryLog::new(&buffer, Position::zero());

        edit(&mut log, &mut buffer, 0..=0, |b| b.insert(Position::zero(), "a"));
        edit(&mut log, &mut buffer, 0..=0, |b| b.insert(Position::new(0, 1), "b"));
        log.undo(&mut buffer);
        edit(&mut log, &mut buffer, 0..=0, |b| b.insert(Position::new(0, 1), "c"));

        assert_eq!(log.records().len(), 3);
        assert!(!log.can_redo());
        log.undo(&mut buffer);
        log.redo(&mut buffer);
        assert_eq!(buffer.content(), "ac");
    }

    #[test]
    fn test_dirty_is_content_comparison() {
        let mut buffer = LineBuffer::from_text("v");
        let mut log = HistoryLog::new(&buffer, Position::zero());

        edit(&mut log, &mut buffer, 0..=0, |b| b.insert(Position::new(0, 1), "w"));
        assert!(log.is_dirty(&buffer));
        edit(&mut log, &mut buffer, 0..=0, |b| {
            b.delete_range(Position::new(0, 1), Position::new(0, 2));
            Position::new(0, 1)
        });
        assert!(!log.is_dirty(&buffer));
        assert!(log.has_changes());
    }

    #[test]
    fn test_clear_changes_moves_clean_marker() {
        let mut buffer = LineBuffer::from_text("");
        let mut log = HistoryLog::new(&buffer, Position::zero());

        edit(&mut log, &mut buffer, 0..=0, |b| b.insert(Position::zero(), "q"));
        log.clear_changes(&buffer);
        assert!(!log.has_changes());
        assert!(!log.is_dirty(&buffer));
        assert!(log.can_undo());

        log.undo(&mut buffer);
        assert!(log.has_changes());
        assert!(log.is_dirty(&buffer));
    }

    #[test]
    fn test_disabled_log_records_nothing() {
        let buffer = LineBuffer::from_text("abc");
        let mut log = HistoryLog::new(&buffer, Position::zero());
        log.set_enabled(false, &buffer, Position::zero());
        assert!(log.begin(&buffer, 0..=0, Position::zero()).is_none());
        assert!(!log.can_undo());
    }

    #[test]
    fn test_limit_folds_into_baseline() {
        let mut buffer = LineBuffer::from_text("");
        let mut log = HistoryLog::new(&buffer, Position::zero()).with_max_records(Some(2));

        for (i, ch) in "abcd".chars().enumerate() {
            edit(&mut log, &mut buffer, 0..=0, |b| {
                b.insert(Position::new(0, i), &ch.to_string())
            });
        }
        assert_eq!(log.records().len(), 3);
        assert_eq!(log.records()[0].kind(), RecordKind::Baseline);
        assert_eq!(log.records()[0].after_lines(), &[vec!['a', 'b']]);

        while log.undo(&mut buffer).is_some() {}
        assert_eq!(buffer.content(), "ab");
        assert!(log.is_dirty(&buffer));
    }
}
