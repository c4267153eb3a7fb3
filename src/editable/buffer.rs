//! Line buffer for the editing core.
//!
//! The document is an ordered list of logical lines, each a sequence of
//! Unicode scalar values. The buffer is never empty: no content is exactly
//! one empty line. Columns index scalar values, not bytes or display cells.

use std::io::Read;
use std::path::Path;

use crate::util::file_validation::{is_likely_binary, validate_file_for_loading, LoadError};
use crate::util::text::{char_col_to_visual_col, visual_col_to_char_col};

use super::cursor::Position;

/// A logical line: scalar values without the separator.
pub type Line = Vec<char>;

/// Canonical separator used when lines are joined back into text.
pub const LINE_SEPARATOR: char = '\n';

/// Split text into lines on `\r\n` or `\n`. Always yields at least one line.
/// A `\r` not followed by `\n` is kept as content.
pub fn split_lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::with_capacity(text.len() / 32 + 1);
    let mut current = Line::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    lines.push(current);
    lines
}

/// Join lines with the canonical separator.
pub fn join_lines(lines: &[Line]) -> String {
    let capacity = lines.iter().map(|l| l.len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push(LINE_SEPARATOR);
        }
        text.extend(line.iter());
    }
    text
}

/// Multi-line text store addressed by (line, column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Empty buffer: exactly one empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Create a buffer from text, normalizing `\r\n` and `\n` separators
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }

    /// Decode a UTF-8 byte stream eagerly. A leading byte order mark is dropped.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let text = String::from_utf8(bytes).map_err(|e| LoadError::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        Ok(Self::from_text(text))
    }

    /// Validate and load a file from disk
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        validate_file_for_loading(path)?;
        if is_likely_binary(path) {
            return Err(LoadError::BinaryFile);
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Full content with lines joined by the canonical separator
    pub fn content(&self) -> String {
        join_lines(&self.lines)
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All lines in document order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, line: usize) -> Option<&[char]> {
        self.lines.get(line).map(Vec::as_slice)
    }

    /// Line content as a String (without separator)
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.lines.get(line).map(|l| l.iter().collect())
    }

    /// Length of a specific line in scalar values (0 when out of range)
    pub fn line_length(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, Vec::len)
    }

    /// Total length in scalar values, counting one per separator
    pub fn len_chars(&self) -> usize {
        self.lines.iter().map(Vec::len).sum::<usize>() + self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Position just after the final scalar value
    pub fn end_position(&self) -> Position {
        let last = self.last_line();
        Position::new(last, self.line_length(last))
    }

    /// Clamp a position into `[0, line_count-1]` x `[0, line_length]`
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        Position::new(line, pos.column.min(self.line_length(line)))
    }

    /// Get character at position, None if out of bounds (separators excluded)
    pub fn char_at(&self, pos: Position) -> Option<char> {
        self.lines.get(pos.line)?.get(pos.column).copied()
    }

    /// Scalar value following `pos` in document order; the separator at a
    /// line end is reported as `'\n'`. None at the end of the buffer.
    pub fn char_after(&self, pos: Position) -> Option<char> {
        let line = self.lines.get(pos.line)?;
        match line.get(pos.column) {
            Some(&ch) => Some(ch),
            None if pos.line < self.last_line() => Some(LINE_SEPARATOR),
            None => None,
        }
    }

    /// Scalar value preceding `pos` in document order; None at the start.
    pub fn char_before(&self, pos: Position) -> Option<char> {
        if pos.column > 0 {
            self.lines.get(pos.line)?.get(pos.column - 1).copied()
        } else if pos.line > 0 {
            Some(LINE_SEPARATOR)
        } else {
            None
        }
    }

    /// Step one scalar value forward, crossing line ends
    pub fn next_position(&self, pos: Position) -> Position {
        if pos.column < self.line_length(pos.line) {
            Position::new(pos.line, pos.column + 1)
        } else if pos.line < self.last_line() {
            Position::new(pos.line + 1, 0)
        } else {
            pos
        }
    }

    /// Step one scalar value backward, crossing line starts
    pub fn prev_position(&self, pos: Position) -> Position {
        if pos.column > 0 {
            Position::new(pos.line, pos.column - 1)
        } else if pos.line > 0 {
            Position::new(pos.line - 1, self.line_length(pos.line - 1))
        } else {
            pos
        }
    }

    /// Text between two positions in document order (arguments may be in either order)
    pub fn slice(&self, a: Position, b: Position) -> String {
        let (from, to) = ordered(self.clamp(a), self.clamp(b));
        if from.line == to.line {
            return self.lines[from.line][from.column..to.column].iter().collect();
        }

        let mut text = String::new();
        text.extend(self.lines[from.line][from.column..].iter());
        for line in &self.lines[from.line + 1..to.line] {
            text.push(LINE_SEPARATOR);
            text.extend(line.iter());
        }
        text.push(LINE_SEPARATOR);
        text.extend(self.lines[to.line][..to.column].iter());
        text
    }

    /// Number of scalar values between two positions, separators included
    pub fn distance(&self, a: Position, b: Position) -> usize {
        let (from, to) = ordered(self.clamp(a), self.clamp(b));
        if from.line == to.line {
            return to.column - from.column;
        }
        let middle: usize = self.lines[from.line + 1..to.line]
            .iter()
            .map(|l| l.len() + 1)
            .sum();
        (self.line_length(from.line) - from.column) + 1 + middle + to.column
    }

    /// Insert text at a position and return the position just after it.
    ///
    /// Text without separators is spliced into the line. Otherwise the line
    /// is split: the head keeps the prefix plus the first inserted segment,
    /// middle segments become new lines, and the last segment is joined
    /// with the original suffix.
    pub fn insert(&mut self, pos: Position, text: &str) -> Position {
        let pos = self.clamp(pos);
        let mut segments = split_lines(text).into_iter();
        let first = segments.next().unwrap_or_default();
        let mut rest: Vec<Line> = segments.collect();
        let added = rest.len();

        let head = &mut self.lines[pos.line];
        let tail = head.split_off(pos.column);
        head.extend(first);

        match rest.last_mut() {
            None => {
                let end = Position::new(pos.line, head.len());
                head.extend(tail);
                end
            }
            Some(last) => {
                let end = Position::new(pos.line + added, last.len());
                last.extend(tail);
                let at = pos.line + 1;
                self.lines.splice(at..at, rest);
                end
            }
        }
    }

    /// Remove everything between two positions (either order), merging lines
    /// when the range spans several. Returns the removed text.
    pub fn delete_range(&mut self, a: Position, b: Position) -> String {
        let (from, to) = ordered(self.clamp(a), self.clamp(b));
        if from == to {
            return String::new();
        }

        let removed = self.slice(from, to);
        if from.line == to.line {
            self.lines[from.line].drain(from.column..to.column);
        } else {
            let tail = self.lines[to.line].split_off(to.column);
            let head = &mut self.lines[from.line];
            head.truncate(from.column);
            head.extend(tail);
            self.lines.drain(from.line + 1..=to.line);
        }
        removed
    }

    /// Copy of lines `start..end` (clamped)
    pub fn lines_range(&self, start: usize, end: usize) -> Vec<Line> {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        self.lines[start..end].to_vec()
    }

    /// Replace `count` lines starting at `start` with `replacement`.
    ///
    /// Used by history replay. If the result would be empty, a single empty
    /// line is kept so the buffer invariant holds.
    pub fn replace_lines(&mut self, start: usize, count: usize, replacement: Vec<Line>) {
        let start = start.min(self.lines.len());
        let end = (start + count).min(self.lines.len());
        self.lines.splice(start..end, replacement);
        if self.lines.is_empty() {
            self.lines.push(Line::new());
        }
    }

    /// Replace the whole content
    pub fn set_lines(&mut self, lines: Vec<Line>) {
        self.lines = if lines.is_empty() { vec![Line::new()] } else { lines };
    }

    /// Display cells occupied by the first `column` scalars of a line.
    ///
    /// This is a presentation query; editing never indexes by display column.
    pub fn display_width(&self, line: usize, column: usize, tab_width: usize) -> usize {
        self.line(line)
            .map_or(0, |chars| char_col_to_visual_col(chars, column, tab_width))
    }

    /// Scalar column that covers display cell `width` on a line
    pub fn column_at_display_width(&self, line: usize, width: usize, tab_width: usize) -> usize {
        self.line(line)
            .map_or(0, |chars| visual_col_to_char_col(chars, width, tab_width))
    }
}

impl std::fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content())
    }
}

fn ordered(a: Position, b: Position) -> (Position, Position) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
