//! Cursor and position types for the editing core.

/// A position in the text buffer (line and column, both 0-indexed).
///
/// Columns count Unicode scalar values, not bytes or display cells.
/// Ordering is document order: line first, then column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Build a position from unchecked, possibly negative UI coordinates.
    /// Negative components saturate to zero; the upper bound is clamped
    /// against the buffer when the position is assigned.
    pub fn saturating(line: isize, column: isize) -> Self {
        Self {
            line: line.max(0) as usize,
            column: column.max(0) as usize,
        }
    }
}

/// A cursor in the text buffer with optional desired column for vertical movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
    /// Desired column for vertical movement.
    /// When moving up/down through lines of varying length, this preserves
    /// the "intended" column position even when a shorter line is traversed.
    pub desired_column: Option<usize>,
}

impl Cursor {
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            desired_column: None,
        }
    }

    pub fn at_position(pos: Position) -> Self {
        Self::new(pos.line, pos.column)
    }

    pub const fn to_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Clear desired column (call after horizontal movement)
    pub fn clear_desired_column(&mut self) {
        self.desired_column = None;
    }

    /// Set desired column to current column (call before vertical movement)
    pub fn set_desired_column(&mut self) {
        if self.desired_column.is_none() {
            self.desired_column = Some(self.column);
        }
    }

    /// Get the effective column for positioning (uses desired_column if set)
    pub fn effective_column(&self) -> usize {
        self.desired_column.unwrap_or(self.column)
    }
}
