//! Selection types for the editing core.

use std::ops::RangeInclusive;

use super::cursor::Position;

/// A directionless text selection: an anchor (fixed point) and a head
/// (the cursor). The anchor may precede or follow the head; every derived
/// value goes through [`Selection::ordered`] so direction never matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: Position,
    /// Where the cursor is (moving point)
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// `(min, max)` of anchor and head in document order
    pub fn ordered(&self) -> (Position, Position) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    pub fn start(&self) -> Position {
        self.ordered().0
    }

    pub fn end(&self) -> Position {
        self.ordered().1
    }

    /// True when the selection touches more than one line
    pub fn spans_lines(&self) -> bool {
        self.anchor.line != self.head.line
    }

    /// Lines touched by the selection, inclusive
    pub fn line_range(&self) -> RangeInclusive<usize> {
        let (start, end) = self.ordered();
        start.line..=end.line
    }

    /// Collapse selection to head position
    pub fn collapse(&mut self) {
        self.anchor = self.head;
    }
}
