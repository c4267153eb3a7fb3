//! Find next/previous across the line buffer with a single wrap-around.

use crate::util::text::is_word_char;

use super::buffer::LineBuffer;
use super::cursor::Position;

/// Matching options for find and replace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub match_case: bool,
    pub match_whole_word: bool,
}

impl FindOptions {
    pub fn case_sensitive() -> Self {
        Self {
            match_case: true,
            match_whole_word: false,
        }
    }
}

/// A match location plus whether the scan had to wrap past the buffer edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindResult {
    pub start: Position,
    pub end: Position,
    /// True when the match was only found after wrapping around, i.e. there
    /// are no more matches below (find next) or above (find previous).
    pub gave_full_turn: bool,
}

fn chars_eq(a: char, b: char, match_case: bool) -> bool {
    a == b || (!match_case && a.to_lowercase().eq(b.to_lowercase()))
}

/// Whether `term` matches `line` at column `at`
fn matches_at(line: &[char], at: usize, term: &[char], options: FindOptions) -> bool {
    let end = at + term.len();
    if end > line.len() {
        return false;
    }
    let hit = line[at..end]
        .iter()
        .zip(term)
        .all(|(&a, &b)| chars_eq(a, b, options.match_case));
    if !hit {
        return false;
    }
    if options.match_whole_word {
        let before_ok = at == 0 || !is_word_char(line[at - 1]);
        let after_ok = end == line.len() || !is_word_char(line[end]);
        return before_ok && after_ok;
    }
    true
}

/// Columns on one line where `term` starts, within `[lo, hi)` start columns
fn starts_in(line: &[char], lo: usize, hi: usize, term: &[char], options: FindOptions) -> Vec<usize> {
    (lo..hi.min(line.len() + 1))
        .filter(|&col| matches_at(line, col, term, options))
        .collect()
}

fn result(line: usize, col: usize, len: usize, gave_full_turn: bool) -> FindResult {
    FindResult {
        start: Position::new(line, col),
        end: Position::new(line, col + len),
        gave_full_turn,
    }
}

/// Find the first match starting at or after `from`, wrapping to the top once.
///
/// Matches never span a line separator; a term containing one finds nothing.
pub fn find_next(
    buffer: &LineBuffer,
    term: &str,
    from: Position,
    options: FindOptions,
) -> Option<FindResult> {
    let term: Vec<char> = term.chars().collect();
    if term.is_empty() || term.contains(&'\n') {
        return None;
    }
    let from = buffer.clamp(from);
    let lines = buffer.lines();

    // From the cursor down to the end of the buffer
    for (idx, line) in lines.iter().enumerate().skip(from.line) {
        let lo = if idx == from.line { from.column } else { 0 };
        if let Some(&col) = starts_in(line, lo, usize::MAX, &term, options).first() {
            return Some(result(idx, col, term.len(), false));
        }
    }

    // Wrapped: from the top back to the cursor
    for (idx, line) in lines.iter().enumerate().take(from.line + 1) {
        let hi = if idx == from.line { from.column } else { usize::MAX };
        if let Some(&col) = starts_in(line, 0, hi, &term, options).first() {
            return Some(result(idx, col, term.len(), true));
        }
    }

    None
}

/// Find the last match ending at or before `from`, wrapping to the bottom once.
pub fn find_previous(
    buffer: &LineBuffer,
    term: &str,
    from: Position,
    options: FindOptions,
) -> Option<FindResult> {
    let term: Vec<char> = term.chars().collect();
    if term.is_empty() || term.contains(&'\n') {
        return None;
    }
    let from = buffer.clamp(from);
    let lines = buffer.lines();

    // From the cursor up to the start of the buffer
    for idx in (0..=from.line).rev() {
        let line = &lines[idx];
        let found = if idx == from.line {
            // the whole match must lie before the cursor
            let hi = (from.column + 1).saturating_sub(term.len());
            starts_in(line, 0, hi, &term, options)
        } else {
            starts_in(line, 0, usize::MAX, &term, options)
        };
        if let Some(&col) = found.last() {
            return Some(result(idx, col, term.len(), false));
        }
    }

    // Wrapped: from the bottom back to the cursor
    for idx in (from.line..lines.len()).rev() {
        let line = &lines[idx];
        let lo = if idx == from.line {
            (from.column + 1).saturating_sub(term.len())
        } else {
            0
        };
        if let Some(&col) = starts_in(line, lo, usize::MAX, &term, options).last() {
            return Some(result(idx, col, term.len(), true));
        }
    }

    None
}

/// Every match in document order, non-overlapping
pub fn find_all(buffer: &LineBuffer, term: &str, options: FindOptions) -> Vec<FindResult> {
    let term: Vec<char> = term.chars().collect();
    if term.is_empty() || term.contains(&'\n') {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for (idx, line) in buffer.lines().iter().enumerate() {
        let mut col = 0;
        while col + term.len() <= line.len() {
            if matches_at(line, col, &term, options) {
                matches.push(result(idx, col, term.len(), false));
                col += term.len();
            } else {
                col += 1;
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(text: &str) -> LineBuffer {
        LineBuffer::from_text(text)
    }

    #[test]
    fn test_find_next_same_line() {
        let b = buf("foo bar foo");
        let r = find_next(&b, "foo", Position::new(0, 1), FindOptions::default()).unwrap();
        assert_eq!(r.start, Position::new(0, 8));
        assert_eq!(r.end, Position::new(0, 11));
        assert!(!r.gave_full_turn);
    }

    #[test]
    fn test_find_next_wraps_once() {
        let b = buf("needle\nhay\nhay");
        let r = find_next(&b, "needle", Position::new(1, 0), FindOptions::default()).unwrap();
        assert_eq!(r.start, Position::zero());
        assert!(r.gave_full_turn);
    }

    #[test]
    fn test_find_next_no_match() {
        let b = buf("abc\ndef");
        assert!(find_next(&b, "xyz", Position::zero(), FindOptions::default()).is_none());
        assert!(find_next(&b, "", Position::zero(), FindOptions::default()).is_none());
        assert!(find_next(&b, "c\nd", Position::zero(), FindOptions::default()).is_none());
    }

    #[test]
    fn test_find_previous_and_wrap() {
        let b = buf("one two\nthree two");
        let r = find_previous(&b, "two", Position::new(1, 6), FindOptions::default()).unwrap();
        assert_eq!(r.start, Position::new(0, 4));
        assert!(!r.gave_full_turn);

        let r = find_previous(&b, "two", Position::new(0, 2), FindOptions::default()).unwrap();
        assert_eq!(r.start, Position::new(1, 6));
        assert!(r.gave_full_turn);
    }

    #[test]
    fn test_find_previous_match_ending_at_cursor() {
        let b = buf("abc abc");
        let r = find_previous(&b, "abc", Position::new(0, 7), FindOptions::default()).unwrap();
        assert_eq!(r.start, Position::new(0, 4));
    }

    #[test]
    fn test_match_case() {
        let b = buf("Hello hello");
        let r = find_next(&b, "hello", Position::zero(), FindOptions::default()).unwrap();
        assert_eq!(r.start.column, 0);
        let r = find_next(&b, "hello", Position::zero(), FindOptions::case_sensitive()).unwrap();
        assert_eq!(r.start.column, 6);
    }

    #[test]
    fn test_whole_word() {
        let b = buf("cat concat cat_x cat");
        let options = FindOptions {
            match_case: true,
            match_whole_word: true,
        };
        let all = find_all(&b, "cat", options);
        let cols: Vec<usize> = all.iter().map(|m| m.start.column).collect();
        assert_eq!(cols, vec![0, 17]);
    }
}
