//! Utility functions for text editing

use unicode_width::UnicodeWidthChar;

/// Word characters: letters, digits (any script) and underscore
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Character class used by word navigation and word deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters (line separators count as whitespace)
    Whitespace,
    /// Alphanumeric characters (word characters)
    WordChar,
    /// Punctuation and symbols, grouped into their own runs
    Punctuation,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_word_char(ch) {
        CharType::WordChar
    } else {
        CharType::Punctuation
    }
}

/// Default tab width for visual column calculations
pub const TABULATOR_WIDTH: usize = 4;

/// Display width of a single scalar at the given visual column.
///
/// Tabs advance to the next tab stop; a tab width of zero renders tabs as one cell.
pub fn char_display_width(ch: char, visual_col: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        if tab_width == 0 {
            1
        } else {
            tab_width - (visual_col % tab_width)
        }
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Convert a visual column (screen position) to a character column.
///
/// A visual column that falls inside a wide scalar or a tab maps to that scalar.
pub fn visual_col_to_char_col(chars: &[char], visual_col: usize, tab_width: usize) -> usize {
    let mut current_visual = 0;

    for (char_col, &ch) in chars.iter().enumerate() {
        let width = char_display_width(ch, current_visual, tab_width);
        if current_visual + width > visual_col {
            return char_col;
        }
        current_visual += width;
    }

    chars.len()
}

/// Convert a character column to visual column (screen position).
pub fn char_col_to_visual_col(chars: &[char], char_col: usize, tab_width: usize) -> usize {
    let mut visual_col = 0;

    for &ch in chars.iter().take(char_col) {
        visual_col += char_display_width(ch, visual_col, tab_width);
    }

    visual_col
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_char_type() {
        assert_eq!(char_type(' '), CharType::Whitespace);
        assert_eq!(char_type('\t'), CharType::Whitespace);
        assert_eq!(char_type('a'), CharType::WordChar);
        assert_eq!(char_type('_'), CharType::WordChar);
        assert_eq!(char_type('é'), CharType::WordChar);
        assert_eq!(char_type('7'), CharType::WordChar);
        assert_eq!(char_type('.'), CharType::Punctuation);
        assert_eq!(char_type('→'), CharType::Punctuation);
    }

    #[test]
    fn test_char_col_to_visual_col_with_tabs() {
        let line = chars("\tab");
        assert_eq!(char_col_to_visual_col(&line, 0, 4), 0);
        assert_eq!(char_col_to_visual_col(&line, 1, 4), 4);
        assert_eq!(char_col_to_visual_col(&line, 3, 4), 6);

        let line = chars("ab\tc");
        assert_eq!(char_col_to_visual_col(&line, 3, 4), 4);
        assert_eq!(char_col_to_visual_col(&line, 3, 8), 8);
    }

    #[test]
    fn test_wide_and_combining() {
        // CJK is two cells wide, the combining acute accent is zero
        let line = chars("日本e\u{301}x");
        assert_eq!(char_col_to_visual_col(&line, 1, 4), 2);
        assert_eq!(char_col_to_visual_col(&line, 2, 4), 4);
        assert_eq!(char_col_to_visual_col(&line, 4, 4), 5);
        assert_eq!(char_col_to_visual_col(&line, 5, 4), 6);
    }

    #[test]
    fn test_visual_col_to_char_col() {
        let line = chars("日本x");
        assert_eq!(visual_col_to_char_col(&line, 0, 4), 0);
        assert_eq!(visual_col_to_char_col(&line, 1, 4), 0);
        assert_eq!(visual_col_to_char_col(&line, 2, 4), 1);
        assert_eq!(visual_col_to_char_col(&line, 4, 4), 2);
        assert_eq!(visual_col_to_char_col(&line, 99, 4), 3);

        let line = chars("\tx");
        assert_eq!(visual_col_to_char_col(&line, 3, 4), 0);
        assert_eq!(visual_col_to_char_col(&line, 4, 4), 1);
    }

    #[test]
    fn test_zero_tab_width() {
        let line = chars("\t\tx");
        assert_eq!(char_col_to_visual_col(&line, 2, 0), 2);
    }
}
