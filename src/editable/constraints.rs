//! Edit constraints for the editing core.
//!
//! Constraints decide which operations an editor accepts. Disallowed
//! operations are ignored and reported as "not handled" so callers can
//! forward the input elsewhere.

use crate::util::text::TABULATOR_WIDTH;

/// Constraints that limit what operations are allowed on an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConstraints {
    /// Reject every buffer mutation (copy and navigation still work)
    pub read_only: bool,

    /// Allow more than one line in the buffer
    pub allow_multiline: bool,

    /// Enter inserts a line break (vs. being left to the caller)
    pub allows_return: bool,

    /// Tab/BackTab edit the text (vs. being left to the caller, e.g. for focus)
    pub allows_tab: bool,

    /// Width of one tab unit; 0 disables tab insertion but not BackTab
    pub tab_width: usize,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::editor()
    }
}

impl EditConstraints {
    /// Full multi-line editor
    pub fn editor() -> Self {
        Self {
            read_only: false,
            allow_multiline: true,
            allows_return: true,
            allows_tab: true,
            tab_width: TABULATOR_WIDTH,
        }
    }

    /// Single-line input: no line breaks, Tab moves focus
    pub fn single_line() -> Self {
        Self {
            read_only: false,
            allow_multiline: false,
            allows_return: false,
            allows_tab: false,
            tab_width: TABULATOR_WIDTH,
        }
    }

    /// Read-only viewer
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::editor()
        }
    }

    /// Check if inserted text is acceptable under these constraints
    pub fn accepts_text(&self, text: &str) -> bool {
        self.allow_multiline || !text.contains('\n')
    }

    /// Enter inserts a line break
    pub fn accepts_return(&self) -> bool {
        !self.read_only && self.allows_return && self.allow_multiline
    }

    /// Tab inserts a tab unit
    pub fn accepts_tab(&self) -> bool {
        !self.read_only && self.allows_tab && self.tab_width > 0
    }

    /// BackTab removes a tab unit
    pub fn accepts_back_tab(&self) -> bool {
        !self.read_only && self.allows_tab
    }
}
