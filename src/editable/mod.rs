//! Editing core of a multi-line text view.
//!
//! # Architecture
//!
//! - [`LineBuffer`]: the logical lines, each a vector of Unicode scalar values
//! - [`Position`] / [`Cursor`] / [`Selection`]: clamped coordinates and the
//!   directionless anchor/head pair
//! - [`KillRing`] over a [`ClipboardService`]: register access with kill-ring
//!   append/replace rules
//! - [`HistoryLog`]: line-range snapshots driving undo/redo and dirty tracking
//! - [`TextEditor`]: owns all of the above and exposes the editing operations
//! - [`TextEditMsg`]: key-neutral message type routed by the update layer
//!
//! # Example
//!
//! ```
//! use textview_core::editable::{EditConstraints, SharedClipboard, TextEditor};
//!
//! let mut editor = TextEditor::new("hello", EditConstraints::editor(), SharedClipboard::new());
//! editor.move_document_end(false);
//! editor.insert_text(" world");
//! assert_eq!(editor.text(), "hello world");
//!
//! editor.undo();
//! assert_eq!(editor.text(), "hello");
//! ```

mod buffer;
mod clipboard;
mod constraints;
mod cursor;
mod editing;
mod editor;
mod history;
mod messages;
mod movement;
mod search;
mod selection;

pub use buffer::{join_lines, split_lines, Line, LineBuffer, LINE_SEPARATOR};
pub use clipboard::{
    ClipboardError, ClipboardService, KillDirection, KillRing, KillState, SharedClipboard,
    SystemClipboard,
};
pub use constraints::EditConstraints;
pub use cursor::{Cursor, Position};
pub use editor::TextEditor;
pub use history::{HistoryLog, HistoryRecord, PendingEdit, RecordKind};
pub use messages::{MoveTarget, TextEditMsg};
pub use search::{find_all, find_next, find_previous, FindOptions, FindResult};
pub use selection::Selection;
