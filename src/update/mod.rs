//! Update functions: messages in, editor state transformed.
//!
//! All state transformations requested by the input layer flow through here.

mod text_edit;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, trace, Level};

use crate::editable::{TextEditMsg, TextEditor};

pub use text_edit::apply_text_edit_msg;

/// Main update function. Returns whether the message was handled; an
/// unhandled message should be forwarded to the enclosing view.
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update_text_edit(editor: &mut TextEditor, msg: TextEditMsg) -> bool {
    #[cfg(debug_assertions)]
    {
        update_traced(editor, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        apply_text_edit_msg(editor, &msg)
    }
}

#[cfg(debug_assertions)]
fn update_traced(editor: &mut TextEditor, msg: TextEditMsg) -> bool {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SelectionSnapshot::from_editor(editor);
    trace!(target: "message", msg = %msg_name, "processing");

    let handled = apply_text_edit_msg(editor, &msg);

    let after = SelectionSnapshot::from_editor(editor);
    if let Some(diff) = before.diff(&after) {
        trace!(target: "selection", %diff, "state changed");
    }
    if !handled {
        debug!(target: "message", msg = %msg_name, "not handled");
    }

    editor.assert_invariants_with_context(&msg_name);

    handled
}
