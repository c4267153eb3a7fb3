//! Text editing update handler.
//!
//! Routes a [`TextEditMsg`] to the matching [`TextEditor`] operation.

use crate::editable::{MoveTarget, TextEditMsg, TextEditor};

/// Apply a TextEditMsg to an editor.
/// Returns true if the message was handled.
pub fn apply_text_edit_msg(editor: &mut TextEditor, msg: &TextEditMsg) -> bool {
    // Vertical moves and newlines are left to the caller in single-line views
    if msg.requires_multiline() && !editor.constraints.allow_multiline {
        return false;
    }

    match msg {
        // === Movement ===
        TextEditMsg::Move(target) => apply_move(editor, *target, false),
        TextEditMsg::MoveWithSelection(target) => apply_move(editor, *target, true),

        // === Insertion ===
        TextEditMsg::InsertChar(ch) => editor.insert_char(*ch),
        TextEditMsg::InsertText(text) => editor.insert_text(text),
        TextEditMsg::InsertNewline => editor.insert_newline(),
        TextEditMsg::ToggleOverwrite => {
            let overwrite = !editor.overwrite();
            editor.set_overwrite(overwrite);
            true
        }

        // === Deletion ===
        TextEditMsg::DeleteBackward => editor.delete_char_left(),
        TextEditMsg::DeleteForward => editor.delete_char_right(),
        TextEditMsg::DeleteWordBackward => editor.delete_word_backward(),
        TextEditMsg::DeleteWordForward => editor.delete_word_forward(),
        TextEditMsg::KillToEndOfLine => editor.kill_to_end_of_line(),
        TextEditMsg::KillToStartOfLine => editor.kill_to_start_of_line(),
        TextEditMsg::DeleteAll => editor.delete_all(),

        // === Selection ===
        TextEditMsg::SelectAll => {
            editor.select_all();
            true
        }
        TextEditMsg::SelectWord => {
            editor.select_word();
            true
        }
        TextEditMsg::CollapseSelection => {
            editor.collapse_selection();
            true
        }

        // === Clipboard ===
        TextEditMsg::Copy => editor.copy(),
        TextEditMsg::Cut => editor.cut(),
        TextEditMsg::Paste => editor.paste(),

        // === Undo/Redo ===
        TextEditMsg::Undo => editor.undo(),
        TextEditMsg::Redo => editor.redo(),

        // === Indentation ===
        TextEditMsg::Tab => editor.tab(),
        TextEditMsg::BackTab => editor.back_tab(),

        // === Find / replace ===
        TextEditMsg::FindNext { term, options } => editor.find_next(term, *options).is_some(),
        TextEditMsg::FindPrevious { term, options } => {
            editor.find_previous(term, *options).is_some()
        }
        TextEditMsg::ReplaceNext {
            term,
            replacement,
            options,
        } => editor.replace_next(term, replacement, *options),
        TextEditMsg::ReplaceAll {
            term,
            replacement,
            options,
        } => editor.replace_all(term, replacement, *options) > 0,
    }
}

fn apply_move(editor: &mut TextEditor, target: MoveTarget, extend_selection: bool) -> bool {
    match target {
        MoveTarget::Left => editor.move_left(extend_selection),
        MoveTarget::Right => editor.move_right(extend_selection),
        MoveTarget::Up => editor.move_up(extend_selection),
        MoveTarget::Down => editor.move_down(extend_selection),
        MoveTarget::LineStart => editor.move_line_start(extend_selection),
        MoveTarget::LineEnd => editor.move_line_end(extend_selection),
        MoveTarget::WordBackward => editor.move_word_backward(extend_selection),
        MoveTarget::WordForward => editor.move_word_forward(extend_selection),
        MoveTarget::DocumentStart => editor.move_document_start(extend_selection),
        MoveTarget::DocumentEnd => editor.move_document_end(extend_selection),
        MoveTarget::PageUp(lines) => editor.move_page_up(lines, extend_selection),
        MoveTarget::PageDown(lines) => editor.move_page_down(lines, extend_selection),
    }
    true
}
