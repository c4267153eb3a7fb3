//! Find and replace tests

mod common;

use common::{cursor_of, test_editor, test_editor_with};
use textview_core::editable::{EditConstraints, FindOptions, Position, TextEditMsg};
use textview_core::update::update_text_edit;

const TEXT: &str = "The cat sat.\nA Cat and a dog.\ncatalog";

#[test]
fn test_find_next_selects_match() {
    let mut editor = test_editor(TEXT, 0, 0);
    let found = editor.find_next("cat", FindOptions::default()).unwrap();

    assert_eq!(found.start, Position::new(0, 4));
    assert_eq!(found.end, Position::new(0, 7));
    assert!(!found.gave_full_turn);
    assert_eq!(editor.selected_text(), "cat");
    assert_eq!(cursor_of(&editor), (0, 7));
}

#[test]
fn test_find_next_walks_matches_then_wraps() {
    let mut editor = test_editor(TEXT, 0, 0);
    let mut hits = Vec::new();
    for _ in 0..4 {
        let found = editor.find_next("cat", FindOptions::default()).unwrap();
        hits.push((found.start.line, found.start.column, found.gave_full_turn));
    }
    assert_eq!(
        hits,
        vec![(0, 4, false), (1, 2, false), (2, 0, false), (0, 4, true)]
    );
}

#[test]
fn test_find_match_case() {
    let mut editor = test_editor(TEXT, 0, 8);
    let found = editor.find_next("Cat", FindOptions::case_sensitive()).unwrap();
    assert_eq!(found.start, Position::new(1, 2));
}

#[test]
fn test_find_whole_word_skips_partial() {
    let mut editor = test_editor(TEXT, 1, 3);
    let options = FindOptions {
        match_case: false,
        match_whole_word: true,
    };
    let found = editor.find_next("cat", options).unwrap();
    assert_eq!(found.start, Position::new(0, 4));
    assert!(found.gave_full_turn);
}

#[test]
fn test_find_previous_walks_backwards() {
    let mut editor = test_editor(TEXT, 2, 7);
    let first = editor.find_previous("cat", FindOptions::default()).unwrap();
    assert_eq!(first.start, Position::new(2, 0));
    assert_eq!(cursor_of(&editor), (2, 0));

    let second = editor.find_previous("cat", FindOptions::default()).unwrap();
    assert_eq!(second.start, Position::new(1, 2));
    assert!(!second.gave_full_turn);
}

#[test]
fn test_find_previous_wraps_to_bottom() {
    let mut editor = test_editor(TEXT, 0, 2);
    let found = editor.find_previous("cat", FindOptions::default()).unwrap();
    assert_eq!(found.start, Position::new(2, 0));
    assert!(found.gave_full_turn);
}

#[test]
fn test_find_missing_term() {
    let mut editor = test_editor(TEXT, 0, 0);
    assert!(editor.find_next("zebra", FindOptions::default()).is_none());
    assert!(editor.find_next("", FindOptions::default()).is_none());
    assert!(!editor.has_selection());
}

#[test]
fn test_find_works_read_only() {
    let mut editor = test_editor_with(TEXT, EditConstraints::read_only());
    assert!(editor.find_next("dog", FindOptions::default()).is_some());
    assert_eq!(editor.selected_text(), "dog");
}

#[test]
fn test_replace_next_and_undo() {
    let mut editor = test_editor(TEXT, 0, 0);
    let msg = TextEditMsg::ReplaceNext {
        term: "cat".into(),
        replacement: "bird".into(),
        options: FindOptions::default(),
    };
    assert!(update_text_edit(&mut editor, msg.clone()));
    assert!(update_text_edit(&mut editor, msg));
    assert_eq!(editor.text(), "The bird sat.\nA bird and a dog.\ncatalog");

    editor.undo();
    assert_eq!(editor.text(), "The bird sat.\nA Cat and a dog.\ncatalog");
}

#[test]
fn test_replace_all_whole_word() {
    let mut editor = test_editor(TEXT, 1, 0);
    let options = FindOptions {
        match_case: false,
        match_whole_word: true,
    };
    let count = editor.replace_all("cat", "dog", options);
    assert_eq!(count, 2);
    assert_eq!(editor.text(), "The dog sat.\nA dog and a dog.\ncatalog");
    assert_eq!(cursor_of(&editor), (0, 4));
    assert!(editor.undo());
    assert_eq!(editor.text(), TEXT);
}

#[test]
fn test_replace_all_with_multiline_replacement() {
    let mut editor = test_editor("a,b,c", 0, 0);
    let count = editor.replace_all(",", "\n", FindOptions::default());
    assert_eq!(count, 2);
    assert_eq!(editor.text(), "a\nb\nc");
    editor.undo();
    assert_eq!(editor.text(), "a,b,c");
}

#[test]
fn test_replace_rejected_when_read_only() {
    let mut editor = test_editor_with(TEXT, EditConstraints::read_only());
    assert_eq!(editor.replace_all("cat", "x", FindOptions::default()), 0);
    assert!(!editor.replace_next("cat", "x", FindOptions::default()));
    assert_eq!(editor.text(), TEXT);
}
