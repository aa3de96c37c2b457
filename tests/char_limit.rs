//! Character limit: every mutation leaves at most `max` characters

use safe_edit::editable::{MoveTarget, TextEditMsg};
use safe_edit::field::{EditToggleField, FieldOptions};
use safe_edit::theme::Theme;

fn editable_field(max: Option<usize>, text: &str) -> EditToggleField {
    let mut f =
        EditToggleField::new(FieldOptions::new().max_characters(max).text(text), &Theme::default())
            .unwrap();
    f.toggle_edit_mode();
    f.handle_edit(&TextEditMsg::Move(MoveTarget::End));
    f
}

#[test]
fn test_initial_text_is_truncated() {
    let f = editable_field(Some(4), "abcdefgh");
    assert_eq!(f.text(), "abcd");
}

#[test]
fn test_typing_stops_at_limit() {
    let mut f = editable_field(Some(8), "");
    for ch in "hello world".chars() {
        f.handle_edit(&TextEditMsg::InsertChar(ch));
    }
    assert_eq!(f.text(), "hello wo");
}

#[test]
fn test_insert_in_middle_drops_tail() {
    let mut f = editable_field(Some(5), "abcde");
    f.handle_edit(&TextEditMsg::Move(MoveTarget::Start));
    f.handle_edit(&TextEditMsg::InsertChar('X'));
    assert_eq!(f.text(), "Xabcd");
    assert_eq!(f.entry().editable.cursor(), 1);
}

#[test]
fn test_paste_is_truncated() {
    let mut f = editable_field(Some(6), "ab");
    f.handle_edit(&TextEditMsg::Paste("0123456789".into()));
    assert_eq!(f.text(), "ab0123");
    assert!(f.entry().editable.cursor() <= 6);
}

#[test]
fn test_zero_limit_keeps_field_empty() {
    let mut f = editable_field(Some(0), "anything");
    assert_eq!(f.text(), "");
    f.handle_edit(&TextEditMsg::InsertChar('a'));
    assert_eq!(f.text(), "");
}

#[test]
fn test_unlimited() {
    let mut f = editable_field(None, "");
    let long = "x".repeat(500);
    f.handle_edit(&TextEditMsg::InsertText(long.clone()));
    assert_eq!(f.text(), long);
}

#[test]
fn test_limit_counts_characters_not_bytes() {
    let mut f = editable_field(Some(3), "");
    f.handle_edit(&TextEditMsg::InsertText("héllo".into()));
    assert_eq!(f.text(), "hél");
}

#[test]
fn test_lowering_limit_truncates_immediately() {
    let mut f = editable_field(Some(10), "abcdefgh");
    assert!(f.set_max_characters(Some(3)));
    assert_eq!(f.text(), "abc");
    assert_eq!(f.max_characters(), Some(3));

    assert!(!f.set_max_characters(None));
    f.handle_edit(&TextEditMsg::InsertText("defgh".into()));
    assert_eq!(f.text(), "abcdefgh");
}

#[test]
fn test_set_text_respects_limit() {
    let mut f = editable_field(Some(2), "");
    f.set_text("xyz");
    assert_eq!(f.text(), "xy");
}

#[test]
fn test_mixed_edit_sequence_never_exceeds_limit() {
    let max = 5;
    let mut f = editable_field(Some(max), "");
    let script = [
        TextEditMsg::InsertText("abc".into()),
        TextEditMsg::Move(MoveTarget::Left),
        TextEditMsg::InsertText("123456".into()),
        TextEditMsg::DeleteBackward,
        TextEditMsg::SelectAll,
        TextEditMsg::Paste("pasted text".into()),
        TextEditMsg::Move(MoveTarget::Start),
        TextEditMsg::InsertChar('z'),
        TextEditMsg::MoveWithSelection(MoveTarget::WordRight),
        TextEditMsg::Cut,
        TextEditMsg::InsertText("éééééééé".into()),
        TextEditMsg::DeleteWordBackward,
        TextEditMsg::InsertChar('q'),
    ];

    for (step, msg) in script.iter().cycle().take(script.len() * 4).enumerate() {
        f.handle_edit(msg);
        let len = f.text().chars().count();
        assert!(len <= max, "step {}: {:?} left {} chars", step, msg, len);
        assert!(f.entry().editable.cursor() <= len);
    }
}

#[test]
fn test_limit_lowered_through_constraints_applies_on_next_edit() {
    let mut f = editable_field(None, "abcdefghij");
    f.entry_mut().editable.constraints.max_length = Some(2);

    assert!(f.handle_edit(&TextEditMsg::DeleteBackward));
    assert_eq!(f.text(), "ab");
    assert_eq!(f.entry().editable.cursor(), 2);
}

#[test]
fn test_limit_lowered_through_constraints_applies_on_noop_delete() {
    let mut f = editable_field(None, "abcdefghij");
    f.handle_edit(&TextEditMsg::Move(MoveTarget::Start));
    f.entry_mut().editable.constraints.max_length = Some(3);

    // Nothing before the cursor, but the text still shrinks
    assert!(f.handle_edit(&TextEditMsg::DeleteBackward));
    assert_eq!(f.text(), "abc");
}
