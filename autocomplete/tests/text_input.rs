use autocomplete::{InputView, Key, LineInput, Modifiers, TextEditResult, TextInput, TextInputProps};

fn typed(text: &str) -> LineInput {
    let mut input = LineInput::new("");
    input.render(&TextInputProps::default());
    for c in text.chars() {
        input.handle_key(Key::Char(c), Modifiers::new());
    }
    input
}

fn press(input: &mut LineInput, key: Key) -> TextEditResult {
    input.handle_key(key, Modifiers::new())
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_typing_appends_at_cursor() {
    let mut input = typed("hllo");
    press(&mut input, Key::Home);
    press(&mut input, Key::Right);
    assert_eq!(press(&mut input, Key::Char('e')), TextEditResult::Changed);
    assert_eq!(input.value(), "hello");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_backspace_and_delete() {
    let mut input = typed("abc");
    assert_eq!(press(&mut input, Key::Backspace), TextEditResult::Changed);
    assert_eq!(input.value(), "ab");

    press(&mut input, Key::Home);
    assert_eq!(press(&mut input, Key::Backspace), TextEditResult::Handled);
    assert_eq!(press(&mut input, Key::Delete), TextEditResult::Changed);
    assert_eq!(input.value(), "b");

    press(&mut input, Key::End);
    assert_eq!(press(&mut input, Key::Delete), TextEditResult::Handled);
}

#[test]
fn test_multibyte_editing() {
    let mut input = typed("naïve");
    press(&mut input, Key::Left);
    press(&mut input, Key::Left);
    press(&mut input, Key::Backspace);
    assert_eq!(input.value(), "nave");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_shift_selection_replaced_by_typing() {
    let mut input = typed("hello world");
    input.handle_key(Key::Home, Modifiers::shift());
    assert_eq!(input.selection(), Some((0, 11)));

    press(&mut input, Key::End);
    for _ in 0..5 {
        input.handle_key(Key::Left, Modifiers::shift());
    }
    assert_eq!(input.selection(), Some((6, 11)));

    press(&mut input, Key::Char('!'));
    assert_eq!(input.value(), "hello !");
    assert!(!input.has_selection());
}

#[test]
fn test_select_all_then_backspace_clears() {
    let mut input = typed("query");
    assert_eq!(
        input.handle_key(Key::Char('a'), Modifiers::ctrl()),
        TextEditResult::Handled
    );
    assert_eq!(press(&mut input, Key::Backspace), TextEditResult::Changed);
    assert_eq!(input.value(), "");
}

#[test]
fn test_collapse_selection_with_arrows() {
    let mut input = typed("abcd");
    input.handle_key(Key::Left, Modifiers::shift());
    input.handle_key(Key::Left, Modifiers::shift());
    press(&mut input, Key::Right);
    assert_eq!(input.cursor(), 4);
    assert!(!input.has_selection());
}

#[test]
fn test_enter_submits_and_unknown_keys_pass_through() {
    let mut input = typed("x");
    assert_eq!(press(&mut input, Key::Enter), TextEditResult::Submitted);
    assert_eq!(press(&mut input, Key::Tab), TextEditResult::Ignored);
    assert_eq!(
        input.handle_key(Key::Char('c'), Modifiers::ctrl()),
        TextEditResult::Ignored
    );
}

// ============================================================================
// Props
// ============================================================================

#[test]
fn test_max_length() {
    let mut input = LineInput::new("");
    input.render(&TextInputProps {
        max_length: Some(3),
        ..Default::default()
    });
    for c in "abcdef".chars() {
        input.handle_key(Key::Char(c), Modifiers::new());
    }
    assert_eq!(input.value(), "abc");
    assert_eq!(press(&mut input, Key::Char('z')), TextEditResult::Handled);
}

#[test]
fn test_not_editable_ignores_everything() {
    let mut input = LineInput::new("fixed");
    input.render(&TextInputProps {
        editable: false,
        ..Default::default()
    });
    assert_eq!(press(&mut input, Key::Char('x')), TextEditResult::Ignored);
    assert_eq!(press(&mut input, Key::Enter), TextEditResult::Ignored);
    assert_eq!(input.value(), "fixed");
}

#[test]
fn test_render_reflects_state() {
    let mut input = LineInput::new("secret");
    input.focus();
    let element = input.render(&TextInputProps {
        placeholder: Some("Password".to_string()),
        mask: Some('*'),
        ..Default::default()
    });

    assert_eq!(
        element.input_view(),
        Some(&InputView {
            value: "secret".to_string(),
            cursor: 6,
            selection: None,
            placeholder: Some("Password".to_string()),
            focused: true,
            mask: Some('*'),
        })
    );
}

#[test]
fn test_blur_clears_selection() {
    let mut input = typed("abc");
    input.focus();
    input.handle_key(Key::Char('a'), Modifiers::ctrl());
    assert!(input.has_selection());

    input.blur();
    assert!(!input.is_focused());
    assert!(!input.has_selection());
}

#[test]
fn test_set_value_moves_cursor_to_end() {
    let mut input = typed("old");
    press(&mut input, Key::Home);
    input.set_value("brand new");
    assert_eq!(input.value(), "brand new");
    assert_eq!(input.cursor(), 9);
}
