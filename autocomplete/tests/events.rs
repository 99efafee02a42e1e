use autocomplete::{Event, Key, Modifiers, MouseButton, convert_event};
use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};

fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CtEvent {
    CtEvent::Key(KeyEvent {
        code,
        modifiers,
        kind,
        state: KeyEventState::NONE,
    })
}

fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_press_converted() {
    let event = convert_event(key_event(
        KeyCode::Char('a'),
        KeyModifiers::CONTROL,
        KeyEventKind::Press,
    ));
    assert_eq!(
        event,
        Some(Event::Key {
            key: Key::Char('a'),
            modifiers: Modifiers::ctrl(),
        })
    );
}

#[test]
fn test_key_release_dropped() {
    let event = convert_event(key_event(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(event, None);
}

#[test]
fn test_key_repeat_kept() {
    let event = convert_event(key_event(
        KeyCode::Backspace,
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    ));
    assert!(matches!(
        event,
        Some(Event::Key {
            key: Key::Backspace,
            ..
        })
    ));
}

#[test]
fn test_unsupported_key_dropped() {
    let event = convert_event(key_event(
        KeyCode::CapsLock,
        KeyModifiers::NONE,
        KeyEventKind::Press,
    ));
    assert_eq!(event, None);
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_press_converted() {
    let event = convert_event(mouse_event(
        MouseEventKind::Down(crossterm::event::MouseButton::Right),
        4,
        7,
    ));
    assert_eq!(
        event,
        Some(Event::Press {
            x: 4,
            y: 7,
            button: MouseButton::Right,
        })
    );
}

#[test]
fn test_wheel_direction() {
    assert_eq!(
        convert_event(mouse_event(MouseEventKind::ScrollDown, 1, 2)),
        Some(Event::Scroll {
            x: 1,
            y: 2,
            delta_y: 1
        })
    );
    assert_eq!(
        convert_event(mouse_event(MouseEventKind::ScrollUp, 1, 2)),
        Some(Event::Scroll {
            x: 1,
            y: 2,
            delta_y: -1
        })
    );
}

#[test]
fn test_mouse_moves_and_focus_changes_dropped() {
    assert_eq!(convert_event(mouse_event(MouseEventKind::Moved, 0, 0)), None);
    assert_eq!(convert_event(CtEvent::FocusGained), None);
}

#[test]
fn test_resize_converted() {
    assert_eq!(
        convert_event(CtEvent::Resize(80, 24)),
        Some(Event::Resize {
            width: 80,
            height: 24
        })
    );
}
