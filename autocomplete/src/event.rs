//! Input the widget reacts to, and the conversion from crossterm's events.

use crossterm::event as ct;

/// Input events delivered to a widget by its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, routed to the text input.
    Key { key: Key, modifiers: Modifiers },
    /// Start of a touch or mouse press.
    Press { x: u16, y: u16, button: MouseButton },
    /// Wheel scroll. Positive deltas scroll towards the end.
    Scroll { x: u16, y: u16, delta_y: i16 },
    Resize { width: u16, height: u16 },
}

/// Keys a text input or its host can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// No modifier held.
    pub fn none(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Convert a crossterm event into a widget event.
///
/// Key releases, unsupported keys, mouse moves, drags, focus changes and
/// pastes yield `None`.
pub fn convert_event(event: ct::Event) -> Option<Event> {
    match event {
        ct::Event::Key(press) if press.kind != ct::KeyEventKind::Release => {
            let key = Key::try_from(press.code).ok()?;
            let modifiers = Modifiers::from(press.modifiers);
            Some(Event::Key { key, modifiers })
        }
        ct::Event::Mouse(mouse) => {
            let (x, y) = (mouse.column, mouse.row);
            match mouse.kind {
                ct::MouseEventKind::Down(button) => Some(Event::Press {
                    x,
                    y,
                    button: button.into(),
                }),
                ct::MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta_y: 1 }),
                ct::MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta_y: -1 }),
                _ => None,
            }
        }
        ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

impl TryFrom<ct::KeyCode> for Key {
    /// The code handed back unchanged.
    type Error = ct::KeyCode;

    fn try_from(code: ct::KeyCode) -> Result<Self, Self::Error> {
        let key = match code {
            ct::KeyCode::Char(c) => Self::Char(c),
            ct::KeyCode::Enter => Self::Enter,
            ct::KeyCode::Backspace => Self::Backspace,
            ct::KeyCode::Delete => Self::Delete,
            ct::KeyCode::Tab => Self::Tab,
            ct::KeyCode::Esc => Self::Escape,
            ct::KeyCode::Up => Self::Up,
            ct::KeyCode::Down => Self::Down,
            ct::KeyCode::Left => Self::Left,
            ct::KeyCode::Right => Self::Right,
            ct::KeyCode::Home => Self::Home,
            ct::KeyCode::End => Self::End,
            ct::KeyCode::F(n) => Self::F(n),
            unsupported => return Err(unsupported),
        };
        Ok(key)
    }
}

impl From<ct::KeyModifiers> for Modifiers {
    fn from(mods: ct::KeyModifiers) -> Self {
        Self {
            shift: mods.contains(ct::KeyModifiers::SHIFT),
            ctrl: mods.contains(ct::KeyModifiers::CONTROL),
            alt: mods.contains(ct::KeyModifiers::ALT),
        }
    }
}

impl From<ct::MouseButton> for MouseButton {
    fn from(button: ct::MouseButton) -> Self {
        match button {
            ct::MouseButton::Left => Self::Left,
            ct::MouseButton::Right => Self::Right,
            ct::MouseButton::Middle => Self::Middle,
        }
    }
}
