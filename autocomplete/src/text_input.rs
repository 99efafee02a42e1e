//! Text-input primitive.
//!
//! [`TextInput`] is the seam the autocomplete widget's input proxy talks to.
//! [`LineInput`] is the built-in single-line implementation used by the
//! default input renderer.

use std::fmt;

use crate::element::{Element, InputView};
use crate::event::{Key, Modifiers};
use crate::types::Style;

/// Options understood by a text input.
///
/// These are forwarded untouched from the widget props, except `style` which
/// the default renderer layers over the platform input style.
#[derive(Debug, Clone)]
pub struct TextInputProps {
    /// Initial text, applied when the input is first mounted.
    pub default_value: String,
    pub placeholder: Option<String>,
    pub editable: bool,
    pub mask: Option<char>,
    /// Focus the input as soon as it is mounted.
    pub auto_focus: bool,
    /// Maximum number of characters.
    pub max_length: Option<usize>,
    pub style: Option<Style>,
}

impl Default for TextInputProps {
    fn default() -> Self {
        Self {
            default_value: String::new(),
            placeholder: None,
            editable: true,
            mask: None,
            auto_focus: false,
            max_length: None,
            style: None,
        }
    }
}

/// Outcome of a key press on a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    Changed,
    /// Enter.
    Submitted,
    /// Consumed without touching the text: cursor moves, selection.
    Handled,
    /// Not an editing key; the host may use it.
    Ignored,
}

/// A mounted text-input instance.
pub trait TextInput: Send + fmt::Debug {
    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Current text.
    fn value(&self) -> &str;

    /// Replace the text, placing the cursor at the end.
    fn set_value(&mut self, value: &str);

    /// Process a key press.
    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult;

    /// Apply the latest props and build the element for this frame.
    fn render(&mut self, props: &TextInputProps) -> Element;
}

/// Single-line text input with cursor and selection.
///
/// Cursor and anchor are character indices, not byte offsets.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    text: String,
    cursor: usize,
    /// Fixed end of the selection; the cursor is the moving end.
    anchor: Option<usize>,
    focused: bool,
    read_only: bool,
    max_length: Option<usize>,
}

/// What a key press asks the input to do.
#[derive(Debug, Clone, Copy)]
enum Edit {
    Insert(char),
    EraseBack,
    EraseForward,
    Step { forward: bool, extend: bool },
    Jump { to_end: bool, extend: bool },
    SelectAll,
    Submit,
}

impl Edit {
    fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        let plain = modifiers.none();
        let extend = modifiers.shift;
        let edit = match key {
            Key::Char('a') if modifiers.ctrl => Self::SelectAll,
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => Self::Insert(c),
            Key::Backspace if plain => Self::EraseBack,
            Key::Delete if plain => Self::EraseForward,
            Key::Left | Key::Right if !modifiers.ctrl => Self::Step {
                forward: key == Key::Right,
                extend,
            },
            Key::Home | Key::End if !modifiers.ctrl => Self::Jump {
                to_end: key == Key::End,
                extend,
            },
            Key::Enter => Self::Submit,
            _ => return None,
        };
        Some(edit)
    }
}

impl LineInput {
    pub fn new(text: impl Into<String>) -> Self {
        let mut input = Self::default();
        input.replace_text(text.into());
        input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected range, start first. `None` when nothing is selected.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        match anchor.cmp(&self.cursor) {
            std::cmp::Ordering::Less => Some((anchor, self.cursor)),
            std::cmp::Ordering::Greater => Some((self.cursor, anchor)),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.len();
        }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn replace_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.len();
        self.anchor = None;
    }

    /// Remove the characters in `start..end`, leaving the cursor at `start`.
    fn erase(&mut self, start: usize, end: usize) {
        let range = byte_offset(&self.text, start)..byte_offset(&self.text, end);
        self.text.replace_range(range, "");
        self.cursor = start;
        self.anchor = None;
    }

    fn erase_selection(&mut self) -> bool {
        match self.selection() {
            Some((start, end)) => {
                self.erase(start, end);
                true
            }
            None => false,
        }
    }

    fn insert(&mut self, c: char) -> bool {
        let replaced = self.erase_selection();
        if self.max_length.is_some_and(|max| self.len() >= max) {
            return replaced;
        }
        let at = byte_offset(&self.text, self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    fn erase_back(&mut self) -> bool {
        if self.erase_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.erase(self.cursor - 1, self.cursor);
        true
    }

    fn erase_forward(&mut self) -> bool {
        if self.erase_selection() {
            return true;
        }
        if self.cursor >= self.len() {
            return false;
        }
        let cursor = self.cursor;
        self.erase(cursor, cursor + 1);
        true
    }

    fn place_cursor(&mut self, target: usize, extend: bool) {
        if !extend {
            self.anchor = None;
        } else if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
        self.cursor = target.min(self.len());
    }

    fn step(&mut self, forward: bool, extend: bool) {
        // Collapsing a selection lands on its edge.
        if !extend && let Some((start, end)) = self.selection() {
            self.cursor = if forward { end } else { start };
            self.anchor = None;
            return;
        }
        let target = if forward {
            self.cursor + 1
        } else {
            self.cursor.saturating_sub(1)
        };
        self.place_cursor(target, extend);
    }

    fn apply(&mut self, edit: Edit) -> TextEditResult {
        let changed = match edit {
            Edit::Insert(c) => self.insert(c),
            Edit::EraseBack => self.erase_back(),
            Edit::EraseForward => self.erase_forward(),
            Edit::Step { forward, extend } => {
                self.step(forward, extend);
                false
            }
            Edit::Jump { to_end, extend } => {
                let target = if to_end { self.len() } else { 0 };
                self.place_cursor(target, extend);
                false
            }
            Edit::SelectAll => {
                self.select_all();
                false
            }
            Edit::Submit => return TextEditResult::Submitted,
        };
        if changed {
            TextEditResult::Changed
        } else {
            TextEditResult::Handled
        }
    }
}

impl TextInput for LineInput {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
        self.anchor = None;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn set_value(&mut self, value: &str) {
        self.replace_text(value.to_string());
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        if self.read_only {
            return TextEditResult::Ignored;
        }
        match Edit::from_key(key, modifiers) {
            Some(edit) => self.apply(edit),
            None => TextEditResult::Ignored,
        }
    }

    fn render(&mut self, props: &TextInputProps) -> Element {
        self.read_only = !props.editable;
        self.max_length = props.max_length;

        let view = InputView {
            value: self.text.clone(),
            cursor: self.cursor,
            selection: self.selection(),
            placeholder: props.placeholder.clone(),
            focused: self.focused,
            mask: props.mask,
        };
        Element::input(view)
            .disabled(!props.editable)
            .style(props.style.clone().unwrap_or_default())
    }
}

/// Byte offset of the `index`th character, or the length past the end.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(at, _)| at)
}
