use super::Element;

/// What an element shows.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
    /// A text field, as rendered by a [`TextInput`](crate::TextInput).
    Input(InputView),
}

/// Snapshot of a text field for the painter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    /// Cursor position in characters.
    pub cursor: usize,
    /// Selected character range, start first.
    pub selection: Option<(usize, usize)>,
    pub placeholder: Option<String>,
    pub focused: bool,
    /// Drawn in place of every character of `value`.
    pub mask: Option<char>,
}
