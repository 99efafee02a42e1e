use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, InputView};
use crate::event::Event;
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Predicate deciding whether a container claims a press before its children
/// see it.
pub type ResponderCaptureFn = Arc<dyn Fn(&Event) -> bool + Send + Sync>;

/// A node of the rendered tree.
///
/// Widgets build a fresh tree on every render; hosts paint it and route input
/// back by id.
#[derive(Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,
    pub style: Style,

    /// Shown but not editable.
    pub disabled: bool,
    /// Rows of this container are windowed and offset by `scroll_offset`.
    pub scrollable: bool,
    pub scroll_offset: usize,
    pub responder_capture: Option<ResponderCaptureFn>,

    /// Opaque per-element values: list keys, forwarded list options.
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            style: Style::default(),
            disabled: false,
            scrollable: false,
            scroll_offset: 0,
            responder_capture: None,
            data: HashMap::new(),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("style", &self.style)
            .field("scroll_offset", &self.scroll_offset)
            .field("responder_capture", &self.responder_capture.is_some())
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl Element {
    fn with_content(prefix: &str, content: Content) -> Self {
        Self {
            id: generate_id(prefix),
            content,
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content("text", Content::Text(text.into()))
    }

    /// Container stacking its children top to bottom.
    pub fn col() -> Self {
        Self::with_content("col", Content::Children(Vec::new()))
    }

    pub fn input(view: InputView) -> Self {
        Self::with_content("input", Content::Input(view))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn responder_capture(mut self, predicate: Option<ResponderCaptureFn>) -> Self {
        self.responder_capture = predicate;
        self
    }

    /// Ask this element whether it claims a press.
    ///
    /// Elements without a predicate never do.
    pub fn should_capture(&self, event: &Event) -> bool {
        self.responder_capture
            .as_ref()
            .is_some_and(|predicate| predicate(event))
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn child(self, child: Element) -> Self {
        self.children([child])
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for leaves.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn input_view(&self) -> Option<&InputView> {
        match &self.content {
            Content::Input(view) => Some(view),
            _ => None,
        }
    }
}
