//! Autocomplete widget - a text input paired with a suggestion list.
//!
//! The widget does no filtering of its own. Callers pass already-filtered
//! candidates as `data`; the widget mirrors them, shows the list while there
//! is something to show, and proxies focus control to its text input.
//!
//! # Example
//!
//! ```ignore
//! let mut widget = Autocomplete::new();
//! let props = AutocompleteProps::default()
//!     .data(vec!["apple".to_string(), "apricot".to_string()])
//!     .placeholder("Search fruit...")
//!     .on_show_results(|visible| log::debug!("results visible: {visible}"));
//!
//! let root = widget.render(&props);
//! widget.focus();
//! ```

mod candidates;
mod props;
mod proxy;
mod render;
mod visibility;

pub use candidates::Candidates;
pub use props::{AutocompleteProps, RenderTextInputFn, ShowResultsFn, text_input_renderer};
pub use proxy::{InputBinding, InputProxy, TextInputRenderProps, default_text_input};
pub use render::{input_container_id, list_id, results_id};
pub use visibility::{
    DataMirror, VisibilityController, compute_visibility, notify_visibility_observer,
};

use log::debug;

use crate::event::{Event, Key, Modifiers};
use crate::list::VirtualList;
use crate::platform::{Platform, StyleSheet};
use crate::text_input::TextEditResult;
use crate::element::Element;

/// What a routed input event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The text changed; carries the new text.
    Changed(String),
    /// Enter was pressed; carries the current text.
    Submitted(String),
    /// Handled without a semantic change (cursor moved, list scrolled).
    Handled,
    /// Not handled, or nothing is mounted to handle it.
    Ignored,
}

/// A mounted autocomplete widget.
///
/// Holds the data mirror, the text input handle and the list handle between
/// renders. Everything else comes from the props passed to [`render`].
///
/// [`render`]: Autocomplete::render
#[derive(Debug)]
pub struct Autocomplete<T> {
    visibility: VisibilityController<T>,
    proxy: InputProxy<T>,
    list: Option<VirtualList>,
    styles: StyleSheet,
}

impl<T> Default for Autocomplete<T> {
    fn default() -> Self {
        Self::with_styles(StyleSheet::default())
    }
}

impl<T> Autocomplete<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the default styles of a specific platform.
    pub fn with_platform(platform: Platform) -> Self {
        Self::with_styles(StyleSheet::for_platform(platform))
    }

    pub fn with_styles(styles: StyleSheet) -> Self {
        Self {
            visibility: VisibilityController::new(),
            proxy: InputProxy::new(),
            list: None,
            styles,
        }
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// The candidates currently mirrored from props.
    pub fn data(&self) -> &DataMirror<T> {
        self.visibility.mirror()
    }

    // -------------------------------------------------------------------------
    // Control surface
    // -------------------------------------------------------------------------

    /// Focus the text input. Does nothing before the input is mounted.
    pub fn focus(&mut self) {
        self.proxy.focus();
    }

    /// Blur the text input. Does nothing before the input is mounted.
    pub fn blur(&mut self) {
        self.proxy.blur();
    }

    /// Whether the text input has focus. False when nothing is mounted.
    pub fn is_focused(&self) -> bool {
        self.proxy.is_focused()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the element tree for `props`.
    ///
    /// Syncs the data mirror, recomputes visibility and notifies the
    /// `on_show_results` listener on every call.
    pub fn render(&mut self, props: &AutocompleteProps<T>) -> Element {
        let visible = self.visibility.update(
            &props.data,
            props.hide_results,
            props.on_show_results.as_ref(),
            props.show_results_edge_triggered,
        );

        let input = self.proxy.resolve_input_renderer(props, &self.styles);

        let list = if visible {
            let list = self.list.get_or_insert_with(|| {
                debug!("Suggestion list mounted");
                VirtualList::new()
            });
            let list_props = render::list_props(props, &self.styles);
            Some(list.render(
                &list_id(&props.id),
                self.visibility.mirror().items(),
                &list_props,
            ))
        } else {
            if self.list.take().is_some() {
                debug!("Suggestion list unmounted");
            }
            None
        };

        render::compose(props, &self.styles, input, list)
    }

    /// Feed back the list's viewport height as laid out by the host.
    ///
    /// Returns whether the viewport changed, in which case the host should
    /// render again. Does nothing while the list is not mounted.
    pub fn set_list_viewport(&mut self, rows: u16) -> bool {
        let Some(list) = self.list.as_mut() else {
            return false;
        };
        if list.viewport() == Some(rows) {
            return false;
        }
        debug!("Suggestion list viewport measured at {rows} rows");
        list.set_viewport_height(rows);
        true
    }

    /// Drop the mounted input and list.
    ///
    /// The control surface keeps working afterwards as a no-op.
    pub fn unmount(&mut self) {
        self.proxy.unmount();
        if self.list.take().is_some() {
            debug!("Suggestion list unmounted");
        }
    }

    // -------------------------------------------------------------------------
    // Input routing
    // -------------------------------------------------------------------------

    /// Route a key press to the mounted text input.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> InputEvent {
        match self.proxy.handle_key(key, modifiers) {
            Some(TextEditResult::Changed) => {
                InputEvent::Changed(self.proxy.value().unwrap_or_default().to_string())
            }
            Some(TextEditResult::Submitted) => {
                InputEvent::Submitted(self.proxy.value().unwrap_or_default().to_string())
            }
            Some(TextEditResult::Handled) => InputEvent::Handled,
            Some(TextEditResult::Ignored) | None => InputEvent::Ignored,
        }
    }

    /// Route an event: keys go to the input, wheel scrolls go to the list.
    pub fn handle_event(&mut self, event: &Event) -> InputEvent {
        match event {
            Event::Key { key, modifiers } => self.handle_key(*key, *modifiers),
            Event::Scroll { delta_y, .. } => match self.list.as_mut() {
                Some(list) => {
                    list.scroll_by(*delta_y);
                    InputEvent::Handled
                }
                None => InputEvent::Ignored,
            },
            Event::Press { .. } | Event::Resize { .. } => InputEvent::Ignored,
        }
    }
}
