//! Autocomplete configuration.

use std::fmt;
use std::sync::Arc;

use super::candidates::Candidates;
use super::proxy::TextInputRenderProps;
use crate::element::{Element, ResponderCaptureFn};
use crate::event::Event;
use crate::list::{
    ItemInfo, KeyExtractorFn, KeyboardShouldPersistTaps, ListOptions, OnEndReachedFn,
    RenderItemFn, RenderSeparatorFn,
};
use crate::text_input::TextInputProps;
use crate::types::Style;

/// Listener told whether the suggestion list is shown.
pub type ShowResultsFn = Arc<dyn Fn(bool) + Send + Sync>;

/// Custom text-input renderer.
///
/// The `Arc` identity is the renderer's identity: keep the same `Arc` across
/// renders. Passing a different one is a renderer swap and remounts the input.
pub type RenderTextInputFn<T> =
    Arc<dyn for<'a> Fn(TextInputRenderProps<'a, T>) -> Element + Send + Sync>;

/// Wrap a closure as a [`RenderTextInputFn`].
pub fn text_input_renderer<T, F>(render: F) -> RenderTextInputFn<T>
where
    F: for<'a> Fn(TextInputRenderProps<'a, T>) -> Element + Send + Sync + 'static,
{
    Arc::new(render)
}

/// Everything an [`Autocomplete`](super::Autocomplete) is configured with.
///
/// Props are rebuilt by the caller as often as it likes; the widget only keeps
/// what it needs between renders (the data mirror and the mounted handles).
pub struct AutocompleteProps<T> {
    /// Prefix for the ids of the generated elements.
    pub id: String,
    pub data: Candidates<T>,
    pub hide_results: bool,
    pub on_show_results: Option<ShowResultsFn>,
    /// Only notify `on_show_results` when the visibility flips.
    pub show_results_edge_triggered: bool,

    // Forwarded to the list
    pub render_item: RenderItemFn<T>,
    pub key_extractor: Option<KeyExtractorFn<T>>,
    pub render_separator: Option<RenderSeparatorFn>,
    pub on_end_reached: Option<OnEndReachedFn>,
    pub on_end_reached_threshold: Option<f32>,
    pub keyboard_should_persist_taps: KeyboardShouldPersistTaps,
    pub list_options: ListOptions,

    pub on_start_should_set_responder_capture: ResponderCaptureFn,
    pub render_text_input: Option<RenderTextInputFn<T>>,
    pub input: TextInputProps,

    pub container_style: Option<Style>,
    pub input_container_style: Option<Style>,
    pub list_container_style: Option<Style>,
    pub list_style: Option<Style>,
}

impl<T> AutocompleteProps<T> {
    /// Create props with the given item renderer and defaults for the rest.
    pub fn new<F>(render_item: F) -> Self
    where
        F: Fn(ItemInfo<'_, T>) -> Element + Send + Sync + 'static,
    {
        Self {
            id: "autocomplete".to_string(),
            data: Candidates::empty(),
            hide_results: false,
            on_show_results: None,
            show_results_edge_triggered: false,
            render_item: Arc::new(render_item),
            key_extractor: None,
            render_separator: None,
            on_end_reached: None,
            on_end_reached_threshold: None,
            keyboard_should_persist_taps: KeyboardShouldPersistTaps::default(),
            list_options: ListOptions::new(),
            on_start_should_set_responder_capture: Arc::new(|_: &Event| false),
            render_text_input: None,
            input: TextInputProps::default(),
            container_style: None,
            input_container_style: None,
            list_container_style: None,
            list_style: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn data(mut self, data: impl Into<Candidates<T>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn hide_results(mut self, hide: bool) -> Self {
        self.hide_results = hide;
        self
    }

    pub fn on_show_results(mut self, listener: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_show_results = Some(Arc::new(listener));
        self
    }

    pub fn show_results_edge_triggered(mut self, edge: bool) -> Self {
        self.show_results_edge_triggered = edge;
        self
    }

    pub fn render_item(
        mut self,
        render: impl Fn(ItemInfo<'_, T>) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.render_item = Arc::new(render);
        self
    }

    pub fn key_extractor(mut self, extract: impl Fn(&T, usize) -> String + Send + Sync + 'static) -> Self {
        self.key_extractor = Some(Arc::new(extract));
        self
    }

    pub fn render_separator(mut self, render: impl Fn(usize) -> Element + Send + Sync + 'static) -> Self {
        self.render_separator = Some(Arc::new(render));
        self
    }

    pub fn on_end_reached(
        mut self,
        callback: impl Fn(crate::list::EndReached) + Send + Sync + 'static,
    ) -> Self {
        self.on_end_reached = Some(Arc::new(callback));
        self
    }

    pub fn on_end_reached_threshold(mut self, threshold: f32) -> Self {
        self.on_end_reached_threshold = Some(threshold);
        self
    }

    pub fn keyboard_should_persist_taps(mut self, persist: KeyboardShouldPersistTaps) -> Self {
        self.keyboard_should_persist_taps = persist;
        self
    }

    pub fn list_options(mut self, options: ListOptions) -> Self {
        self.list_options = options;
        self
    }

    /// Add a single extra list option.
    pub fn list_option(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.list_options.insert(name.into(), value.into());
        self
    }

    pub fn on_start_should_set_responder_capture(
        mut self,
        predicate: impl Fn(&Event) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.on_start_should_set_responder_capture = Arc::new(predicate);
        self
    }

    pub fn render_text_input(mut self, render: RenderTextInputFn<T>) -> Self {
        self.render_text_input = Some(render);
        self
    }

    pub fn input(mut self, input: TextInputProps) -> Self {
        self.input = input;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.input.default_value = value.into();
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.input.editable = editable;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.input.auto_focus = auto_focus;
        self
    }

    /// Style of the text input itself.
    pub fn style(mut self, style: Style) -> Self {
        self.input.style = Some(style);
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = Some(style);
        self
    }

    pub fn input_container_style(mut self, style: Style) -> Self {
        self.input_container_style = Some(style);
        self
    }

    pub fn list_container_style(mut self, style: Style) -> Self {
        self.list_container_style = Some(style);
        self
    }

    pub fn list_style(mut self, style: Style) -> Self {
        self.list_style = Some(style);
        self
    }
}

impl<T: fmt::Display> Default for AutocompleteProps<T> {
    /// Items render as their `Display` text.
    fn default() -> Self {
        Self::new(|info: ItemInfo<'_, T>| Element::text(info.item.to_string()))
    }
}

impl<T> Clone for AutocompleteProps<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            data: self.data.clone(),
            hide_results: self.hide_results,
            on_show_results: self.on_show_results.clone(),
            show_results_edge_triggered: self.show_results_edge_triggered,
            render_item: self.render_item.clone(),
            key_extractor: self.key_extractor.clone(),
            render_separator: self.render_separator.clone(),
            on_end_reached: self.on_end_reached.clone(),
            on_end_reached_threshold: self.on_end_reached_threshold,
            keyboard_should_persist_taps: self.keyboard_should_persist_taps,
            list_options: self.list_options.clone(),
            on_start_should_set_responder_capture: self.on_start_should_set_responder_capture.clone(),
            render_text_input: self.render_text_input.clone(),
            input: self.input.clone(),
            container_style: self.container_style.clone(),
            input_container_style: self.input_container_style.clone(),
            list_container_style: self.list_container_style.clone(),
            list_style: self.list_style.clone(),
        }
    }
}

impl<T> fmt::Debug for AutocompleteProps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteProps")
            .field("id", &self.id)
            .field("data_len", &self.data.len())
            .field("hide_results", &self.hide_results)
            .field("on_show_results", &self.on_show_results.is_some())
            .field("show_results_edge_triggered", &self.show_results_edge_triggered)
            .field("on_end_reached_threshold", &self.on_end_reached_threshold)
            .field("keyboard_should_persist_taps", &self.keyboard_should_persist_taps)
            .field("list_options", &self.list_options)
            .field("render_text_input", &self.render_text_input.is_some())
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}
