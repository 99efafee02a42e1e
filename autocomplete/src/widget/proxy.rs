//! Forwards focus control to whichever text input is mounted.

use std::fmt;
use std::sync::Arc;

use log::debug;

use super::props::{AutocompleteProps, RenderTextInputFn};
use crate::element::Element;
use crate::event::{Key, Modifiers};
use crate::platform::StyleSheet;
use crate::text_input::{LineInput, TextEditResult, TextInput, TextInputProps};

/// Hook a text-input renderer uses to mount or reach its input instance.
///
/// The instance is owned by the widget; the binding only lends it out for the
/// duration of one render.
pub struct InputBinding<'a> {
    slot: &'a mut Option<Box<dyn TextInput>>,
}

impl InputBinding<'_> {
    /// Whether an input is currently mounted.
    pub fn is_bound(&self) -> bool {
        self.slot.is_some()
    }

    /// Return the mounted input, mounting one with `mount` if there is none.
    pub fn mount_with(&mut self, mount: impl FnOnce() -> Box<dyn TextInput>) -> &mut dyn TextInput {
        if self.slot.is_none() {
            debug!("Text input mounted");
        }
        self.slot.get_or_insert_with(mount).as_mut()
    }

    /// Install `input`, dropping any previous instance.
    pub fn bind(&mut self, input: Box<dyn TextInput>) -> &mut dyn TextInput {
        debug!("Text input bound");
        self.slot.insert(input).as_mut()
    }

    pub fn get_mut(&mut self) -> Option<&mut (dyn TextInput + 'static)> {
        self.slot.as_deref_mut()
    }

    /// Drop the mounted input.
    pub fn release(&mut self) {
        if self.slot.take().is_some() {
            debug!("Text input released");
        }
    }
}

/// Arguments handed to a text-input renderer.
///
/// Renderers see every widget prop, not a filtered subset.
pub struct TextInputRenderProps<'a, T> {
    pub props: &'a AutocompleteProps<T>,
    pub styles: &'a StyleSheet,
    pub binding: InputBinding<'a>,
}

/// The built-in renderer: a [`LineInput`] with the platform input style.
///
/// Only `style` is touched (layered over the default input style); every other
/// text-input option is passed through as given.
pub fn default_text_input<T>(render: TextInputRenderProps<'_, T>) -> Element {
    let TextInputRenderProps {
        props,
        styles,
        mut binding,
    } = render;

    let fresh = !binding.is_bound();
    let input = binding.mount_with(|| Box::new(LineInput::new(props.input.default_value.clone())));
    if fresh && props.input.auto_focus {
        input.focus();
    }

    let input_props = TextInputProps {
        style: Some(styles.input.merged(props.input.style.as_ref())),
        ..props.input.clone()
    };
    input.render(&input_props).id(format!("{}-text", props.id))
}

/// Which renderer mounted the current input.
enum RendererKind<T> {
    Default,
    Custom(RenderTextInputFn<T>),
}

impl<T> RendererKind<T> {
    fn of(props: &AutocompleteProps<T>) -> Self {
        match &props.render_text_input {
            Some(render) => Self::Custom(Arc::clone(render)),
            None => Self::Default,
        }
    }

    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Default, Self::Default) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Owns the mounted text input and forwards control calls to it.
///
/// Every call is safe without a mounted input: focus and blur do nothing and
/// `is_focused` reports false.
pub struct InputProxy<T> {
    handle: Option<Box<dyn TextInput>>,
    mounted_by: Option<RendererKind<T>>,
}

impl<T> Default for InputProxy<T> {
    fn default() -> Self {
        Self {
            handle: None,
            mounted_by: None,
        }
    }
}

impl<T> fmt::Debug for InputProxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputProxy")
            .field("handle", &self.handle)
            .field(
                "custom_renderer",
                &matches!(self.mounted_by, Some(RendererKind::Custom(_))),
            )
            .finish()
    }
}

impl<T> InputProxy<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn focus(&mut self) {
        if let Some(input) = self.handle.as_mut() {
            input.focus();
        }
    }

    pub fn blur(&mut self) {
        if let Some(input) = self.handle.as_mut() {
            input.blur();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.handle.as_ref().is_some_and(|input| input.is_focused())
    }

    pub(crate) fn value(&self) -> Option<&str> {
        self.handle.as_deref().map(|input| input.value())
    }

    pub(crate) fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<TextEditResult> {
        self.handle
            .as_mut()
            .map(|input| input.handle_key(key, modifiers))
    }

    /// Render the input region with the custom renderer or the default one.
    ///
    /// Switching renderers drops the old input before the new renderer runs.
    pub fn resolve_input_renderer(
        &mut self,
        props: &AutocompleteProps<T>,
        styles: &StyleSheet,
    ) -> Element {
        let current = RendererKind::of(props);
        if let Some(previous) = &self.mounted_by
            && !previous.same(&current)
        {
            debug!("Text input renderer swapped, remounting input");
            self.handle = None;
        }
        self.mounted_by = Some(current);

        let render = TextInputRenderProps {
            props,
            styles,
            binding: InputBinding {
                slot: &mut self.handle,
            },
        };
        match &props.render_text_input {
            Some(custom) => custom(render),
            None => default_text_input(render),
        }
    }

    /// Drop the input and forget the renderer.
    pub fn unmount(&mut self) {
        if self.handle.take().is_some() {
            debug!("Text input unmounted");
        }
        self.mounted_by = None;
    }
}
