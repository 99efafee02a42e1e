//! Configuration handed to the virtual list on every render.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::element::Element;
use crate::error::Error;
use crate::types::Style;

/// Extra list options, forwarded verbatim and never interpreted by the widget.
pub type ListOptions = serde_json::Map<String, serde_json::Value>;

/// Item passed to a [`RenderItemFn`].
#[derive(Debug)]
pub struct ItemInfo<'a, T> {
    pub item: &'a T,
    pub index: usize,
}

/// Distance information passed to an [`OnEndReachedFn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndReached {
    /// Rows between the bottom of the viewport and the end of the content.
    pub distance_from_end: usize,
}

pub type RenderItemFn<T> = Arc<dyn Fn(ItemInfo<'_, T>) -> Element + Send + Sync>;
pub type KeyExtractorFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;
/// Renders the separator after the item at the given index.
pub type RenderSeparatorFn = Arc<dyn Fn(usize) -> Element + Send + Sync>;
pub type OnEndReachedFn = Arc<dyn Fn(EndReached) + Send + Sync>;

/// Wrap a closure as a [`RenderItemFn`].
pub fn item_renderer<T, F>(render: F) -> RenderItemFn<T>
where
    F: Fn(ItemInfo<'_, T>) -> Element + Send + Sync + 'static,
{
    Arc::new(render)
}

/// Default end-reached threshold, in viewport lengths.
pub const DEFAULT_END_REACHED_THRESHOLD: f32 = 2.0;

/// Whether taps on the list keep the keyboard (and the input's focus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "PersistTapsRepr")]
pub enum KeyboardShouldPersistTaps {
    #[default]
    Always,
    Never,
    Handled,
}

impl KeyboardShouldPersistTaps {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Handled => "handled",
        }
    }
}

impl fmt::Display for KeyboardShouldPersistTaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyboardShouldPersistTaps {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" | "true" => Ok(Self::Always),
            "never" | "false" => Ok(Self::Never),
            "handled" => Ok(Self::Handled),
            _ => Err(Error::InvalidPersistTaps(s.to_string())),
        }
    }
}

impl From<bool> for KeyboardShouldPersistTaps {
    fn from(persist: bool) -> Self {
        if persist { Self::Always } else { Self::Never }
    }
}

/// Accepted config shapes: a bool or one of the names.
#[derive(Deserialize)]
#[serde(untagged)]
enum PersistTapsRepr {
    Flag(bool),
    Name(String),
}

impl TryFrom<PersistTapsRepr> for KeyboardShouldPersistTaps {
    type Error = Error;

    fn try_from(repr: PersistTapsRepr) -> Result<Self, Self::Error> {
        match repr {
            PersistTapsRepr::Flag(flag) => Ok(flag.into()),
            PersistTapsRepr::Name(name) => name.parse(),
        }
    }
}

/// Everything the list needs for one render pass.
pub struct ListProps<'a, T> {
    pub render_item: &'a RenderItemFn<T>,
    pub key_extractor: Option<&'a KeyExtractorFn<T>>,
    pub render_separator: Option<&'a RenderSeparatorFn>,
    pub on_end_reached: Option<&'a OnEndReachedFn>,
    pub on_end_reached_threshold: Option<f32>,
    pub keyboard_should_persist_taps: KeyboardShouldPersistTaps,
    pub style: Style,
    pub options: &'a ListOptions,
}
