//! Virtual list state.

use std::fmt;
use std::ops::Range;

use log::{debug, trace};

use super::props::{
    DEFAULT_END_REACHED_THRESHOLD, EndReached, ItemInfo, ListProps, OnEndReachedFn,
};
use crate::element::Element;

/// Data key holding an item's extracted key.
pub const KEY_DATA: &str = "key";
/// Data key holding the rows to skip inside the first rendered child.
pub const WINDOW_OFFSET_DATA: &str = "window_offset";

/// A mounted virtualized list.
///
/// Items are one row tall, separators add one row between items. The
/// viewport comes from a host measurement when one was given, otherwise from
/// the fixed height of the list style. Without either, every item is built.
pub struct VirtualList {
    /// Rows scrolled past; unbounded so any list length stays reachable.
    scroll_offset: usize,
    measured_viewport: Option<u16>,
    style_viewport: Option<u16>,
    item_count: usize,
    content_height: usize,
    /// Content height for which end-reached already fired.
    end_reached_sent: Option<usize>,
    on_end_reached: Option<OnEndReachedFn>,
    threshold: f32,
}

impl Default for VirtualList {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            measured_viewport: None,
            style_viewport: None,
            item_count: 0,
            content_height: 0,
            end_reached_sent: None,
            on_end_reached: None,
            threshold: DEFAULT_END_REACHED_THRESHOLD,
        }
    }
}

impl fmt::Debug for VirtualList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport", &self.viewport())
            .field("item_count", &self.item_count)
            .field("content_height", &self.content_height)
            .field("end_reached_sent", &self.end_reached_sent)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl VirtualList {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    /// Visible rows, if known.
    pub fn viewport(&self) -> Option<u16> {
        self.measured_viewport.or(self.style_viewport)
    }

    /// Record the measured viewport height from the host's layout.
    pub fn set_viewport_height(&mut self, height: u16) {
        self.measured_viewport = Some(height);
        self.clamp_offset();
        self.check_end_reached();
    }

    fn max_offset(&self) -> usize {
        match self.viewport() {
            Some(viewport) => self.content_height.saturating_sub(usize::from(viewport)),
            None => 0,
        }
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    /// Index range of the items intersecting the viewport.
    pub fn visible_range(&self, row_span: u16) -> Range<usize> {
        let Some(viewport) = self.viewport() else {
            return 0..self.item_count;
        };
        let span = usize::from(row_span.max(1));
        let start = self.scroll_offset / span;
        let bottom = self.scroll_offset.saturating_add(usize::from(viewport));
        let end = bottom.div_ceil(span).min(self.item_count);
        start.min(end)..end
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_to_top(&mut self) {
        self.scroll_to_offset(0);
    }

    pub fn scroll_to_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.clamp_offset();
        self.check_end_reached();
    }

    /// Scroll by a signed number of rows.
    pub fn scroll_by(&mut self, delta: i16) {
        let target = if delta < 0 {
            self.scroll_offset.saturating_sub(usize::from(delta.unsigned_abs()))
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.scroll_offset = target.min(self.max_offset());
        trace!("VirtualList scrolled to {}", self.scroll_offset);
        self.check_end_reached();
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the list element for `data`.
    pub fn render<T>(&mut self, id: &str, data: &[T], props: &ListProps<'_, T>) -> Element {
        self.on_end_reached = props.on_end_reached.cloned();
        self.threshold = props
            .on_end_reached_threshold
            .unwrap_or(DEFAULT_END_REACHED_THRESHOLD);
        self.style_viewport = props
            .style
            .height
            .map(|h| h.saturating_sub(props.style.border_edges().vertical_total()));

        let row_span: u16 = if props.render_separator.is_some() { 2 } else { 1 };
        self.item_count = data.len();
        self.content_height = content_height(data.len(), row_span);
        self.clamp_offset();

        let range = self.visible_range(row_span);
        // Rows hidden inside the first rendered item, always below `row_span`.
        let window_offset = self
            .scroll_offset
            .saturating_sub(range.start * usize::from(row_span));

        let mut rows = Vec::with_capacity(range.len() * usize::from(row_span));
        for index in range {
            let item = &data[index];
            let key = match props.key_extractor {
                Some(extract) => extract(item, index),
                None => index.to_string(),
            };
            rows.push((props.render_item)(ItemInfo { item, index }).data(KEY_DATA, key));

            if let Some(separator) = props.render_separator
                && index + 1 < data.len()
            {
                rows.push(separator(index));
            }
        }

        let mut list = Element::col()
            .id(id)
            .style(props.style.clone())
            .scrollable(true)
            .scroll_offset(self.scroll_offset)
            .data(WINDOW_OFFSET_DATA, window_offset.to_string())
            .data(
                "keyboard_should_persist_taps",
                props.keyboard_should_persist_taps.as_str(),
            );
        for (name, value) in props.options {
            list = list.data(name.clone(), value.to_string());
        }

        self.check_end_reached();
        list.children(rows)
    }

    /// Fire end-reached once per content height when within the threshold.
    fn check_end_reached(&mut self) {
        let Some(callback) = self.on_end_reached.clone() else {
            return;
        };
        if self.content_height == 0 {
            return;
        }

        let visible = self
            .viewport()
            .map_or(self.content_height, usize::from);
        let distance = self
            .content_height
            .saturating_sub(self.scroll_offset.saturating_add(visible));
        let limit = self.threshold * visible as f32;

        if distance as f32 > limit {
            self.end_reached_sent = None;
            return;
        }
        if self.end_reached_sent == Some(self.content_height) {
            return;
        }

        self.end_reached_sent = Some(self.content_height);
        debug!(
            "VirtualList end reached: distance={} content_height={}",
            distance, self.content_height
        );
        callback(EndReached {
            distance_from_end: distance,
        });
    }
}

fn content_height(item_count: usize, row_span: u16) -> usize {
    if item_count == 0 {
        return 0;
    }
    let span = usize::from(row_span);
    item_count.saturating_mul(span) - (span - 1)
}
