//! Virtualized list primitive.
//!
//! The list provides:
//! - Virtualization (only rows inside the viewport are built)
//! - Item keys, separators and forwarded options
//! - End-reached notifications for pagination

mod props;
mod state;

pub use props::{
    DEFAULT_END_REACHED_THRESHOLD, EndReached, ItemInfo, KeyExtractorFn, KeyboardShouldPersistTaps,
    ListOptions, ListProps, OnEndReachedFn, RenderItemFn, RenderSeparatorFn, item_renderer,
};
pub use state::{KEY_DATA, VirtualList, WINDOW_OFFSET_DATA};
