pub mod element;
pub mod error;
pub mod event;
pub mod list;
pub mod platform;
pub mod text_input;
pub mod types;
pub mod widget;

pub use element::{Content, Element, InputView, ResponderCaptureFn, find_element};
pub use error::{Error, Result};
pub use event::{Event, Key, Modifiers, MouseButton, convert_event};
pub use list::{
    EndReached, ItemInfo, KeyboardShouldPersistTaps, ListOptions, ListProps, VirtualList,
    item_renderer,
};
pub use platform::{Platform, StyleSheet};
pub use text_input::{LineInput, TextEditResult, TextInput, TextInputProps};
pub use types::*;
pub use widget::{
    Autocomplete, AutocompleteProps, Candidates, InputEvent, TextInputRenderProps,
    text_input_renderer,
};
