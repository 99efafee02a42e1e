//! Element composition for the autocomplete widget.

use super::props::AutocompleteProps;
use crate::element::Element;
use crate::list::ListProps;
use crate::platform::StyleSheet;

/// Element id of the input region.
pub fn input_container_id(id: &str) -> String {
    format!("{id}-input")
}

/// Element id of the results container.
pub fn results_id(id: &str) -> String {
    format!("{id}-results")
}

/// Element id of the suggestion list.
pub fn list_id(id: &str) -> String {
    format!("{id}-list")
}

/// List configuration for this render, passed through without interpretation.
pub(super) fn list_props<'a, T>(
    props: &'a AutocompleteProps<T>,
    styles: &StyleSheet,
) -> ListProps<'a, T> {
    ListProps {
        render_item: &props.render_item,
        key_extractor: props.key_extractor.as_ref(),
        render_separator: props.render_separator.as_ref(),
        on_end_reached: props.on_end_reached.as_ref(),
        on_end_reached_threshold: props.on_end_reached_threshold,
        keyboard_should_persist_taps: props.keyboard_should_persist_taps,
        style: styles.list.merged(props.list_style.as_ref()),
        options: &props.list_options,
    }
}

/// Assemble the widget: the input region, then the results container unless
/// results are suppressed. `list` is the rendered suggestion list when the
/// list is visible.
pub(super) fn compose<T>(
    props: &AutocompleteProps<T>,
    styles: &StyleSheet,
    input: Element,
    list: Option<Element>,
) -> Element {
    let input_region = Element::col()
        .id(input_container_id(&props.id))
        .style(styles.input_container.merged(props.input_container_style.as_ref()))
        .child(input);

    let root = Element::col()
        .id(props.id.clone())
        .style(styles.container.merged(props.container_style.as_ref()))
        .child(input_region);

    if props.hide_results {
        return root;
    }

    let mut results = Element::col()
        .id(results_id(&props.id))
        .style(props.list_container_style.clone().unwrap_or_default())
        .responder_capture(Some(props.on_start_should_set_responder_capture.clone()));
    if let Some(list) = list {
        results = results.child(list);
    }

    root.child(results)
}
