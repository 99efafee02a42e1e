use std::sync::{Arc, Mutex};

use autocomplete::list::{
    KEY_DATA, OnEndReachedFn, RenderItemFn, RenderSeparatorFn, WINDOW_OFFSET_DATA,
};
use autocomplete::{
    Border, Element, EndReached, ItemInfo, KeyboardShouldPersistTaps, ListOptions, ListProps,
    Style, VirtualList, item_renderer,
};

struct Fixture {
    render_item: RenderItemFn<u32>,
    separator: Option<RenderSeparatorFn>,
    on_end_reached: Option<OnEndReachedFn>,
    options: ListOptions,
    style: Style,
    threshold: Option<f32>,
}

impl Fixture {
    fn new(height: u16) -> Self {
        Self {
            render_item: item_renderer(|info: ItemInfo<'_, u32>| Element::text(info.item.to_string())),
            separator: None,
            on_end_reached: None,
            options: ListOptions::new(),
            style: Style::new().height(height),
            threshold: None,
        }
    }

    fn props(&self) -> ListProps<'_, u32> {
        ListProps {
            render_item: &self.render_item,
            key_extractor: None,
            render_separator: self.separator.as_ref(),
            on_end_reached: self.on_end_reached.as_ref(),
            on_end_reached_threshold: self.threshold,
            keyboard_should_persist_taps: KeyboardShouldPersistTaps::default(),
            style: self.style.clone(),
            options: &self.options,
        }
    }

    /// Record every end-reached notification.
    fn record_end_reached(&mut self) -> Arc<Mutex<Vec<EndReached>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        self.on_end_reached = Some(Arc::new(move |info: EndReached| sink.lock().unwrap().push(info)));
        seen
    }
}

fn numbers(count: u32) -> Vec<u32> {
    (0..count).collect()
}

fn rendered_keys(list: &Element) -> Vec<String> {
    list.child_elements()
        .iter()
        .filter_map(|e| e.get_data(KEY_DATA).cloned())
        .collect()
}

// ============================================================================
// Windowing
// ============================================================================

#[test]
fn test_only_visible_rows_are_built() {
    let fixture = Fixture::new(3);
    let mut list = VirtualList::new();
    let element = list.render("list", &numbers(100), &fixture.props());

    assert_eq!(list.viewport(), Some(3));
    assert_eq!(list.content_height(), 100);
    assert_eq!(rendered_keys(&element), vec!["0", "1", "2"]);
    assert!(element.scrollable);
}

#[test]
fn test_everything_built_without_viewport() {
    let mut fixture = Fixture::new(0);
    fixture.style = Style::new();
    let mut list = VirtualList::new();
    let element = list.render("list", &numbers(7), &fixture.props());

    assert_eq!(list.viewport(), None);
    assert_eq!(element.child_elements().len(), 7);
}

#[test]
fn test_border_reduces_viewport() {
    let mut fixture = Fixture::new(6);
    fixture.style = fixture.style.border(Border::Single);
    let mut list = VirtualList::new();
    list.render("list", &numbers(20), &fixture.props());

    assert_eq!(list.viewport(), Some(4));
}

#[test]
fn test_measured_viewport_wins_over_style() {
    let fixture = Fixture::new(3);
    let mut list = VirtualList::new();
    list.set_viewport_height(5);
    let element = list.render("list", &numbers(10), &fixture.props());

    assert_eq!(list.viewport(), Some(5));
    assert_eq!(element.child_elements().len(), 5);
}

#[test]
fn test_scroll_window_and_offset() {
    let fixture = Fixture::new(3);
    let mut list = VirtualList::new();
    list.render("list", &numbers(10), &fixture.props());

    list.scroll_by(4);
    let element = list.render("list", &numbers(10), &fixture.props());
    assert_eq!(element.scroll_offset, 4);
    assert_eq!(rendered_keys(&element), vec!["4", "5", "6"]);
    assert_eq!(element.get_data(WINDOW_OFFSET_DATA).map(String::as_str), Some("0"));
}

#[test]
fn test_scroll_is_clamped() {
    let fixture = Fixture::new(3);
    let mut list = VirtualList::new();
    list.render("list", &numbers(10), &fixture.props());

    list.scroll_by(100);
    assert_eq!(list.scroll_offset(), 7);
    list.scroll_by(-100);
    assert_eq!(list.scroll_offset(), 0);
    list.scroll_to_offset(5);
    assert_eq!(list.scroll_offset(), 5);
    list.scroll_to_top();
    assert_eq!(list.scroll_offset(), 0);
}

#[test]
fn test_long_lists_scroll_to_the_last_item() {
    let mut fixture = Fixture::new(10);
    let seen = fixture.record_end_reached();
    let items = numbers(70_000);
    let mut list = VirtualList::new();
    list.render("list", &items, &fixture.props());
    assert_eq!(list.content_height(), 70_000);

    list.scroll_to_offset(65_000);
    assert_eq!(list.scroll_offset(), 65_000);
    assert!(seen.lock().unwrap().is_empty());

    list.scroll_to_offset(usize::MAX);
    let element = list.render("list", &items, &fixture.props());
    assert_eq!(list.scroll_offset(), 69_990);
    assert_eq!(rendered_keys(&element).last().map(String::as_str), Some("69999"));
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[EndReached {
            distance_from_end: 0
        }]
    );
}

#[test]
fn test_shrinking_data_clamps_offset() {
    let fixture = Fixture::new(3);
    let mut list = VirtualList::new();
    list.render("list", &numbers(10), &fixture.props());
    list.scroll_by(7);

    let element = list.render("list", &numbers(4), &fixture.props());
    assert_eq!(list.scroll_offset(), 1);
    assert_eq!(rendered_keys(&element), vec!["1", "2", "3"]);
}

#[test]
fn test_separators_between_items() {
    let mut fixture = Fixture::new(5);
    fixture.separator = Some(Arc::new(|index: usize| Element::text("-").id(format!("sep-{index}"))));
    let mut list = VirtualList::new();
    let element = list.render("list", &numbers(3), &fixture.props());

    let ids: Vec<_> = element.child_elements().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids.len(), 5);
    assert_eq!(ids[1], "sep-0");
    assert_eq!(ids[3], "sep-1");
    assert_eq!(list.content_height(), 5);
}

// ============================================================================
// End reached
// ============================================================================

#[test]
fn test_end_reached_fires_once_per_content_height() {
    let mut fixture = Fixture::new(4);
    fixture.threshold = Some(0.5);
    let seen = fixture.record_end_reached();
    let mut list = VirtualList::new();

    list.render("list", &numbers(20), &fixture.props());
    assert!(seen.lock().unwrap().is_empty());

    list.scroll_by(14);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[EndReached {
            distance_from_end: 2
        }]
    );

    // Still near the end: no repeat.
    list.scroll_by(1);
    list.render("list", &numbers(20), &fixture.props());
    assert_eq!(seen.lock().unwrap().len(), 1);

    // More content arrives and the end is near again.
    list.render("list", &numbers(21), &fixture.props());
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn test_end_reached_rearms_after_scrolling_away() {
    let mut fixture = Fixture::new(4);
    fixture.threshold = Some(0.5);
    let seen = fixture.record_end_reached();
    let mut list = VirtualList::new();

    list.render("list", &numbers(20), &fixture.props());
    list.scroll_by(16);
    assert_eq!(seen.lock().unwrap().len(), 1);

    list.scroll_to_top();
    list.scroll_by(16);
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn test_short_content_reaches_end_immediately() {
    let mut fixture = Fixture::new(10);
    let seen = fixture.record_end_reached();
    let mut list = VirtualList::new();

    list.render("list", &numbers(3), &fixture.props());
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[EndReached {
            distance_from_end: 0
        }]
    );
}

#[test]
fn test_default_threshold_is_two_viewports() {
    let mut fixture = Fixture::new(5);
    let seen = fixture.record_end_reached();
    let mut list = VirtualList::new();

    // 16 rows past the viewport, more than two viewports away.
    list.render("list", &numbers(21), &fixture.props());
    assert!(seen.lock().unwrap().is_empty());

    list.scroll_by(6);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[EndReached {
            distance_from_end: 10
        }]
    );
}

#[test]
fn test_empty_list_never_reaches_end() {
    let mut fixture = Fixture::new(5);
    let seen = fixture.record_end_reached();
    let mut list = VirtualList::new();

    list.render("list", &numbers(0), &fixture.props());
    assert!(seen.lock().unwrap().is_empty());
}

// ============================================================================
// Forwarded options
// ============================================================================

#[test]
fn test_options_forwarded_as_json_text() {
    let mut fixture = Fixture::new(3);
    fixture
        .options
        .insert("windowSize".to_string(), serde_json::json!(21));
    fixture
        .options
        .insert("extra".to_string(), serde_json::json!({ "a": [1, 2] }));
    let mut list = VirtualList::new();
    let element = list.render("list", &numbers(2), &fixture.props());

    assert_eq!(element.get_data("windowSize").map(String::as_str), Some("21"));
    assert_eq!(
        element.get_data("extra").map(String::as_str),
        Some(r#"{"a":[1,2]}"#)
    );
}
