//! Fruit picker: a fuzzy-filtered autocomplete in the terminal.
//!
//! The app owns the query and does the filtering; the widget only shows what
//! it is given. Candidates are rebuilt when the query or the page limit
//! changes and reused otherwise, so the widget's mirror stays put between
//! unrelated frames.

use std::sync::{Arc, Mutex};

use autocomplete::widget::{RenderTextInputFn, input_container_id, list_id, results_id};
use autocomplete::{
    Autocomplete, AutocompleteProps, Candidates, Element, EndReached, Event, InputEvent, ItemInfo,
    Key, KeyboardShouldPersistTaps, LineInput, Modifiers, MouseButton, Style, TextInputProps,
    TextInputRenderProps, convert_event, find_element, text_input_renderer,
};
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info, trace};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::error::AppError;
use crate::filter::WordFilter;
use crate::paint::Frame;
use crate::settings::Settings;
use crate::terminal::TerminalGuard;

const HELP: &str = "Tab results  Ctrl+F/Ctrl+B focus/blur  Up/Down scroll  Esc quit";

/// Callbacks from the widget, handled after each render.
#[derive(Debug)]
enum Message {
    ResultsShown(bool),
    EndReached(EndReached),
}

pub struct App {
    settings: Settings,
    widget: Autocomplete<String>,
    props: AutocompleteProps<String>,
    filter: WordFilter,
    query: String,
    limit: usize,
    total_matches: usize,
    picked: Option<String>,
    results_visible: bool,
    /// Text to push into the input on the next render.
    pending_value: Arc<Mutex<Option<String>>>,
    rx: UnboundedReceiver<Message>,
    /// Widget tree of the last render.
    root: Option<Element>,
    frame: Frame,
    running: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let (tx, rx) = unbounded_channel();
        let pending_value = Arc::new(Mutex::new(None));
        let props = build_props(&settings, tx, picker_input(Arc::clone(&pending_value)));

        Self {
            widget: Autocomplete::with_platform(settings.platform()),
            limit: settings.page_size,
            settings,
            props,
            filter: WordFilter::new(),
            query: String::new(),
            total_matches: 0,
            picked: None,
            results_visible: false,
            pending_value,
            rx,
            root: None,
            frame: Frame::default(),
            running: true,
        }
    }

    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = TerminalGuard::new()?;
        let mut events = EventStream::new();
        info!("Terminal ready: {:?}", terminal.size());

        while self.running {
            let screen = self.render();
            self.frame = terminal.draw(&screen)?;
            if self.sync_list_viewport() {
                continue;
            }

            let Some(event) = events.next().await else {
                break;
            };
            if let Some(event) = convert_event(event?) {
                self.handle_event(event);
            }
        }

        info!("Exiting");
        Ok(())
    }

    /// Render until the widget's callbacks stop changing the state.
    fn render(&mut self) -> Element {
        loop {
            let widget = self.widget.render(&self.props);
            if !self.drain_messages() {
                self.root = Some(widget.clone());
                return self.screen(widget);
            }
        }
    }

    /// Tell the widget how many list rows made it on screen.
    ///
    /// Returns whether that changed what the widget renders.
    fn sync_list_viewport(&mut self) -> bool {
        let id = list_id(&self.props.id);
        let Some(rect) = self.frame.rect_of(&id) else {
            return false;
        };
        let Some(list) = self.root.as_ref().and_then(|root| find_element(root, &id)) else {
            return false;
        };
        let chrome = list.style.border_edges().vertical_total()
            + list.style.padding.unwrap_or_default().vertical_total();
        self.widget.set_list_viewport(rect.height.saturating_sub(chrome))
    }

    /// Returns whether the candidates changed.
    fn drain_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.rx.try_recv() {
            match message {
                Message::ResultsShown(visible) => {
                    if visible != self.results_visible {
                        debug!("Results {}", if visible { "shown" } else { "hidden" });
                    }
                    self.results_visible = visible;
                }
                Message::EndReached(info) => changed |= self.next_page(info),
            }
        }
        changed
    }

    fn screen(&self, widget: Element) -> Element {
        let focus = if self.widget.is_focused() { "focused" } else { "blurred" };
        let results = match (self.props.hide_results, self.results_visible) {
            (true, _) => "results off",
            (false, true) => "results shown",
            (false, false) => "no results",
        };
        let status = match &self.picked {
            Some(word) => format!("Picked {word}  |  {focus}"),
            None => format!(
                "{} of {} matches  |  {results}  |  {focus}",
                self.props.data.len(),
                self.total_matches
            ),
        };

        Element::col()
            .id("screen")
            .child(Element::text("Fruit picker").style(Style::new().bold()))
            .child(Element::text(HELP).style(Style::new().dim()))
            .child(Element::text(status).id("status"))
            .child(widget)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    fn set_query(&mut self, query: String) {
        trace!("Query: {query:?}");
        self.query = query;
        self.picked = None;
        self.limit = self.settings.page_size;
        self.refilter();
    }

    fn refilter(&mut self) {
        let ranked = self.filter.top(&self.query, &self.settings.words, self.limit);
        self.total_matches = ranked.total;
        self.props.data = Candidates::new(ranked.words);
    }

    /// Load another page if there are more matches.
    fn next_page(&mut self, info: EndReached) -> bool {
        if self.picked.is_some() || self.limit >= self.total_matches {
            return false;
        }
        self.limit += self.settings.page_size;
        debug!(
            "End reached {} rows out, showing up to {} matches",
            info.distance_from_end, self.limit
        );
        self.refilter();
        true
    }

    fn pick(&mut self, word: String) {
        info!("Picked {word:?}");
        if let Ok(mut pending) = self.pending_value.lock() {
            *pending = Some(word.clone());
        }
        self.query = word.clone();
        self.picked = Some(word);
        self.props.data = Candidates::empty();
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Scroll { .. } => {
                self.widget.handle_event(&event);
            }
            Event::Press { x, y, .. } => self.press(x, y, &event),
            Event::Resize { width, height } => debug!("Resized to {width}x{height}"),
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Escape => self.running = false,
            Key::Char('c') if modifiers.ctrl => self.running = false,
            Key::Char('f') if modifiers.ctrl => self.widget.focus(),
            Key::Char('b') if modifiers.ctrl => self.widget.blur(),
            Key::Tab => {
                self.props.hide_results = !self.props.hide_results;
                info!("hide_results = {}", self.props.hide_results);
            }
            Key::Up | Key::Down => {
                let delta_y = if key == Key::Up { -1 } else { 1 };
                self.widget.handle_event(&Event::Scroll { x: 0, y: 0, delta_y });
            }
            _ if self.widget.is_focused() => match self.widget.handle_key(key, modifiers) {
                InputEvent::Changed(query) => self.set_query(query),
                InputEvent::Submitted(_) => {
                    if let Some(first) = self.props.data.first().cloned() {
                        self.pick(first);
                    }
                }
                InputEvent::Handled | InputEvent::Ignored => {}
            },
            _ => {}
        }
    }

    fn press(&mut self, x: u16, y: u16, event: &Event) {
        let results = results_id(&self.props.id);
        let in_results = self.frame.rect_of(&results).is_some_and(|r| r.contains(x, y));

        if !in_results {
            let input = input_container_id(&self.props.id);
            if self.frame.rect_of(&input).is_some_and(|r| r.contains(x, y)) {
                self.widget.focus();
            } else {
                self.widget.blur();
            }
            return;
        }

        let captured = self
            .root
            .as_ref()
            .and_then(|root| find_element(root, &results))
            .is_some_and(|el| el.should_capture(event));
        if captured {
            debug!("Press at {x},{y} captured by the results container");
            return;
        }

        let word = self.frame.hits_at(x, y).filter_map(|hit| hit.key.clone()).last();
        let handled = word.is_some();
        if let Some(word) = word {
            self.pick(word);
        }

        match self.settings.keyboard_should_persist_taps {
            KeyboardShouldPersistTaps::Always => {}
            KeyboardShouldPersistTaps::Never => self.widget.blur(),
            KeyboardShouldPersistTaps::Handled if !handled => self.widget.blur(),
            KeyboardShouldPersistTaps::Handled => {}
        }
    }
}

fn build_props(
    settings: &Settings,
    tx: UnboundedSender<Message>,
    input: RenderTextInputFn<String>,
) -> AutocompleteProps<String> {
    let show_tx = tx.clone();
    let mut props = AutocompleteProps::new(|info: ItemInfo<'_, String>| {
        Element::text(info.item.clone())
    })
    .id("picker")
    .hide_results(settings.hide_results)
    .on_show_results(move |visible| {
        let _ = show_tx.send(Message::ResultsShown(visible));
    })
    .show_results_edge_triggered(settings.edge_triggered)
    .key_extractor(|word, _| word.clone())
    .on_end_reached(move |info| {
        let _ = tx.send(Message::EndReached(info));
    })
    .keyboard_should_persist_taps(settings.keyboard_should_persist_taps)
    .list_options(settings.list_options.clone())
    .on_start_should_set_responder_capture(|event| {
        matches!(
            event,
            Event::Press {
                button: MouseButton::Right,
                ..
            }
        )
    })
    .placeholder(settings.placeholder.clone())
    .auto_focus(true)
    .render_text_input(input)
    .list_style(Style::new().height(settings.results_height));

    if let Some(threshold) = settings.end_reached_threshold {
        props = props.on_end_reached_threshold(threshold);
    }
    props
}

/// Line input that also accepts a value pushed from outside.
fn picker_input(pending: Arc<Mutex<Option<String>>>) -> RenderTextInputFn<String> {
    text_input_renderer(move |render: TextInputRenderProps<'_, String>| {
        let TextInputRenderProps {
            props,
            styles,
            mut binding,
        } = render;

        let fresh = !binding.is_bound();
        let input =
            binding.mount_with(|| Box::new(LineInput::new(props.input.default_value.clone())));
        if fresh && props.input.auto_focus {
            input.focus();
        }
        let pushed = pending.lock().ok().and_then(|mut pending| pending.take());
        if let Some(value) = pushed {
            input.set_value(&value);
        }

        let input_props = TextInputProps {
            style: Some(styles.input.merged(props.input.style.as_ref())),
            ..props.input.clone()
        };
        input.render(&input_props).id(format!("{}-text", props.id))
    })
}

#[cfg(test)]
mod tests {
    use autocomplete::list::KEY_DATA;

    use super::*;
    use crate::buffer::Buffer;
    use crate::paint::{Rect, paint};

    fn settings() -> Settings {
        Settings {
            words: ["apple", "apricot", "banana", "grape", "grapefruit", "papaya", "pear"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            page_size: 2,
            results_height: 3,
            ..Settings::default()
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(Event::Key {
                key: Key::Char(c),
                modifiers: Modifiers::new(),
            });
            app.render();
        }
    }

    fn paint_app(app: &mut App) {
        let screen = app.render();
        let mut buf = Buffer::new(30, 12);
        app.frame = paint(&screen, Rect::new(0, 0, 30, 12), &mut buf);
    }

    fn list_keys(app: &App) -> Vec<String> {
        let root = app.root.as_ref().unwrap();
        let list = find_element(root, "picker-list").unwrap();
        list.child_elements()
            .iter()
            .filter_map(|e| e.get_data(KEY_DATA).cloned())
            .collect()
    }

    #[test]
    fn test_starts_focused_without_results() {
        let mut app = App::new(settings());
        app.render();

        assert!(app.widget.is_focused());
        assert!(app.props.data.is_empty());
        assert!(!app.results_visible);
    }

    #[test]
    fn test_typing_filters_candidates() {
        let mut app = App::new(settings());
        app.render();
        type_text(&mut app, "ap");

        assert_eq!(app.query, "ap");
        assert_eq!(app.total_matches, 5);
        assert!(app.results_visible);
    }

    #[test]
    fn test_end_reached_loads_pages_until_exhausted() {
        let mut app = App::new(settings());
        app.render();
        type_text(&mut app, "ap");

        // Two viewport rows and a default threshold of two viewports pull
        // every page in at once.
        assert_eq!(app.props.data.len(), 5);
        assert_eq!(app.limit, 6);
    }

    #[test]
    fn test_clipped_list_uses_measured_viewport() {
        let mut app = App::new(settings());
        app.render();
        type_text(&mut app, "ap");
        assert_eq!(list_keys(&app).len(), 2);

        // Three rows of chrome and a three row input box leave two rows for
        // the list: one item and the bottom border.
        let mut buf = Buffer::new(30, 8);
        app.frame = paint(&app.render(), Rect::new(0, 0, 30, 8), &mut buf);
        assert!(app.sync_list_viewport());

        let screen = app.render();
        assert_eq!(list_keys(&app).len(), 1);
        app.frame = paint(&screen, Rect::new(0, 0, 30, 8), &mut buf);
        assert!(!app.sync_list_viewport());
    }

    #[test]
    fn test_tab_toggles_results() {
        let mut app = App::new(settings());
        app.render();
        type_text(&mut app, "gr");
        assert!(app.results_visible);

        app.handle_event(Event::Key {
            key: Key::Tab,
            modifiers: Modifiers::new(),
        });
        app.render();
        assert!(!app.results_visible);
        assert!(app.props.hide_results);
    }

    #[test]
    fn test_enter_picks_first_candidate() {
        let mut app = App::new(settings());
        app.render();
        type_text(&mut app, "banana");
        let first = app.props.data[0].clone();

        app.handle_event(Event::Key {
            key: Key::Enter,
            modifiers: Modifiers::new(),
        });
        app.render();

        assert_eq!(app.picked.as_deref(), Some(first.as_str()));
        assert!(!app.results_visible);
        let root = app.root.as_ref().unwrap();
        let input = find_element(root, "picker-text").unwrap();
        assert_eq!(input.input_view().map(|view| view.value.as_str()), Some(first.as_str()));
    }

    #[test]
    fn test_click_on_row_picks_it() {
        let mut app = App::new(settings());
        app.render();
        type_text(&mut app, "grape");
        paint_app(&mut app);

        let keys = list_keys(&app);
        let target = app
            .frame
            .hits
            .iter()
            .find(|hit| hit.key.as_deref() == Some(keys[0].as_str()))
            .map(|hit| hit.rect)
            .unwrap();
        app.handle_event(Event::Press {
            x: target.x,
            y: target.y,
            button: MouseButton::Left,
        });

        assert_eq!(app.picked.as_deref(), Some(keys[0].as_str()));
        assert!(app.widget.is_focused());
    }

    #[test]
    fn test_right_click_is_captured_by_results() {
        let mut app = App::new(settings());
        app.render();
        type_text(&mut app, "grape");
        paint_app(&mut app);

        let rect = app.frame.rect_of("picker-list").unwrap();
        app.handle_event(Event::Press {
            x: rect.x + 1,
            y: rect.y,
            button: MouseButton::Right,
        });
        assert!(app.picked.is_none());
    }

    #[test]
    fn test_click_outside_blurs() {
        let mut app = App::new(settings());
        app.render();
        paint_app(&mut app);

        app.handle_event(Event::Press {
            x: 0,
            y: 0,
            button: MouseButton::Left,
        });
        assert!(!app.widget.is_focused());

        let rect = app.frame.rect_of("picker-input").unwrap();
        app.handle_event(Event::Press {
            x: rect.x + 1,
            y: rect.y + 1,
            button: MouseButton::Left,
        });
        assert!(app.widget.is_focused());
    }

    #[test]
    fn test_keys_ignored_while_blurred() {
        let mut app = App::new(settings());
        app.render();
        app.handle_event(Event::Key {
            key: Key::Char('b'),
            modifiers: Modifiers::ctrl(),
        });
        type_text(&mut app, "ap");

        assert!(app.query.is_empty());
    }
}
