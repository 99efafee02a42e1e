//! Paints an element tree into a [`Buffer`].
//!
//! Layout is a single column: children stack top to bottom and span the
//! width of their parent. A fixed height clips, anything else is sized to its
//! content. Absolute elements stay in the flow but honor `left` and `right`.

use autocomplete::list::{KEY_DATA, WINDOW_OFFSET_DATA};
use autocomplete::{Border, Content, Edges, Element, Position, Rgb, Style, TextStyle};
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, DEFAULT_BG, DEFAULT_FG, char_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    fn inset(&self, edges: Edges) -> Rect {
        Rect {
            x: self.x.saturating_add(edges.left),
            y: self.y.saturating_add(edges.top),
            width: self.width.saturating_sub(edges.horizontal_total()),
            height: self.height.saturating_sub(edges.vertical_total()),
        }
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Where an element landed on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub id: String,
    pub rect: Rect,
    /// List key of the element, for list rows.
    pub key: Option<String>,
}

/// What a paint pass produced besides the cells.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Painted elements, parents before children.
    pub hits: Vec<Hit>,
    /// Cursor of the focused text input.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    /// Painted elements under a point, outermost first.
    pub fn hits_at(&self, x: u16, y: u16) -> impl Iterator<Item = &Hit> {
        self.hits.iter().filter(move |hit| hit.rect.contains(x, y))
    }

    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.hits.iter().find(|hit| hit.id == id).map(|hit| hit.rect)
    }
}

#[derive(Debug, Clone, Copy)]
struct Brush {
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            style: TextStyle::new(),
        }
    }
}

impl Brush {
    fn apply(self, style: &Style) -> Self {
        Self {
            fg: style.foreground.as_ref().map_or(self.fg, |c| c.to_rgb()),
            bg: style.background.as_ref().map_or(self.bg, |c| c.to_rgb()),
            style: style.text_style.unwrap_or(self.style),
        }
    }

    fn dimmed(self) -> Self {
        Self {
            style: self.style.dim(),
            ..self
        }
    }

    fn reversed(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
            ..self
        }
    }
}

/// Paint `root` into `area` of `buf`.
pub fn paint(root: &Element, area: Rect, buf: &mut Buffer) -> Frame {
    let mut frame = Frame::default();
    paint_element(root, area, Brush::default(), buf, &mut frame);
    frame
}

/// Rows an element occupies, margins included.
pub fn measure(element: &Element) -> u16 {
    let style = &element.style;
    let margin = style.margin.unwrap_or_default();
    let height = match style.height {
        Some(height) => height,
        None => {
            let chrome = style.border_edges().vertical_total()
                + style.padding.unwrap_or_default().vertical_total();
            let content = match &element.content {
                Content::None => 0,
                Content::Text(_) | Content::Input(_) => 1,
                Content::Children(children) => children
                    .iter()
                    .map(measure)
                    .fold(0u16, u16::saturating_add),
            };
            content.saturating_add(chrome)
        }
    };
    height.saturating_add(margin.vertical_total())
}

fn paint_element(element: &Element, area: Rect, brush: Brush, buf: &mut Buffer, frame: &mut Frame) {
    let style = &element.style;
    let margin = style.margin.unwrap_or_default();
    // A clipped area loses the bottom margin before any content rows.
    let mut outer = anchored(area, style).inset(Edges { bottom: 0, ..margin });
    outer.height = outer
        .height
        .min(measure(element).saturating_sub(margin.vertical_total()));
    if outer.is_empty() {
        return;
    }

    let brush = brush.apply(style);
    if style.background.is_some() {
        fill(buf, outer, brush);
    }
    let border = style.border_edges();
    if !border.is_zero() {
        draw_border(buf, outer, style, border, brush);
    }
    let inner = outer
        .inset(border)
        .inset(style.padding.unwrap_or_default());

    frame.hits.push(Hit {
        id: element.id.clone(),
        rect: outer,
        key: element.get_data(KEY_DATA).cloned(),
    });
    if inner.is_empty() {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            put_str(buf, inner.x, inner.y, &truncate(text, inner.width), brush);
        }
        Content::Input(view) => {
            let brush = if element.disabled { brush.dimmed() } else { brush };
            let shown: Vec<char> = match view.mask {
                Some(mask) => view.value.chars().map(|_| mask).collect(),
                None => view.value.chars().collect(),
            };
            let cursor = view.cursor.min(shown.len());

            let (start, before_cursor) = scroll_start(&shown, cursor, inner.width);

            if shown.is_empty() {
                if let Some(placeholder) = &view.placeholder {
                    let dim = brush.dimmed();
                    put_str(buf, inner.x, inner.y, &truncate(placeholder, inner.width), dim);
                }
            } else {
                let mut x = inner.x;
                for (index, c) in shown.iter().enumerate().skip(start) {
                    let w = char_width(*c);
                    if x.saturating_add(w) > inner.right() {
                        break;
                    }
                    let selected = view.selection.is_some_and(|(from, to)| index >= from && index < to);
                    put_char(buf, x, inner.y, *c, if selected { brush.reversed() } else { brush });
                    x += w;
                }
            }

            if view.focused {
                let x = inner.x.saturating_add(before_cursor);
                frame.cursor = Some((x.min(inner.right() - 1), inner.y));
            }
        }
        Content::Children(children) => {
            let mut skip = if element.scrollable {
                element
                    .get_data(WINDOW_OFFSET_DATA)
                    .and_then(|offset| offset.parse::<u16>().ok())
                    .unwrap_or(0)
            } else {
                0
            };

            let mut y = inner.y;
            for child in children {
                let height = measure(child);
                if skip >= height {
                    skip -= height;
                    continue;
                }
                skip = 0;
                if y >= inner.bottom() {
                    break;
                }
                let rows = height.min(inner.bottom() - y);
                paint_element(child, Rect::new(inner.x, y, inner.width, rows), brush, buf, frame);
                y += rows;
            }
        }
    }
}

/// Apply `left` and `right` offsets of absolutely positioned elements.
fn anchored(area: Rect, style: &Style) -> Rect {
    if style.position != Some(Position::Absolute) {
        return area;
    }
    let left = style.left.unwrap_or(0).max(0) as u16;
    let right = style.right.unwrap_or(0).max(0) as u16;
    Rect {
        x: area.x.saturating_add(left),
        width: area.width.saturating_sub(left + right),
        ..area
    }
}

/// First character to draw so the cursor stays inside a field `width` cells
/// wide, and the cells between that character and the cursor.
fn scroll_start(chars: &[char], cursor: usize, width: u16) -> (usize, u16) {
    let mut start = cursor;
    let mut used = 0u16;
    while start > 0 {
        let next = used.saturating_add(char_width(chars[start - 1]));
        if next >= width {
            break;
        }
        used = next;
        start -= 1;
    }
    (start, used)
}

/// Cut `text` to `max_width` cells, ending in an ellipsis when shortened.
pub fn truncate(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = char_width(c) as usize;
        if width + w > target {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}

fn fill(buf: &mut Buffer, rect: Rect, brush: Brush) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            put_char(buf, x, y, ' ', brush);
        }
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, c: char, brush: Brush) {
    let Some(cell) = buf.get_mut(x, y) else { return };
    cell.char = c;
    cell.fg = brush.fg;
    cell.bg = brush.bg;
    cell.style = brush.style;
    cell.wide_continuation = false;

    if char_width(c) == 2
        && let Some(next) = buf.get_mut(x + 1, y)
    {
        next.char = ' ';
        next.bg = brush.bg;
        next.wide_continuation = true;
    }
}

fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, brush: Brush) {
    let mut x = x;
    for c in text.chars() {
        put_char(buf, x, y, c, brush);
        x = x.saturating_add(char_width(c));
    }
}

struct BorderSet {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl BorderSet {
    const SINGLE: Self = Self::new('─', '│', '┌', '┐', '└', '┘');
    const ROUNDED: Self = Self::new('─', '│', '╭', '╮', '╰', '╯');
    const DOUBLE: Self = Self::new('═', '║', '╔', '╗', '╚', '╝');
    const THICK: Self = Self::new('━', '┃', '┏', '┓', '┗', '┛');

    const fn new(
        horizontal: char,
        vertical: char,
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
    ) -> Self {
        Self {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// A single border with a radius draws rounded corners.
    fn for_style(style: &Style) -> &'static Self {
        match style.border {
            Some(Border::Double) => &Self::DOUBLE,
            Some(Border::Thick) => &Self::THICK,
            Some(Border::Rounded) => &Self::ROUNDED,
            _ if style.border_radius.is_some_and(|r| r > 0) => &Self::ROUNDED,
            _ => &Self::SINGLE,
        }
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: &Style, edges: Edges, brush: Brush) {
    let set = BorderSet::for_style(style);
    let brush = Brush {
        fg: style.border_color.as_ref().map_or(brush.fg, |c| c.to_rgb()),
        ..brush
    };
    let last_x = rect.right() - 1;
    let last_y = rect.bottom() - 1;

    if edges.top > 0 {
        for x in rect.x..rect.right() {
            put_char(buf, x, rect.y, set.horizontal, brush);
        }
    }
    if edges.bottom > 0 {
        for x in rect.x..rect.right() {
            put_char(buf, x, last_y, set.horizontal, brush);
        }
    }

    for y in rect.y..rect.bottom() {
        let at_top = y == rect.y && edges.top > 0;
        let at_bottom = y == last_y && edges.bottom > 0;
        if edges.left > 0 {
            let c = if at_top {
                set.top_left
            } else if at_bottom {
                set.bottom_left
            } else {
                set.vertical
            };
            put_char(buf, rect.x, y, c, brush);
        }
        if edges.right > 0 {
            let c = if at_top {
                set.top_right
            } else if at_bottom {
                set.bottom_right
            } else {
                set.vertical
            };
            put_char(buf, last_x, y, c, brush);
        }
    }
}

#[cfg(test)]
mod tests {
    use autocomplete::{Autocomplete, AutocompleteProps, InputView, Platform, Style};

    use super::*;

    fn paint_rows(root: &Element, width: u16, height: u16) -> (Vec<String>, Frame) {
        let mut buf = Buffer::new(width, height);
        let frame = paint(root, Rect::new(0, 0, width, height), &mut buf);
        let rows = (0..height).map(|y| buf.row_text(y).trim_end().to_string()).collect();
        (rows, frame)
    }

    #[test]
    fn test_scroll_start_keeps_cursor_visible() {
        let chars: Vec<char> = "abcdefgh".chars().collect();
        assert_eq!(scroll_start(&chars, 3, 10), (0, 3));
        assert_eq!(scroll_start(&chars, 8, 5), (4, 4));
        assert_eq!(scroll_start(&chars, 0, 5), (0, 0));
    }

    #[test]
    fn test_very_long_wide_input() {
        let value = "界".repeat(40_000);
        let input = Element::input(InputView {
            cursor: 40_000,
            focused: true,
            value,
            ..InputView::default()
        });
        let chars: Vec<char> = input.input_view().unwrap().value.chars().collect();
        assert_eq!(scroll_start(&chars, 40_000, 10), (39_996, 8));

        let (rows, frame) = paint_rows(&input, 10, 1);
        assert_eq!(rows[0], "界界界界");
        assert_eq!(frame.cursor, Some((8, 0)));
    }

    #[test]
    fn test_clipped_bottom_margin_keeps_content() {
        let el = Element::col().child(
            Element::text("kept").style(Style::new().margin(Edges::new(0, 0, 2, 0))),
        );
        let (rows, _) = paint_rows(&el, 6, 1);
        assert_eq!(rows[0], "kept");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_measure_stacks_children() {
        let el = Element::col()
            .child(Element::text("a"))
            .child(Element::text("b").style(Style::new().margin(Edges::new(1, 0, 1, 0))));
        assert_eq!(measure(&el), 4);
        assert_eq!(measure(&el.clone().style(Style::new().height(2))), 2);
    }

    #[test]
    fn test_paints_widget_with_borders() {
        let mut widget = Autocomplete::with_platform(Platform::Ios);
        let props = AutocompleteProps::<String>::default()
            .data(vec!["apple".to_string(), "apricot".to_string()])
            .list_style(Style::new().height(3));
        let root = widget.render(&props);
        let (rows, frame) = paint_rows(&root, 12, 6);

        assert_eq!(rows[0], "╭──────────╮");
        assert_eq!(rows[1], "│          │");
        assert_eq!(rows[2], "╰──────────╯");
        assert_eq!(rows[3], "│apple     │");
        assert_eq!(rows[4], "│apricot   │");
        assert_eq!(rows[5], "╰──────────╯");

        let keys: Vec<_> = frame.hits.iter().filter_map(|h| h.key.clone()).collect();
        assert_eq!(keys, vec!["0", "1"]);
        assert_eq!(
            frame.hits_at(3, 4).filter_map(|h| h.key.as_deref()).next(),
            Some("1")
        );
    }

    #[test]
    fn test_focused_input_reports_cursor() {
        let mut widget = Autocomplete::with_platform(Platform::Ios);
        let props = AutocompleteProps::<String>::default().default_value("ab");
        widget.render(&props);
        widget.focus();
        let root = widget.render(&props);
        let (rows, frame) = paint_rows(&root, 12, 3);

        // Border, then one cell of input padding.
        assert_eq!(rows[1], "│ ab       │");
        assert_eq!(frame.cursor, Some((4, 1)));
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let mut widget = Autocomplete::with_platform(Platform::Ios);
        let props = AutocompleteProps::<String>::default().placeholder("Find");
        let root = widget.render(&props);
        let (rows, frame) = paint_rows(&root, 12, 3);

        assert_eq!(rows[1], "│ Find     │");
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn test_scrolled_list_paints_window() {
        let mut widget = Autocomplete::with_platform(Platform::Android);
        let data: Vec<String> = (0..10).map(|i| format!("item {i}")).collect();
        let props = AutocompleteProps::<String>::default()
            .data(data)
            .list_style(Style::new().height(3));
        widget.render(&props);
        widget.handle_event(&autocomplete::Event::Scroll {
            x: 0,
            y: 0,
            delta_y: 5,
        });
        let root = widget.render(&props);
        let (rows, _) = paint_rows(&root, 14, 6);

        assert_eq!(rows[3], " │item 5    │");
        assert_eq!(rows[4], " │item 6    │");
        assert_eq!(rows[5], " ╰──────────╯");
    }
}
