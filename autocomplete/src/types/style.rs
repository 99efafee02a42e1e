use serde::Deserialize;

use super::{Border, Color, Edges, Position, TextStyle};

/// Visual and box properties of an element.
///
/// Every field is optional so styles can be layered: [`Style::merge`] lets the
/// later style win field by field, the same way a list of styles is flattened.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    /// Per-side border widths. A zero side is not drawn.
    pub border_width: Option<Edges>,
    pub border_radius: Option<u16>,
    pub text_style: Option<TextStyle>,
    pub margin: Option<Edges>,
    pub padding: Option<Edges>,
    /// Fixed height in rows.
    pub height: Option<u16>,
    pub flex: Option<u16>,
    pub position: Option<Position>,
    pub left: Option<i16>,
    pub right: Option<i16>,
    pub z_index: Option<i16>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_width(mut self, width: Edges) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border_radius(mut self, radius: u16) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style = Some(self.text_style.unwrap_or_default().bold());
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style = Some(self.text_style.unwrap_or_default().dim());
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn flex(mut self, flex: u16) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn right(mut self, right: i16) -> Self {
        self.right = Some(right);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Layer `other` on top of `self`. Fields set in `other` win.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.clone().or_else(|| self.background.clone()),
            foreground: other.foreground.clone().or_else(|| self.foreground.clone()),
            border: other.border.or(self.border),
            border_color: other
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            border_width: other.border_width.or(self.border_width),
            border_radius: other.border_radius.or(self.border_radius),
            text_style: other.text_style.or(self.text_style),
            margin: other.margin.or(self.margin),
            padding: other.padding.or(self.padding),
            height: other.height.or(self.height),
            flex: other.flex.or(self.flex),
            position: other.position.or(self.position),
            left: other.left.or(self.left),
            right: other.right.or(self.right),
            z_index: other.z_index.or(self.z_index),
        }
    }

    /// Merge an optional caller style over this one.
    pub fn merged(&self, other: Option<&Style>) -> Style {
        match other {
            Some(other) => self.merge(other),
            None => self.clone(),
        }
    }

    /// Whether a border should be drawn on the given side.
    pub fn has_border(&self) -> bool {
        !matches!(self.border, None | Some(Border::None))
            && self.border_width.is_none_or(|w| !w.is_zero())
    }

    /// Effective border widths, defaulting to one cell on every side.
    pub fn border_edges(&self) -> Edges {
        if !self.has_border() {
            return Edges::default();
        }
        self.border_width
            .map(|w| Edges::new(w.top.min(1), w.right.min(1), w.bottom.min(1), w.left.min(1)))
            .unwrap_or(Edges::all(1))
    }
}
