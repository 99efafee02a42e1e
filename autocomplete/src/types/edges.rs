use serde::Deserialize;

/// Per-side cell counts for padding and margin.
///
/// Deserializes from a single number (all sides) or a map of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "EdgesRepr")]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgesRepr {
    Uniform(u16),
    Sides {
        #[serde(default)]
        top: u16,
        #[serde(default)]
        right: u16,
        #[serde(default)]
        bottom: u16,
        #[serde(default)]
        left: u16,
    },
}

impl From<EdgesRepr> for Edges {
    fn from(repr: EdgesRepr) -> Self {
        match repr {
            EdgesRepr::Uniform(cells) => Self::all(cells),
            EdgesRepr::Sides {
                top,
                right,
                bottom,
                left,
            } => Self::new(top, right, bottom, left),
        }
    }
}

impl Edges {
    /// Sides in CSS order.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(cells: u16) -> Self {
        Self::new(cells, cells, cells, cells)
    }

    pub const fn horizontal(cells: u16) -> Self {
        Self::new(0, cells, 0, cells)
    }

    pub const fn left(cells: u16) -> Self {
        Self::new(0, 0, 0, cells)
    }

    pub const fn without_top(self) -> Self {
        Self { top: 0, ..self }
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top + self.bottom
    }

    pub const fn is_zero(&self) -> bool {
        self.horizontal_total() == 0 && self.vertical_total() == 0
    }
}
