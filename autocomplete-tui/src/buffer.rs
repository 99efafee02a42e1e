//! Cell grid the painter draws into and the terminal diffs.

use autocomplete::{Rgb, TextStyle};
use unicode_width::UnicodeWidthChar;

pub const DEFAULT_FG: Rgb = Rgb::new(230, 230, 230);
pub const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a wide character drawn in the previous cell.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

/// Display width of a character in cells.
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Row-major grid of cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    fn filled(width: u16, height: u16, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; usize::from(width) * usize::from(height)],
        }
    }

    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, Cell::default())
    }

    /// A buffer that differs from every painted one, forcing a full redraw.
    pub fn invalid(width: u16, height: u16) -> Self {
        let sentinel = Cell {
            char: '\0',
            ..Cell::default()
        };
        Self::filled(width, height, sentinel)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell at `(x, y)`, `None` off the grid.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let index = self.index(x, y)?;
        self.cells.get_mut(index)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Text of row `y`, continuation cells skipped.
    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        let width = usize::from(self.width);
        self.cells[usize::from(y) * width..][..width]
            .iter()
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    /// Cells of `self` that differ from `previous`, in row order.
    ///
    /// Both buffers must have the same size.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_none() {
        let mut buf = Buffer::new(3, 2);
        assert!(buf.get_mut(2, 1).is_some());
        assert!(buf.get_mut(3, 0).is_none());
        assert!(buf.get_mut(0, 2).is_none());
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let before = Buffer::new(4, 2);
        let mut after = before.clone();
        if let Some(cell) = after.get_mut(1, 1) {
            cell.char = 'x';
        }

        let changed: Vec<_> = after.diff(&before).map(|(x, y, cell)| (x, y, cell.char)).collect();
        assert_eq!(changed, [(1, 1, 'x')]);
    }

    #[test]
    fn test_invalid_buffer_differs_everywhere() {
        let painted = Buffer::new(2, 2);
        assert_eq!(painted.diff(&Buffer::invalid(2, 2)).count(), 4);
    }

    #[test]
    fn test_char_width() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('界'), 2);
    }
}
