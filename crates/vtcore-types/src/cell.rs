use serde::{Deserialize, Serialize};

use crate::style::Style;

/// A single grid cell: a user-perceived character cluster plus its style.
///
/// A cluster is treated as opaque text of column width 1 or 2 (§3). A wide
/// (width 2) cell is always immediately followed by a continuation cell
/// (`width == 0`, empty cluster) that shares the wide cell's style; this
/// invariant must be preserved by every buffer operation that can split or
/// shift cells (resize, insert, delete, scroll).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cluster: String,
    pub width: u8,
    pub style: Style,
    #[serde(skip)]
    pub dirty: bool,
}

impl Cell {
    pub fn new(ch: char) -> Self {
        Self::with_style(ch, Style::default())
    }

    pub fn with_style(ch: char, style: Style) -> Self {
        Self { cluster: ch.to_string(), width: 1, style, dirty: true }
    }

    /// Build the wide half of a two-column cluster.
    pub fn wide(cluster: String, style: Style) -> Self {
        Self { cluster, width: 2, style, dirty: true }
    }

    /// The zero-width sentinel that follows a wide cell.
    pub fn continuation(style: Style) -> Self {
        Self { cluster: String::new(), width: 0, style, dirty: true }
    }

    pub fn blank() -> Self {
        Self::new(' ')
    }

    pub fn blank_with_style(style: Style) -> Self {
        Self::with_style(' ', style)
    }

    pub fn is_continuation(&self) -> bool {
        self.width == 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// A row of cells plus a flag remembering whether content wrapped onto the
/// next line (consulted on resize/reflow; see §4.C).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub cells: Vec<Cell>,
    pub wrapped: bool,
}

impl Line {
    pub fn blank(width: u16) -> Self {
        Self::blank_with_style(width, Style::default())
    }

    pub fn blank_with_style(width: u16, style: Style) -> Self {
        Self {
            cells: (0..width).map(|_| Cell::blank_with_style(style)).collect(),
            wrapped: false,
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub fn get_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    /// True if this line has any non-default content, used by the damage
    /// engine's "skip obviously-equal rows" fast path.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.cluster == " " || c.cluster.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_cell_is_followed_by_continuation_sentinel() {
        let style = Style::default();
        let wide = Cell::wide("\u{4f60}".to_string(), style);
        let cont = Cell::continuation(style);
        assert_eq!(wide.width, 2);
        assert!(cont.is_continuation());
        assert_eq!(wide.style, cont.style);
    }

    #[test]
    fn blank_line_has_requested_width() {
        let line = Line::blank(10);
        assert_eq!(line.width(), 10);
        assert!(line.is_blank());
    }
}
