//! Width-aware cell layout reducer.
//!
//! Contract:
//! - Input: the characters of one line (or the status text).
//! - Output: ordered `PlacedCell`s, one per non-zero-width character, each
//!   carrying the column it starts at, its width, the primary character and
//!   any zero-width accessories that followed it.
//! - Columns are an unclamped running total starting at 0. Callers subtract
//!   their horizontal scroll offset and clip against the visible range
//!   afterwards, so a cell's position never depends on what is visible.
//!
//! Zero-width characters attach to the cell emitted before them. When a line
//! starts with zero-width characters a blank placeholder cell of width 1 is
//! synthesized to carry them. A width-2 cell covers `col` and `col + 1`; the
//! next cell starts at `col + 2`, so nothing is ever placed in the second
//! column of a wide cell.

use crate::width::{char_width, display_char};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell {
    pub col: usize,
    pub width: u16,
    pub primary: char,
    pub accessories: Vec<char>,
}

impl PlacedCell {
    fn new(col: usize, width: u16, primary: char) -> Self {
        Self {
            col,
            width,
            primary,
            accessories: Vec::new(),
        }
    }

    /// First column after this cell.
    #[inline]
    pub fn end(&self) -> usize {
        self.col + usize::from(self.width)
    }
}

/// Lay out `text` into cells. Pure; the same input always yields the same cells.
pub fn layout_cells(text: &str) -> Vec<PlacedCell> {
    let mut out = Vec::with_capacity(text.len());
    let mut pending: Option<PlacedCell> = None;
    let mut col = 0usize;
    for c in text.chars() {
        let width = char_width(c);
        if width == 0 {
            pending
                .get_or_insert_with(|| PlacedCell::new(col, 1, ' '))
                .accessories
                .push(c);
            continue;
        }
        if let Some(cell) = pending.take() {
            col = cell.end();
            out.push(cell);
        }
        pending = Some(PlacedCell::new(col, width, display_char(c)));
    }
    if let Some(cell) = pending {
        out.push(cell);
    }
    out
}
