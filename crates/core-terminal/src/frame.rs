//! Cell grid backing every surface implementation.
//!
//! A `Cell` is either a leader (width >= 1, printable `cluster`) or a
//! continuation (width 0, empty `cluster`) covering the second column of a
//! wide leader. Emission walks leaders only, so a wide cluster is printed
//! exactly once.
//!
//! Invariants:
//! - Continuations immediately follow their leader; no gaps.
//! - A leader never extends past the right edge: a wide write that does not
//!   fit is dropped instead of being clipped.
//! - Overwriting half of a wide cell blanks the other half, so no orphaned
//!   leader or continuation survives a write.

use crate::CellStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Primary character followed by its accessories. Empty for continuations.
    pub cluster: String,
    /// Visual width in terminal columns. `0` designates a continuation cell.
    pub width: u8,
    pub style: CellStyle,
}

impl Cell {
    #[inline]
    pub fn leader(cluster: String, width: u16, style: CellStyle) -> Self {
        Self {
            cluster,
            width: width.clamp(1, 2) as u8,
            style,
        }
    }
    #[inline]
    pub fn continuation(style: CellStyle) -> Self {
        Self {
            cluster: String::new(),
            width: 0,
            style,
        }
    }
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.width > 0
    }
    #[inline]
    pub fn visual_width(&self) -> u16 {
        self.width as u16
    }
}

impl Default for Cell {
    fn default() -> Self {
        // Single space leader for blank areas.
        Cell {
            cluster: " ".to_string(),
            width: 1,
            style: CellStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    /// Blank every cell, adopting new dimensions.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Set a cluster at (x,y) and populate continuation cells for its width.
    /// Writes that fall outside the grid (fully or partially) are dropped.
    pub fn set_cluster(&mut self, x: u16, y: u16, cluster: String, width: u16, style: CellStyle) {
        let w = width.clamp(1, 2);
        if y >= self.height || u32::from(x) + u32::from(w) > u32::from(self.width) {
            return;
        }
        for dx in 0..w {
            self.detach(x + dx, y);
        }
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::leader(cluster, w, style);
        }
        for dx in 1..w {
            if let Some(c_idx) = self.index(x + dx, y) {
                self.cells[c_idx] = Cell::continuation(style);
            }
        }
    }

    /// Blank the partner half of a wide cell about to be overwritten at (x,y).
    fn detach(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let cell = &self.cells[idx];
        if !cell.is_leader() {
            if x > 0 {
                let lead = idx - 1;
                self.cells[lead] = Cell {
                    style: self.cells[lead].style,
                    ..Cell::default()
                };
            }
        } else if cell.width == 2 && x + 1 < self.width {
            let cont = idx + 1;
            self.cells[cont] = Cell {
                style: self.cells[cont].style,
                ..Cell::default()
            };
        }
    }

    /// Iterate leader cells of a row, yielding (&str, width, style, start_x).
    pub fn row_leaders(&self, y: u16) -> impl Iterator<Item = (&str, u16, CellStyle, u16)> + '_ {
        let width = if y < self.height { self.width } else { 0 };
        let start = y as usize * self.width as usize;
        let mut x = 0u16;
        std::iter::from_fn(move || {
            while x < width {
                let idx = start + x as usize;
                let cell = &self.cells[idx];
                if cell.is_leader() {
                    let w = cell.visual_width();
                    let out = (cell.cluster.as_str(), w, cell.style, x);
                    x = x.saturating_add(w);
                    return Some(out);
                } else {
                    x += 1; // stray continuation => advance
                }
            }
            None
        })
    }

    /// Leader clusters of a row concatenated (testing / diagnostics).
    pub fn row_text(&self, y: u16) -> String {
        self.row_leaders(y).map(|(c, _, _, _)| c).collect()
    }

    /// Collect leader cluster strings for a given row.
    pub fn line_clusters(&self, y: u16) -> Vec<&str> {
        self.row_leaders(y).map(|(c, _, _, _)| c).collect()
    }
}
