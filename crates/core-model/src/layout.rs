//! Screen layout: one status row on top, the body below.
//!
//! Coordinates are terminal cells (`u16`), origin at the top-left corner.
//! Invariants:
//! * `status` is row 0 and spans the full width.
//! * `body` starts at row `STATUS_ROWS` and spans the remaining rows; its
//!   height may be 0 on a one-row terminal.

use crate::{STATUS_ROWS, TermSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRegion {
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRegion {
    pub fn new(y: u16, width: u16, height: u16) -> Self {
        Self {
            y,
            width,
            height,
        }
    }

    /// Screen row of the `offset`-th row inside this region, if it fits.
    pub fn row(&self, offset: usize) -> Option<u16> {
        let offset = u16::try_from(offset).ok()?;
        (offset < self.height).then(|| self.y + offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub status: LayoutRegion,
    pub body: LayoutRegion,
}

impl Layout {
    pub fn from_size(size: TermSize) -> Self {
        let status_rows = STATUS_ROWS.min(size.height);
        Self {
            status: LayoutRegion::new(0, size.width, status_rows),
            body: LayoutRegion::new(status_rows, size.width, size.height.saturating_sub(status_rows)),
        }
    }
}
