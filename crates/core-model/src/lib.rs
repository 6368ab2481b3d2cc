//! Viewport model: scroll offsets, cursor and terminal dimensions.
//!
//! `ViewportState` is a small `Copy` value threaded through pure transition
//! functions (`self -> Self`). Nothing here touches the terminal; the session
//! driver refreshes `size` from the surface before each draw and the
//! controller applies one operation per key.
//!
//! Core invariants (hold after every public operation and after `clamp`):
//! * `cursor_row < max(line_count, 1)`; with an empty document the cursor and
//!   scroll rows are both 0.
//! * `scroll_row <= max_scroll(line_count)` where
//!   `max_scroll = line_count.saturating_sub(body_height)`.
//! * `scroll_row <= cursor_row < scroll_row + body_height`: the viewport
//!   follows the cursor, never the other way around.
//! * `scroll_col <= cursor_col < scroll_col + width`: the cursor column is
//!   always inside the horizontal window, including right after a resize.
//!
//! Every operation first normalizes the incoming state with `clamp`, so a
//! stale state (e.g. after the terminal shrank) can never leak into the
//! result. Vertical operations are no-ops on an empty document.

mod layout;
pub use layout::{Layout, LayoutRegion};

/// Rows reserved above the body for the status line.
pub const STATUS_ROWS: u16 = 1;

/// Terminal dimensions in cells. Both dimensions are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermSize {
    pub width: u16,
    pub height: u16,
}

impl TermSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Rows available for content. Never 0 so window arithmetic stays sound on
    /// a one-row terminal (the body row is simply off-screen there).
    pub fn body_height(&self) -> usize {
        usize::from(self.height.saturating_sub(STATUS_ROWS)).max(1)
    }
}

impl From<(u16, u16)> for TermSize {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

/// How far the horizontal window moves when the cursor leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HScrollPolicy {
    /// Half the terminal width (at least one column).
    #[default]
    HalfWidth,
    /// A fixed number of columns (at least one).
    Fixed(u16),
}

impl HScrollPolicy {
    pub fn step(&self, size: TermSize) -> usize {
        match *self {
            HScrollPolicy::HalfWidth => usize::from(size.width / 2).max(1),
            HScrollPolicy::Fixed(n) => usize::from(n).max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportState {
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub scroll_row: usize,
    pub scroll_col: usize,
    pub size: TermSize,
}

impl ViewportState {
    /// Cursor and viewport at the origin.
    pub fn new(size: TermSize) -> Self {
        Self {
            cursor_row: 0,
            cursor_col: 0,
            scroll_row: 0,
            scroll_col: 0,
            size,
        }
    }

    pub fn body_height(&self) -> usize {
        self.size.body_height()
    }

    /// Largest valid `scroll_row` for a document of `line_count` lines.
    pub fn max_scroll(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.body_height())
    }

    /// Half-open range of line indices visible in the body.
    pub fn visible_lines(&self, line_count: usize) -> std::ops::Range<usize> {
        let start = self.scroll_row.min(line_count);
        let end = (self.scroll_row + self.body_height()).min(line_count);
        start..end
    }

    /// Terminal position of the cursor: `(col, row)` relative to the screen,
    /// the body starting one row below the status line.
    pub fn screen_cursor(&self) -> (i64, i64) {
        let x = self.cursor_col as i64 - self.scroll_col as i64;
        let y = self.cursor_row as i64 - self.scroll_row as i64 + i64::from(STATUS_ROWS);
        (x, y)
    }

    /// Refresh the terminal size and restore the invariants for it.
    pub fn resized(self, size: TermSize, line_count: usize) -> Self {
        Self { size, ..self }.clamp(line_count)
    }

    /// Restore all invariants without otherwise moving the cursor.
    pub fn clamp(self, line_count: usize) -> Self {
        let mut next = self;
        if line_count == 0 {
            next.cursor_row = 0;
            next.scroll_row = 0;
        } else {
            let body = next.body_height();
            next.cursor_row = next.cursor_row.min(line_count - 1);
            next.scroll_row = next.scroll_row.min(next.max_scroll(line_count));
            if next.cursor_row < next.scroll_row {
                next.scroll_row = next.cursor_row;
            } else if next.cursor_row >= next.scroll_row + body {
                next.scroll_row = next.cursor_row + 1 - body;
            }
        }
        next.clamp_cols()
    }

    fn clamp_cols(self) -> Self {
        let mut next = self;
        let width = usize::from(next.size.width).max(1);
        next.scroll_col = next.scroll_col.min(next.cursor_col);
        if next.cursor_col - next.scroll_col >= width {
            next.scroll_col = next.cursor_col + 1 - width;
        }
        next
    }

    /// True when every invariant holds for `line_count`.
    pub fn is_consistent(&self, line_count: usize) -> bool {
        let rows_ok = if line_count == 0 {
            self.cursor_row == 0 && self.scroll_row == 0
        } else {
            self.cursor_row < line_count
                && self.scroll_row <= self.max_scroll(line_count)
                && self.scroll_row <= self.cursor_row
                && self.cursor_row < self.scroll_row + self.body_height()
        };
        rows_ok
            && self.scroll_col <= self.cursor_col
            && self.cursor_col - self.scroll_col < usize::from(self.size.width)
    }

    pub fn move_down(self, line_count: usize) -> Self {
        let mut next = self.clamp(line_count);
        if line_count == 0 {
            return next;
        }
        next.cursor_row = (next.cursor_row + 1).min(line_count - 1);
        if next.cursor_row > next.scroll_row + next.body_height() - 1
            && next.scroll_row < next.max_scroll(line_count)
        {
            next.scroll_row += 1;
        }
        next
    }

    pub fn move_up(self, line_count: usize) -> Self {
        let mut next = self.clamp(line_count);
        if line_count == 0 {
            return next;
        }
        next.cursor_row = next.cursor_row.saturating_sub(1);
        if next.cursor_row < next.scroll_row {
            next.scroll_row -= 1;
        }
        next
    }

    /// Scroll forward by `step` lines and put the cursor on the new top line.
    /// When the bottom clamp truncates the shift the cursor is pinned to the
    /// last line instead.
    pub fn page_down(self, line_count: usize, step: usize) -> Self {
        let mut next = self.clamp(line_count);
        if line_count == 0 {
            return next;
        }
        let previous = next.scroll_row;
        next.scroll_row = (previous + step).min(next.max_scroll(line_count));
        next.cursor_row = if next.scroll_row - previous < step {
            line_count - 1
        } else {
            next.scroll_row
        };
        tracing::trace!(
            target: "viewport",
            from = previous,
            to = next.scroll_row,
            truncated = next.cursor_row != next.scroll_row,
            "page_down"
        );
        next
    }

    /// Scroll back by `step` lines (clamped at 0) and put the cursor on the
    /// new top line.
    pub fn page_up(self, line_count: usize, step: usize) -> Self {
        let mut next = self.clamp(line_count);
        if line_count == 0 {
            return next;
        }
        next.scroll_row = next.scroll_row.saturating_sub(step);
        next.cursor_row = next.scroll_row;
        next
    }

    /// Move the cursor one column right. When it leaves the window the
    /// window shifts by the policy step, or further if the step alone would
    /// still leave the cursor outside.
    pub fn scroll_right(self, policy: HScrollPolicy) -> Self {
        let mut next = self.clamp_cols();
        next.cursor_col += 1;
        let width = usize::from(next.size.width).max(1);
        if next.cursor_col - next.scroll_col >= width {
            next.scroll_col = (next.scroll_col + policy.step(next.size))
                .max(next.cursor_col + 1 - width)
                .min(next.cursor_col);
            tracing::trace!(target: "viewport", scroll_col = next.scroll_col, "hscroll_right");
        }
        next
    }

    pub fn scroll_left(self, policy: HScrollPolicy) -> Self {
        let mut next = self.clamp_cols();
        next.cursor_col = next.cursor_col.saturating_sub(1);
        if next.cursor_col < next.scroll_col {
            next.scroll_col = next
                .scroll_col
                .saturating_sub(policy.step(next.size))
                .min(next.cursor_col);
            tracing::trace!(target: "viewport", scroll_col = next.scroll_col, "hscroll_left");
        }
        next
    }

    /// Back to the first line and the left edge. The cursor column is kept
    /// when it still fits the window.
    pub fn jump_to_top(self) -> Self {
        Self {
            scroll_row: 0,
            cursor_row: 0,
            scroll_col: 0,
            cursor_col: self.cursor_col.min(usize::from(self.size.width).saturating_sub(1)),
            ..self
        }
    }

    pub fn jump_to_bottom(self, line_count: usize) -> Self {
        let mut next = self.clamp(line_count);
        next.scroll_col = 0;
        next.cursor_col = next.cursor_col.min(usize::from(next.size.width).saturating_sub(1));
        if line_count == 0 {
            return next;
        }
        next.scroll_row = next.max_scroll(line_count);
        next.cursor_row = line_count - 1;
        next
    }
}
