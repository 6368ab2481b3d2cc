//! Width-aware renderer: maps document, viewport and status onto a surface.
//!
//! One pass per frame, never fails:
//! 1. Clear the surface.
//! 2. Body: each visible line is laid out with `core_text::layout_cells` and
//!    placed at screen row `index - scroll_row + 1`, shifted left by
//!    `scroll_col`. A cell that would start left of column 0 or end past the
//!    right edge is skipped whole, so a wide character never appears halved.
//! 3. Status line on row 0 in the status style, padded to the full width.
//! 4. Cursor at `(cursor_col - scroll_col, cursor_row - scroll_row + 1)`.
//!
//! Invariants:
//! - Rendering is a pure function of `(doc, state, ctx, size)`: drawing the
//!   same inputs twice yields the same grid.
//! - The second column of a wide cell is never written by another cell.
//! - The renderer only ever calls `Surface` methods; clipping beyond what is
//!   described above is left to the surface, which drops off-grid writes.

use core_model::{Layout, ViewportState};
use core_terminal::{CellStyle, Surface};
use core_text::{Document, PlacedCell, layout_cells};

pub mod status;
pub mod style;

pub use status::{StatusContext, StatusSegment, USAGE_HINT, compose_status, format_status};

/// Draw one full frame. Flushing (`show`/`sync`) is left to the caller.
pub fn render<S: Surface + ?Sized>(
    doc: &Document,
    state: &ViewportState,
    ctx: &StatusContext<'_>,
    surface: &mut S,
) {
    surface.clear();
    let layout = Layout::from_size(state.size);

    let visible = state.visible_lines(doc.line_count());
    let mut drawn = 0usize;
    for (offset, index) in visible.clone().enumerate() {
        let Some(row) = layout.body.row(offset) else {
            break;
        };
        // Indices come from `visible_lines`, always below `line_count`.
        let Ok(line) = doc.line_at(index) else {
            continue;
        };
        draw_cells(
            surface,
            &layout_cells(line),
            row,
            state.scroll_col,
            layout.body.width,
            style::body(),
        );
        drawn += 1;
    }

    if let Some(row) = layout.status.row(0) {
        draw_status(surface, ctx, row, layout.status.width);
    }

    let (x, y) = state.screen_cursor();
    surface.show_cursor(to_coord(x), to_coord(y));

    tracing::trace!(
        target: "render",
        first = visible.start,
        rows = drawn,
        scroll_col = state.scroll_col,
        "frame"
    );
}

/// Place laid-out cells on `row`, shifted by `scroll_col` and clipped to
/// `[0, width)`. Returns the number of cells written.
pub fn draw_cells<S: Surface + ?Sized>(
    surface: &mut S,
    cells: &[PlacedCell],
    row: u16,
    scroll_col: usize,
    width: u16,
    style: CellStyle,
) -> usize {
    let mut written = 0;
    for cell in cells {
        let Some(x) = cell.col.checked_sub(scroll_col) else {
            continue;
        };
        if x + usize::from(cell.width) > usize::from(width) {
            // Cells are ordered by column; everything after is off-screen too.
            break;
        }
        surface.set_cell(
            to_coord(x as i64),
            i32::from(row),
            cell.primary,
            &cell.accessories,
            style,
        );
        written += 1;
    }
    written
}

fn draw_status<S: Surface + ?Sized>(surface: &mut S, ctx: &StatusContext<'_>, row: u16, width: u16) {
    let style = style::status();
    for x in 0..width {
        surface.set_cell(i32::from(x), i32::from(row), ' ', &[], style);
    }
    let text = format_status(&compose_status(ctx));
    draw_cells(surface, &layout_cells(&text), row, 0, width, style);
}

fn to_coord(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::TermSize;
    use core_terminal::MemorySurface;

    #[test]
    fn straddling_left_edge_skipped() {
        let mut s = MemorySurface::new(4, 1);
        let cells = layout_cells("a漢b");
        // "漢" spans columns 1..3; scrolled by 2 it would start at -1.
        let n = draw_cells(&mut s, &cells, 0, 2, 4, CellStyle::default());
        assert_eq!(n, 1);
        assert_eq!(s.row_text(0), " b  ");
    }

    #[test]
    fn straddling_right_edge_skipped() {
        let mut s = MemorySurface::new(3, 1);
        let n = draw_cells(&mut s, &layout_cells("ab漢"), 0, 0, 3, CellStyle::default());
        assert_eq!(n, 2);
        assert_eq!(s.row_text(0), "ab ");
    }

    #[test]
    fn huge_offsets_saturate() {
        assert_eq!(to_coord(i64::MAX), i32::MAX);
        assert_eq!(to_coord(-5), -5);
    }

    #[test]
    fn empty_document_draws_status_only() {
        let doc = Document::load("");
        let state = ViewportState::new(TermSize::new(60, 3));
        let mut s = MemorySurface::new(60, 3);
        render(&doc, &state, &StatusContext::default(), &mut s);
        assert!(s.row_text(0).starts_with(USAGE_HINT));
        assert_eq!(s.row_text(1).trim(), "");
        assert_eq!(s.cursor(), Some((0, 1)));
    }
}
