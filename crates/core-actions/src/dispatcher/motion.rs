//! Motion sub-dispatch (cursor and window movement).
//!
//! Every motion delegates to the pure `ViewportState` operation of the same
//! name. Jumps repaint with a full sync; everything else flushes softly.

use super::DispatchOptions;
use crate::{MotionKind, PAGE_STEP, Repaint, Transition};
use core_model::ViewportState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    viewport: ViewportState,
    line_count: usize,
    options: &DispatchOptions,
) -> Transition {
    let next = match kind {
        MotionKind::Down => viewport.move_down(line_count),
        MotionKind::Up => viewport.move_up(line_count),
        MotionKind::Right => viewport.scroll_right(options.hscroll),
        MotionKind::Left => viewport.scroll_left(options.hscroll),
        MotionKind::PageDown => viewport.page_down(line_count, PAGE_STEP),
        MotionKind::PageUp => viewport.page_up(line_count, PAGE_STEP),
        MotionKind::Top => viewport.jump_to_top(),
        MotionKind::Bottom => viewport.jump_to_bottom(line_count),
    };
    let repaint = match kind {
        MotionKind::Top | MotionKind::Bottom => Repaint::Full,
        _ => Repaint::Soft,
    };
    if next != viewport {
        tracing::trace!(
            target: "viewport",
            ?kind,
            cursor_row = next.cursor_row,
            scroll_row = next.scroll_row,
            cursor_col = next.cursor_col,
            scroll_col = next.scroll_col,
            "moved"
        );
    }
    Transition::viewing(next, repaint)
}
