//! Cell styles used by the renderer.
//!
//! The status line is drawn bold blue on white across the whole row so it
//! reads as one inverted bar; the body uses the terminal defaults.

use core_terminal::{CellFlags, CellStyle, Color};

pub const fn body() -> CellStyle {
    CellStyle::new(Color::Reset, Color::Reset, CellFlags::empty())
}

pub const fn status() -> CellStyle {
    CellStyle::new(Color::Blue, Color::White, CellFlags::BOLD)
}
