//! Terminal surface abstraction plus crossterm and in-memory implementations.
//!
//! The pager core never talks to a terminal library directly. It draws into a
//! `Surface` (a grid of styled cells with a cursor) and pulls input through
//! `Surface::poll_event`. Two implementations ship here:
//! * `CrosstermSurface`: raw-mode, alternate-screen terminal. Acquisition and
//!   release are tied to the value's lifetime (`Drop` restores the terminal).
//! * `MemorySurface`: a recorded grid fed by a scripted event queue, used to
//!   drive the renderer and the whole session in tests.

use anyhow::Result;
use bitflags::bitflags;
use core_events::InputEvent;

mod crossterm_surface;
pub mod frame;
mod memory;
pub mod writer;

pub use crossterm_surface::{CrosstermSurface, restore_terminal};
pub use frame::{Cell, Frame};
pub use memory::MemorySurface;

/// Raw-mode lifecycle of a real terminal.
pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
}

/// Capability set the pager requires from a terminal.
///
/// Coordinates are signed so callers can hand over positions computed from
/// scroll offsets without pre-clipping: anything outside the grid is silently
/// dropped by the surface.
pub trait Surface {
    /// Current size as `(columns, rows)`.
    fn size(&self) -> (u16, u16);
    /// Blank every cell (and pick up a changed terminal size).
    fn clear(&mut self);
    /// Place `primary` plus trailing zero-width `accessories` at `(x, y)`.
    fn set_cell(&mut self, x: i32, y: i32, primary: char, accessories: &[char], style: CellStyle);
    /// Position the visible cursor. Off-grid positions hide it.
    fn show_cursor(&mut self, x: i32, y: i32);
    /// Flush pending changes.
    fn show(&mut self) -> Result<()>;
    /// Flush forcing a full physical repaint.
    fn sync(&mut self) -> Result<()>;
    /// Block until the next input event.
    fn poll_event(&mut self) -> Result<InputEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Reset,
    Blue,
    White,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        const BOLD = 0b0000_0001;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub flags: CellFlags,
}

impl CellStyle {
    pub const fn new(fg: Color, bg: Color, flags: CellFlags) -> Self {
        Self { fg, bg, flags }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Concatenate a primary character and its accessories into one printable
/// cluster.
pub(crate) fn cluster_of(primary: char, accessories: &[char]) -> String {
    let mut s = String::with_capacity(4 + accessories.len() * 3);
    s.push(primary);
    s.extend(accessories.iter().copied());
    s
}

/// Convert signed surface coordinates into grid coordinates.
pub(crate) fn grid_pos(x: i32, y: i32) -> Option<(u16, u16)> {
    Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?))
}
