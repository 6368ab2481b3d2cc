//! Terminal writer: a batch of primitive terminal commands flushed once.
//!
//! A frame is translated into an ordered command list (move, style, print)
//! and written in a single pass. Invariants:
//! * Commands preserve ordering; nothing is flushed mid-frame.
//! * Positions are absolute with a (0,0) origin.
//! * Style changes are emitted only when the style differs from the previous
//!   printed run.
//! * Only leader cells are printed; a wide cluster is emitted once and the
//!   terminal advances over its continuation column.

use crate::{CellFlags, CellStyle, Color, Frame};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    SetStyle(CellStyle),
    Print(String),
    ClearAll,
    ShowCursor,
    HideCursor,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn set_style(&mut self, style: CellStyle) {
        self.cmds.push(Command::SetStyle(style));
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn clear_all(&mut self) {
        self.cmds.push(Command::ClearAll);
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Append the whole frame row by row, coalescing runs of equal style into
    /// one `Print`, then place (or hide) the cursor.
    pub fn frame(&mut self, frame: &Frame, cursor: Option<(u16, u16)>) {
        self.cmds.push(Command::HideCursor);
        let mut current: Option<CellStyle> = None;
        for y in 0..frame.height {
            self.move_to(0, y);
            let mut run = String::new();
            for (cluster, _, style, _) in frame.row_leaders(y) {
                if current != Some(style) {
                    self.print(std::mem::take(&mut run));
                    self.set_style(style);
                    current = Some(style);
                }
                run.push_str(cluster);
            }
            self.print(run);
        }
        if current.is_some_and(|s| !s.is_plain()) {
            self.set_style(CellStyle::default());
        }
        if let Some((x, y)) = cursor {
            self.move_to(x, y);
            self.cmds.push(Command::ShowCursor);
        }
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::SetStyle(style) => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Reset),
                        SetForegroundColor(map_color(style.fg)),
                        SetBackgroundColor(map_color(style.bg))
                    )?;
                    if style.flags.contains(CellFlags::BOLD) {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
                Command::ClearAll => {
                    queue!(out, Clear(ClearType::All))?;
                }
                Command::ShowCursor => {
                    queue!(out, Show)?;
                }
                Command::HideCursor => {
                    queue!(out, Hide)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn map_color(c: Color) -> CtColor {
    match c {
        Color::Reset => CtColor::Reset,
        Color::Blue => CtColor::DarkBlue,
        Color::White => CtColor::White,
    }
}
