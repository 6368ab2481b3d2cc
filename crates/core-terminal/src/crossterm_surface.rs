//! Real terminal surface backed by crossterm.
//!
//! Screen output goes to the controlling terminal (`/dev/tty`), falling back
//! to stderr, so stdout stays reserved for the selection result. Every
//! acquired mode is recorded separately and undone on `leave`/`Drop`, which
//! also covers a partially failed `enter`.

use crate::{CellStyle, Frame, Surface, TerminalBackend, cluster_of, grid_pos, writer::Writer};
use anyhow::{Context, Result};
use core_events::InputEvent;
use core_text::char_width;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
};

/// Set while some surface holds raw mode or the alternate screen.
static ACQUIRED: AtomicBool = AtomicBool::new(false);

type Output = Box<dyn Write + Send>;

fn open_output() -> Output {
    match OpenOptions::new().write(true).open("/dev/tty") {
        Ok(tty) => Box::new(tty),
        Err(err) => {
            tracing::debug!(target: "terminal", %err, "no controlling tty; drawing to stderr");
            Box::new(io::stderr())
        }
    }
}

/// Best-effort terminal restoration for paths that cannot reach the owning
/// surface (panic hook). Does nothing unless a surface currently holds the
/// terminal; returns whether anything was restored.
pub fn restore_terminal() -> bool {
    if !ACQUIRED.swap(false, Ordering::SeqCst) {
        return false;
    }
    let mut out = open_output();
    let _ = execute!(out, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
    true
}

pub struct CrosstermSurface {
    out: Output,
    frame: Frame,
    cursor: Option<(u16, u16)>,
    raw_enabled: bool,
    alt_screen: bool,
}

impl CrosstermSurface {
    /// Acquire the terminal: raw mode, alternate screen, hidden cursor.
    pub fn open() -> Result<Self> {
        let (w, h) = terminal::size().context("query terminal size")?;
        let mut surface = Self {
            out: open_output(),
            frame: Frame::new(w, h),
            cursor: None,
            raw_enabled: false,
            alt_screen: false,
        };
        surface.enter()?;
        tracing::info!(target: "terminal", width = w, height = h, "terminal acquired");
        Ok(surface)
    }

    fn emit(&mut self, full: bool) -> Result<()> {
        let mut writer = Writer::new();
        if full {
            writer.clear_all();
        }
        writer.frame(&self.frame, self.cursor);
        writer.flush_to(&mut self.out)
    }
}

impl TerminalBackend for CrosstermSurface {
    fn enter(&mut self) -> Result<()> {
        if !self.raw_enabled {
            enable_raw_mode().context("enable raw mode")?;
            self.raw_enabled = true;
            ACQUIRED.store(true, Ordering::SeqCst);
        }
        if !self.alt_screen {
            execute!(self.out, EnterAlternateScreen, Hide).context("enter alternate screen")?;
            self.alt_screen = true;
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.alt_screen {
            execute!(self.out, LeaveAlternateScreen, Show)?;
            self.alt_screen = false;
        }
        if self.raw_enabled {
            disable_raw_mode()?;
            self.raw_enabled = false;
        }
        ACQUIRED.store(false, Ordering::SeqCst);
        Ok(())
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        if let Err(err) = self.leave() {
            tracing::warn!(target: "terminal", error = %err, "terminal restore failed");
        }
    }
}

impl Surface for CrosstermSurface {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((self.frame.width, self.frame.height))
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.frame.reset(w, h);
        self.cursor = None;
    }

    fn set_cell(&mut self, x: i32, y: i32, primary: char, accessories: &[char], style: CellStyle) {
        if let Some((x, y)) = grid_pos(x, y) {
            self.frame
                .set_cluster(x, y, cluster_of(primary, accessories), char_width(primary), style);
        }
    }

    fn show_cursor(&mut self, x: i32, y: i32) {
        self.cursor =
            grid_pos(x, y).filter(|&(x, y)| x < self.frame.width && y < self.frame.height);
    }

    fn show(&mut self) -> Result<()> {
        self.emit(false)
    }

    fn sync(&mut self) -> Result<()> {
        tracing::trace!(target: "terminal", "full repaint");
        self.emit(true)
    }

    fn poll_event(&mut self) -> Result<InputEvent> {
        core_input::read_event()
    }
}
