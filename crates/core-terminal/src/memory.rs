//! In-memory surface: a recorded grid driven by a scripted event queue.

use crate::{CellStyle, Frame, Surface, cluster_of, grid_pos};
use anyhow::{Result, anyhow};
use core_events::InputEvent;
use core_text::char_width;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct MemorySurface {
    frame: Frame,
    size: (u16, u16),
    cursor: Option<(u16, u16)>,
    events: VecDeque<InputEvent>,
    shows: usize,
    syncs: usize,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            frame: Frame::new(width, height),
            size: (width, height),
            cursor: None,
            events: VecDeque::new(),
            shows: 0,
            syncs: 0,
        }
    }

    /// Queue events returned by successive `poll_event` calls.
    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Grid as of the last draw.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn row_text(&self, y: u16) -> String {
        self.frame.row_text(y)
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Number of soft flushes.
    pub fn shows(&self) -> usize {
        self.shows
    }

    /// Number of forced full repaints.
    pub fn syncs(&self) -> usize {
        self.syncs
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn clear(&mut self) {
        let (w, h) = self.size;
        self.frame.reset(w, h);
        self.cursor = None;
    }

    fn set_cell(&mut self, x: i32, y: i32, primary: char, accessories: &[char], style: CellStyle) {
        if let Some((x, y)) = grid_pos(x, y) {
            let width = char_width(primary);
            self.frame
                .set_cluster(x, y, cluster_of(primary, accessories), width, style);
        }
    }

    fn show_cursor(&mut self, x: i32, y: i32) {
        self.cursor =
            grid_pos(x, y).filter(|&(x, y)| x < self.frame.width && y < self.frame.height);
    }

    fn show(&mut self) -> Result<()> {
        self.shows += 1;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.syncs += 1;
        Ok(())
    }

    /// Pops the next scripted event. A scripted resize also changes the size
    /// reported afterwards, like a real terminal would.
    fn poll_event(&mut self) -> Result<InputEvent> {
        let event = self
            .events
            .pop_front()
            .ok_or_else(|| anyhow!("event script exhausted"))?;
        if let InputEvent::Resize(w, h) = event {
            self.size = (w, h);
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::KeyToken;

    #[test]
    fn set_cell_measures_width() {
        let mut s = MemorySurface::new(5, 1);
        s.set_cell(0, 0, '漢', &[], CellStyle::default());
        s.set_cell(2, 0, 'e', &['\u{0301}'], CellStyle::default());
        assert_eq!(s.frame().line_clusters(0), vec!["漢", "e\u{0301}", " ", " "]);
    }

    #[test]
    fn negative_and_overflow_writes_dropped() {
        let mut s = MemorySurface::new(2, 2);
        s.set_cell(-1, 0, 'x', &[], CellStyle::default());
        s.set_cell(0, 5, 'y', &[], CellStyle::default());
        s.set_cell(2, 0, 'z', &[], CellStyle::default());
        assert_eq!(s.row_text(0), "  ");
        assert_eq!(s.row_text(1), "  ");
    }

    #[test]
    fn cursor_off_grid_hidden() {
        let mut s = MemorySurface::new(4, 4);
        s.show_cursor(1, 2);
        assert_eq!(s.cursor(), Some((1, 2)));
        s.show_cursor(-1, 2);
        assert_eq!(s.cursor(), None);
        s.show_cursor(4, 0);
        assert_eq!(s.cursor(), None);
    }

    #[test]
    fn scripted_events_then_exhaustion() {
        let mut s = MemorySurface::new(4, 4).with_events([
            InputEvent::Key(KeyToken::Char('j')),
            InputEvent::Resize(10, 3),
        ]);
        assert_eq!(s.poll_event().unwrap(), InputEvent::Key(KeyToken::Char('j')));
        assert_eq!(s.poll_event().unwrap(), InputEvent::Resize(10, 3));
        assert_eq!(s.size(), (10, 3));
        s.clear();
        assert_eq!(s.frame().width, 10);
        assert!(s.poll_event().is_err());
    }

    #[test]
    fn flush_counters() {
        let mut s = MemorySurface::new(1, 1);
        s.show().unwrap();
        s.sync().unwrap();
        s.show().unwrap();
        assert_eq!((s.shows(), s.syncs()), (2, 1));
    }
}
