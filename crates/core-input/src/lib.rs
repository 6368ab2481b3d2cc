//! Blocking terminal input backed by `crossterm::event::read`.
//!
//! The pager is single-threaded: the session driver calls `read_event` and
//! blocks until the terminal reports something the controller understands.
//! Events with no mapping (mouse, focus, paste, key releases) are skipped here
//! so callers only ever see `InputEvent::Key` or `InputEvent::Resize`.

mod key_token;

use anyhow::{Context, Result};
use core_events::{InputEvent, KeyToken};
use crossterm::event::Event as CEvent;

/// Translate one crossterm event. `None` means "not relevant to the pager".
pub fn map_event(event: &CEvent) -> Option<InputEvent> {
    match event {
        CEvent::Key(key) => key_token::map_key_event(key).map(InputEvent::Key),
        CEvent::Resize(cols, rows) => Some(InputEvent::Resize(*cols, *rows)),
        CEvent::FocusGained | CEvent::FocusLost | CEvent::Mouse(_) | CEvent::Paste(_) => None,
    }
}

/// Block until the next relevant input event.
pub fn read_event() -> Result<InputEvent> {
    loop {
        let raw = crossterm::event::read().context("reading terminal event")?;
        match map_event(&raw) {
            Some(event) => {
                log_input_event(&event);
                return Ok(event);
            }
            None => tracing::trace!(target: "input", "event_skipped"),
        }
    }
}

#[inline]
pub(crate) fn log_input_event(event: &InputEvent) {
    match event {
        InputEvent::Key(token) => {
            tracing::trace!(target: "input", kind = token_kind(token), "key")
        }
        InputEvent::Resize(cols, rows) => {
            tracing::debug!(target: "input", cols, rows, "resize")
        }
    }
}

fn token_kind(token: &KeyToken) -> &'static str {
    match token {
        KeyToken::Char(_) => "char",
        KeyToken::Named(_) => "named",
        KeyToken::Chord { .. } => "chord",
    }
}
