//! Input controller: key translation and the pager's transition function.
//!
//! The controller is a two-state machine:
//! * `ControllerState::Viewing(ViewportState)` (initial): keys move the
//!   cursor or the window.
//! * `ControllerState::Terminated(SelectionResult)` (final): reached on
//!   confirm or cancel; the session driver stops polling.
//!
//! Flow per event: `key_translator::translate` maps a `KeyToken` to an
//! `Action`, then `dispatcher::dispatch` applies it to the current viewport
//! and returns a `Transition` (next state plus how to flush the frame).
//! `dispatcher::handle_event` wraps both steps and also folds in resizes.
//! Everything here is pure; the only side effect is `tracing` output.

pub mod dispatcher;
pub mod key_translator;

pub use dispatcher::{DispatchOptions, dispatch, handle_event};
pub use key_translator::translate;

use core_model::ViewportState;

/// Lines moved by a page up / page down.
pub const PAGE_STEP: usize = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Down,
    Up,
    Right,
    Left,
    PageDown,
    PageUp,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    /// Select the line under the cursor.
    Confirm,
    /// Leave without a selection.
    Cancel,
    /// Force a full physical repaint.
    Refresh,
    Noop,
}

/// Outcome of a session, produced once on termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub selected_line: Option<String>,
    pub terminated: bool,
}

impl SelectionResult {
    pub fn confirmed(line: impl Into<String>) -> Self {
        Self {
            selected_line: Some(line.into()),
            terminated: true,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            selected_line: None,
            terminated: true,
        }
    }

    /// Text reported for the selection: everything before the first `:` of
    /// the selected line, or the whole line when it has none. An empty
    /// selected line counts as no selection.
    pub fn output(&self) -> Option<&str> {
        self.selected_line
            .as_deref()
            .filter(|line| !line.is_empty())
            .map(|line| line.split_once(':').map_or(line, |(head, _)| head))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    Viewing(ViewportState),
    Terminated(SelectionResult),
}

impl ControllerState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, ControllerState::Terminated(_))
    }
}

/// How the next frame is flushed to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    /// Ordinary flush of the new frame.
    Soft,
    /// Clear and repaint every cell (terminal sync).
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ControllerState,
    pub repaint: Repaint,
}

impl Transition {
    pub fn viewing(viewport: ViewportState, repaint: Repaint) -> Self {
        Self {
            state: ControllerState::Viewing(viewport),
            repaint,
        }
    }

    pub fn terminated(result: SelectionResult) -> Self {
        Self {
            state: ControllerState::Terminated(result),
            repaint: Repaint::Soft,
        }
    }
}
