//! Dispatcher: applies an `Action` to the current viewport.
//!
//! Sub-modules:
//! * `motion` - vertical, horizontal and page movement plus jumps.
//!
//! `dispatch` is pure: it never touches the terminal and never panics on
//! document access. A failed line lookup on confirm is logged and turned into
//! a cancelled selection.

use crate::{Action, Repaint, SelectionResult, Transition, key_translator};
use core_events::InputEvent;
use core_model::{HScrollPolicy, TermSize, ViewportState};
use core_text::Document;

mod motion;

/// Tunables that shape transitions but are not part of the viewport state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    pub hscroll: HScrollPolicy,
}

/// Apply `action` to `viewport`. Returns the next controller state and how
/// the following frame should be flushed.
pub fn dispatch(
    action: Action,
    viewport: ViewportState,
    doc: &Document,
    options: &DispatchOptions,
) -> Transition {
    let line_count = doc.line_count();
    let viewport = viewport.clamp(line_count);
    tracing::debug!(target: "actions.dispatch", ?action, cursor_row = viewport.cursor_row, "dispatch");
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, viewport, line_count, options),
        Action::Confirm => confirm(viewport, doc),
        Action::Cancel => {
            tracing::info!(target: "actions", "selection_cancelled");
            Transition::terminated(SelectionResult::cancelled())
        }
        Action::Refresh => Transition::viewing(viewport, Repaint::Full),
        Action::Noop => Transition::viewing(viewport, Repaint::Soft),
    }
}

/// Translate and dispatch a single input event. Resizes adopt the new size,
/// restore the viewport invariants and force a full repaint.
pub fn handle_event(
    event: &InputEvent,
    viewport: ViewportState,
    doc: &Document,
    options: &DispatchOptions,
) -> Transition {
    match event {
        InputEvent::Key(token) => dispatch(key_translator::translate(token), viewport, doc, options),
        InputEvent::Resize(cols, rows) => {
            let next = viewport.resized(TermSize::new(*cols, *rows), doc.line_count());
            tracing::debug!(target: "actions.dispatch", cols, rows, scroll_row = next.scroll_row, "resize");
            Transition::viewing(next, Repaint::Full)
        }
    }
}

fn confirm(viewport: ViewportState, doc: &Document) -> Transition {
    if doc.is_empty() {
        return Transition::viewing(viewport, Repaint::Soft);
    }
    match doc.line_at(viewport.cursor_row) {
        Ok(line) => {
            tracing::info!(
                target: "actions",
                row = viewport.cursor_row,
                len = line.len(),
                "selection_confirmed"
            );
            Transition::terminated(SelectionResult::confirmed(line))
        }
        Err(err) => {
            tracing::error!(target: "actions", error = %err, "selection_lookup_failed");
            Transition::terminated(SelectionResult::cancelled())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ControllerState;
    use core_events::{KeyToken, NamedKey};

    fn vp() -> ViewportState {
        ViewportState::new(TermSize::new(40, 10))
    }

    fn enter() -> InputEvent {
        InputEvent::Key(KeyToken::Named(NamedKey::Enter))
    }

    #[test]
    fn confirm_on_empty_document_keeps_viewing() {
        let doc = Document::load("");
        let t = handle_event(&enter(), vp(), &doc, &DispatchOptions::default());
        assert_eq!(t, Transition::viewing(vp(), Repaint::Soft));
    }

    #[test]
    fn confirm_selects_cursor_line() {
        let doc = Document::load("x:1\ny:2\n");
        let mut start = vp();
        start.cursor_row = 1;
        let t = handle_event(&enter(), start, &doc, &DispatchOptions::default());
        assert_eq!(
            t.state,
            ControllerState::Terminated(SelectionResult::confirmed("y:2"))
        );
    }

    #[test]
    fn confirm_with_stale_cursor_is_clamped_first() {
        let doc = Document::load("only\n");
        let mut start = vp();
        start.cursor_row = 7;
        let t = dispatch(Action::Confirm, start, &doc, &DispatchOptions::default());
        assert_eq!(
            t.state,
            ControllerState::Terminated(SelectionResult::confirmed("only"))
        );
    }

    #[test]
    fn refresh_requests_full_repaint() {
        let doc = Document::load("a\n");
        let t = handle_event(
            &InputEvent::Key(KeyToken::ctrl('l')),
            vp(),
            &doc,
            &DispatchOptions::default(),
        );
        assert_eq!(t.repaint, Repaint::Full);
        assert!(!t.state.is_terminated());
    }

    #[test]
    fn resize_clamps_and_forces_full_repaint() {
        let text: String = (0..50).map(|i| format!("{i}\n")).collect();
        let doc = Document::load(text);
        let mut start = vp();
        start.scroll_row = 41;
        start.cursor_row = 45;
        let t = handle_event(&InputEvent::Resize(40, 30), start, &doc, &DispatchOptions::default());
        assert_eq!(t.repaint, Repaint::Full);
        let ControllerState::Viewing(next) = t.state else {
            panic!("resize must keep viewing");
        };
        assert_eq!(next.size, TermSize::new(40, 30));
        assert_eq!(next.scroll_row, 21);
        assert_eq!(next.cursor_row, 45);
        assert!(next.is_consistent(doc.line_count()));
    }
}
