//! Session driver: the poll / dispatch / render loop.
//!
//! Each iteration adopts the surface's current size, renders the viewport,
//! flushes it (soft or full, as the previous transition asked), then blocks
//! for one event and feeds it to the controller. The loop ends when the
//! controller reaches its terminal state.

use anyhow::Result;
use core_actions::{ControllerState, DispatchOptions, Repaint, SelectionResult, handle_event};
use core_model::{TermSize, ViewportState};
use core_render::{StatusContext, render};
use core_terminal::Surface;
use core_text::Document;

pub fn run_session<S: Surface + ?Sized>(
    doc: &Document,
    surface: &mut S,
    options: &DispatchOptions,
    label: Option<&str>,
) -> Result<SelectionResult> {
    let line_count = doc.line_count();
    let ctx = StatusContext::with_label(label);
    let mut viewport = ViewportState::new(TermSize::from(surface.size()));
    let mut repaint = Repaint::Soft;
    let mut frames = 0u64;
    loop {
        viewport = viewport.resized(TermSize::from(surface.size()), line_count);
        render(doc, &viewport, &ctx, surface);
        match repaint {
            Repaint::Soft => surface.show()?,
            Repaint::Full => surface.sync()?,
        }
        frames += 1;

        let event = surface.poll_event()?;
        let transition = handle_event(&event, viewport, doc, options);
        repaint = transition.repaint;
        match transition.state {
            ControllerState::Viewing(next) => viewport = next,
            ControllerState::Terminated(result) => {
                tracing::debug!(target: "runtime", frames, "session_loop_exit");
                return Ok(result);
            }
        }
    }
}
