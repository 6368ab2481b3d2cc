use core_actions::{
    ControllerState, DispatchOptions, Repaint, SelectionResult, Transition, handle_event,
};
use core_events::{InputEvent, KeyToken, NamedKey};
use core_model::{TermSize, ViewportState};
use core_text::Document;
use pretty_assertions::assert_eq;

/// Feed events until the controller terminates; returns the final transition.
fn drive(doc: &Document, size: TermSize, events: &[InputEvent]) -> Transition {
    let opts = DispatchOptions::default();
    let mut state = ControllerState::Viewing(ViewportState::new(size));
    let mut last = Transition {
        state: state.clone(),
        repaint: Repaint::Soft,
    };
    for event in events {
        let ControllerState::Viewing(vp) = state else {
            break;
        };
        last = handle_event(event, vp, doc, &opts);
        state = last.state.clone();
    }
    last
}

fn keys(tokens: &[KeyToken]) -> Vec<InputEvent> {
    tokens.iter().cloned().map(InputEvent::Key).collect()
}

fn final_viewport(t: &Transition) -> ViewportState {
    match &t.state {
        ControllerState::Viewing(v) => *v,
        ControllerState::Terminated(r) => panic!("terminated: {r:?}"),
    }
}

#[test]
fn down_down_enter_selects_third_line_prefix() {
    let doc = Document::load("x:1\ny:2\nz:3\n");
    let t = drive(
        &doc,
        TermSize::new(80, 10),
        &keys(&['j'.into(), KeyToken::ctrl('n'), NamedKey::Enter.into()]),
    );
    let ControllerState::Terminated(result) = t.state else {
        panic!("expected termination");
    };
    assert_eq!(result, SelectionResult::confirmed("z:3"));
    assert_eq!(result.output(), Some("z"));
}

#[test]
fn down_enter_selects_second_line() {
    let doc = Document::load("x:1\ny:2\nz:3\n");
    let t = drive(
        &doc,
        TermSize::new(80, 24),
        &keys(&[NamedKey::Down.into(), NamedKey::Enter.into()]),
    );
    let ControllerState::Terminated(result) = t.state else {
        panic!("expected termination");
    };
    assert_eq!(result.output(), Some("y"));
}

#[test]
fn escape_cancels() {
    let doc = Document::load("x:1\ny:2\nz:3\n");
    let t = drive(
        &doc,
        TermSize::new(80, 24),
        &keys(&['j'.into(), NamedKey::Esc.into()]),
    );
    assert_eq!(t.state, ControllerState::Terminated(SelectionResult::cancelled()));
}

#[test]
fn events_after_termination_are_ignored() {
    let doc = Document::load("a\nb\n");
    let t = drive(
        &doc,
        TermSize::new(80, 24),
        &keys(&[NamedKey::Enter.into(), 'j'.into(), NamedKey::Enter.into()]),
    );
    assert_eq!(t.state, ControllerState::Terminated(SelectionResult::confirmed("a")));
}

#[test]
fn page_down_in_hundred_lines() {
    let text: String = (0..100).map(|i| format!("line {i}\n")).collect();
    let doc = Document::load(text);
    let t = drive(&doc, TermSize::new(80, 10), &keys(&[KeyToken::ctrl('d')]));
    let vp = final_viewport(&t);
    assert_eq!((vp.scroll_row, vp.cursor_row), (29, 29));
}

#[test]
fn page_down_truncated_lands_on_last_line() {
    let text: String = (0..40).map(|i| format!("line {i}\n")).collect();
    let doc = Document::load(text);
    let t = drive(&doc, TermSize::new(80, 24), &keys(&[' '.into()]));
    let vp = final_viewport(&t);
    assert_eq!((vp.scroll_row, vp.cursor_row), (17, 39));
}

#[test]
fn jump_to_bottom_in_short_document() {
    let doc = Document::load("1\n2\n3\n4\n5\n");
    let t = drive(&doc, TermSize::new(80, 10), &keys(&['>'.into()]));
    let vp = final_viewport(&t);
    assert_eq!((vp.scroll_row, vp.cursor_row), (0, 4));
    assert_eq!(t.repaint, Repaint::Full);
}

#[test]
fn bottom_then_top_returns_to_origin() {
    let text: String = (0..60).map(|i| format!("{i}\n")).collect();
    let doc = Document::load(text);
    let t = drive(
        &doc,
        TermSize::new(30, 10),
        &keys(&['>'.into(), 'l'.into(), '<'.into()]),
    );
    let vp = final_viewport(&t);
    assert_eq!((vp.scroll_row, vp.cursor_row, vp.scroll_col), (0, 0, 0));
}

#[test]
fn resize_mid_session_keeps_cursor_visible() {
    let text: String = (0..60).map(|i| format!("{i}\n")).collect();
    let doc = Document::load(text);
    let mut events = keys(&['j'; 20].map(KeyToken::from));
    events.push(InputEvent::Resize(30, 5));
    let t = drive(&doc, TermSize::new(30, 24), &events);
    let vp = final_viewport(&t);
    assert_eq!(vp.cursor_row, 20);
    assert!(vp.is_consistent(doc.line_count()));
    assert!(vp.cursor_row < vp.scroll_row + vp.body_height());
    assert_eq!(t.repaint, Repaint::Full);
}

#[test]
fn confirm_on_line_without_colon_keeps_whole_line() {
    let doc = Document::load("no colon here\n");
    let t = drive(&doc, TermSize::new(80, 24), &keys(&[NamedKey::Enter.into()]));
    let ControllerState::Terminated(result) = t.state else {
        panic!("expected termination");
    };
    assert_eq!(result.output(), Some("no colon here"));
}
