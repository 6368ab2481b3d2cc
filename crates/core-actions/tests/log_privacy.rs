//! Logging must describe what happened (indices, lengths, action kinds)
//! without ever carrying the text of the document.

use core_actions::{DispatchOptions, handle_event};
use core_events::{InputEvent, KeyToken, NamedKey};
use core_model::{TermSize, ViewportState};
use core_text::Document;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::dispatcher::{Dispatch, with_default};
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Clone, Default)]
struct FieldCapture {
    records: Arc<Mutex<Vec<(String, String)>>>,
}

struct Collector<'a> {
    target: &'a str,
    out: &'a mut Vec<(String, String)>,
}

impl Visit for Collector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.out
            .push((self.target.to_string(), format!("{}={value:?}", field.name())));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.out
            .push((self.target.to_string(), format!("{}={value}", field.name())));
    }
}

impl<S> Layer<S> for FieldCapture
where
    S: Subscriber,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::always()
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut out = self.records.lock().unwrap();
        event.record(&mut Collector {
            target: event.metadata().target(),
            out: &mut out,
        });
    }
}

fn capture(f: impl FnOnce()) -> Vec<(String, String)> {
    let capture = FieldCapture::default();
    let records = capture.records.clone();
    let subscriber = Registry::default().with(capture.with_filter(LevelFilter::TRACE));
    with_default(&Dispatch::new(subscriber), f);
    records.lock().unwrap().clone()
}

#[test]
fn confirmed_line_content_never_logged() {
    let doc = Document::load("first\nsecret-token:42\n");
    let records = capture(|| {
        let opts = DispatchOptions::default();
        let vp = ViewportState::new(TermSize::new(40, 10));
        let t = handle_event(&InputEvent::Key(KeyToken::Char('j')), vp, &doc, &opts);
        let core_actions::ControllerState::Viewing(vp) = t.state else {
            panic!("still viewing");
        };
        let _ = handle_event(
            &InputEvent::Key(KeyToken::Named(NamedKey::Enter)),
            vp,
            &doc,
            &opts,
        );
    });
    assert!(records.iter().any(|(target, _)| target == "actions"));
    assert!(records.iter().any(|(_, field)| field == "len=15"));
    for (target, field) in &records {
        assert!(
            !field.contains("secret") && !field.contains("first"),
            "{target}: {field}"
        );
    }
}

#[test]
fn translation_logged_under_translate_target() {
    let records = capture(|| {
        let _ = core_actions::translate(&KeyToken::ctrl('d'));
    });
    assert!(records.iter().any(|(target, _)| target == "actions.translate"));
}
