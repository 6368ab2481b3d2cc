use core_model::{HScrollPolicy, TermSize, ViewportState};
use core_render::{StatusContext, render};
use core_terminal::MemorySurface;
use core_text::Document;
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "a", "Z", " ", "漢", "字", "e\u{0301}", "\u{200d}", "\t", "\n", "\r\n", ":", "👍",
    ]);
    prop::collection::vec(pieces, 0..80).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn grid_stays_well_formed(
        text in text_strategy(),
        width in 1u16..24,
        height in 1u16..8,
        downs in 0usize..10,
        rights in 0usize..30,
    ) {
        let doc = Document::load(text.as_str());
        let lc = doc.line_count();
        let mut state = ViewportState::new(TermSize::new(width, height));
        for _ in 0..downs {
            state = state.move_down(lc);
        }
        for _ in 0..rights {
            state = state.scroll_right(HScrollPolicy::HalfWidth);
        }
        let mut s = MemorySurface::new(width, height);
        render(&doc, &state, &StatusContext::default(), &mut s);
        let frame = s.frame().clone();
        for y in 0..height {
            for x in 0..width {
                let cell = frame.cell(x, y).unwrap();
                if !cell.is_leader() {
                    // Continuations sit right after a wide leader.
                    prop_assert!(x > 0);
                    prop_assert_eq!(frame.cell(x - 1, y).unwrap().width, 2);
                }
            }
        }
        render(&doc, &state, &StatusContext::default(), &mut s);
        prop_assert_eq!(s.frame(), &frame);
    }
}
