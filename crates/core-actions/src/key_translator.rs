//! Key token to `Action` translation.
//!
//! Stateless: every binding is a single key (no counts, no pending
//! prefixes). Unbound keys map to `Action::Noop`, which still repaints.
//!
//! | Keys                       | Action            |
//! |----------------------------|-------------------|
//! | Enter                      | Confirm           |
//! | Esc, Ctrl-C, `q`           | Cancel            |
//! | Down, Ctrl-N, `j`          | Motion(Down)      |
//! | Up, Ctrl-P, `k`            | Motion(Up)        |
//! | Right, `l`                 | Motion(Right)     |
//! | Left, `h`                  | Motion(Left)      |
//! | Ctrl-D, Space              | Motion(PageDown)  |
//! | Ctrl-U, Ctrl-B, `b`        | Motion(PageUp)    |
//! | `<`                        | Motion(Top)       |
//! | `>`                        | Motion(Bottom)    |
//! | Ctrl-L                     | Refresh           |

use crate::{Action, MotionKind};
use core_events::{KeyToken, NamedKey};

pub fn translate(token: &KeyToken) -> Action {
    let action = match token {
        KeyToken::Named(named) => translate_named(*named),
        KeyToken::Char(c) => translate_char(*c),
        KeyToken::Chord { .. } => match token.ctrl_char() {
            Some(c) => translate_ctrl(c),
            None => Action::Noop,
        },
    };
    tracing::trace!(target: "actions.translate", key = %token, ?action, "translated");
    action
}

fn translate_named(key: NamedKey) -> Action {
    match key {
        NamedKey::Enter => Action::Confirm,
        NamedKey::Esc => Action::Cancel,
        NamedKey::Down => Action::Motion(MotionKind::Down),
        NamedKey::Up => Action::Motion(MotionKind::Up),
        NamedKey::Right => Action::Motion(MotionKind::Right),
        NamedKey::Left => Action::Motion(MotionKind::Left),
        _ => Action::Noop,
    }
}

fn translate_char(c: char) -> Action {
    match c {
        'q' => Action::Cancel,
        'j' => Action::Motion(MotionKind::Down),
        'k' => Action::Motion(MotionKind::Up),
        'l' => Action::Motion(MotionKind::Right),
        'h' => Action::Motion(MotionKind::Left),
        ' ' => Action::Motion(MotionKind::PageDown),
        'b' => Action::Motion(MotionKind::PageUp),
        '<' => Action::Motion(MotionKind::Top),
        '>' => Action::Motion(MotionKind::Bottom),
        _ => Action::Noop,
    }
}

fn translate_ctrl(c: char) -> Action {
    match c {
        'c' => Action::Cancel,
        'n' => Action::Motion(MotionKind::Down),
        'p' => Action::Motion(MotionKind::Up),
        'd' => Action::Motion(MotionKind::PageDown),
        'u' | 'b' => Action::Motion(MotionKind::PageUp),
        'l' => Action::Refresh,
        _ => Action::Noop,
    }
}
