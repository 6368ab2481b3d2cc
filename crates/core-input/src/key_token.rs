use core_events::{KeyToken, ModMask, NamedKey};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Map a crossterm key event into a normalized key token.
///
/// Returns `None` for key releases and for key codes the pager has no use
/// for (media keys, lone modifiers, lock keys).
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyToken> {
    if matches!(event.kind, CKeyEventKind::Release) {
        return None;
    }
    let base = map_key_token(&event.code)?;
    Some(KeyToken::chord(base, map_mod_mask(event.modifiers)))
}

/// Convert a crossterm key code into a key token (modifiers not applied).
pub(crate) fn map_key_token(code: &CKeyCode) -> Option<KeyToken> {
    let token = match code {
        CKeyCode::Char(c) => KeyToken::Char(*c),
        CKeyCode::Enter => KeyToken::Named(NamedKey::Enter),
        CKeyCode::Esc => KeyToken::Named(NamedKey::Esc),
        CKeyCode::Backspace => KeyToken::Named(NamedKey::Backspace),
        CKeyCode::Tab | CKeyCode::BackTab => KeyToken::Named(NamedKey::Tab),
        CKeyCode::Up => KeyToken::Named(NamedKey::Up),
        CKeyCode::Down => KeyToken::Named(NamedKey::Down),
        CKeyCode::Left => KeyToken::Named(NamedKey::Left),
        CKeyCode::Right => KeyToken::Named(NamedKey::Right),
        CKeyCode::Home => KeyToken::Named(NamedKey::Home),
        CKeyCode::End => KeyToken::Named(NamedKey::End),
        CKeyCode::PageUp => KeyToken::Named(NamedKey::PageUp),
        CKeyCode::PageDown => KeyToken::Named(NamedKey::PageDown),
        CKeyCode::Insert => KeyToken::Named(NamedKey::Insert),
        CKeyCode::Delete => KeyToken::Named(NamedKey::Delete),
        CKeyCode::F(n) => KeyToken::Named(NamedKey::F(*n)),
        CKeyCode::Null
        | CKeyCode::CapsLock
        | CKeyCode::ScrollLock
        | CKeyCode::NumLock
        | CKeyCode::PrintScreen
        | CKeyCode::Pause
        | CKeyCode::Menu
        | CKeyCode::KeypadBegin
        | CKeyCode::Media(_)
        | CKeyCode::Modifier(_) => return None,
    };
    Some(token)
}

/// Convert crossterm modifier flags into a `ModMask`.
pub(crate) fn map_mod_mask(mods: CKeyModifiers) -> ModMask {
    let mut out = ModMask::empty();
    if mods.contains(CKeyModifiers::CONTROL) {
        out |= ModMask::CTRL;
    }
    if mods.contains(CKeyModifiers::ALT) {
        out |= ModMask::ALT;
    }
    if mods.contains(CKeyModifiers::SHIFT) {
        out |= ModMask::SHIFT;
    }
    if mods.contains(CKeyModifiers::SUPER) {
        out |= ModMask::SUPER;
    }
    if mods.contains(CKeyModifiers::META) {
        out |= ModMask::META;
    }
    out
}
