//! Core input event types for lsel.
//!
//! The controller is written against this small tagged union instead of a
//! terminal library's event type, so the terminal surface stays swappable.
//! Mapping from a concrete backend (crossterm) lives in `core-input`.

use std::fmt;

/// Normalized input events produced by a terminal surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Logical key press.
    Key(KeyToken),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 { const CTRL=1; const ALT=2; const SHIFT=4; const META=8; const SUPER=16; }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Esc,
    Backspace,
    Tab,
    F(u8),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
}

/// Canonical logical key tokens.
///
/// `KeyToken::Chord` wraps a base token plus modifier mask so combinations
/// such as `<C-n>` are represented faithfully. Plain characters never carry a
/// bare SHIFT (the character itself already reflects it); use `KeyToken::chord`
/// to build tokens so that normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Named(NamedKey),
    Chord { base: Box<KeyToken>, mods: ModMask },
}

impl KeyToken {
    /// Build a token from a base and modifiers, dropping modifiers that carry
    /// no information (SHIFT on a printable character, empty masks).
    pub fn chord(base: KeyToken, mods: ModMask) -> Self {
        let mut mods = mods;
        if let KeyToken::Char(c) = &base {
            if mods.contains(ModMask::SHIFT) && !mods.intersects(ModMask::CTRL | ModMask::ALT) {
                mods.remove(ModMask::SHIFT);
            }
            if mods.contains(ModMask::CTRL) && c.is_ascii_uppercase() {
                // Terminals disagree on whether <C-N> reports 'n' or 'N'.
                return Self::chord(KeyToken::Char(c.to_ascii_lowercase()), mods);
            }
        }
        if mods.is_empty() {
            base
        } else {
            KeyToken::Chord {
                base: Box::new(base),
                mods,
            }
        }
    }

    /// `<C-c>` style token.
    pub fn ctrl(c: char) -> Self {
        Self::chord(KeyToken::Char(c), ModMask::CTRL)
    }

    /// Returns the lowercase character when this token is exactly `<C-c>`.
    pub fn ctrl_char(&self) -> Option<char> {
        match self {
            KeyToken::Chord { base, mods } if *mods == ModMask::CTRL => match **base {
                KeyToken::Char(c) => Some(c),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<NamedKey> for KeyToken {
    fn from(key: NamedKey) -> Self {
        KeyToken::Named(key)
    }
}

impl From<char> for KeyToken {
    fn from(c: char) -> Self {
        KeyToken::Char(c)
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyToken::Char(' ') => f.write_str("<Space>"),
            KeyToken::Char(c) => write!(f, "{c}"),
            KeyToken::Named(NamedKey::F(n)) => write!(f, "<F{n}>"),
            KeyToken::Named(named) => write!(f, "<{named:?}>"),
            KeyToken::Chord { base, mods } => {
                f.write_str("<")?;
                for (flag, prefix) in [
                    (ModMask::CTRL, "C-"),
                    (ModMask::ALT, "A-"),
                    (ModMask::SHIFT, "S-"),
                    (ModMask::META, "M-"),
                    (ModMask::SUPER, "D-"),
                ] {
                    if mods.contains(flag) {
                        f.write_str(prefix)?;
                    }
                }
                match base.as_ref() {
                    KeyToken::Char(c) => write!(f, "{c}>"),
                    KeyToken::Named(named) => write!(f, "{named:?}>"),
                    nested => write!(f, "{nested}>"),
                }
            }
        }
    }
}
