//! Per-character display width.
//!
//! Single authoritative entry point for how many terminal columns a character
//! occupies. All layout decisions (body lines and status line) flow through
//! `char_width`; no other crate calls `unicode_width` directly.
//!
//! Width classes:
//! * `0`: combining marks, variation selectors, zero-width joiners. These never
//!   advance the column and are attached to the preceding cell.
//! * `1`: most characters, including control characters, which are displayed
//!   as a blank (see `display_char`) so they cannot move the terminal cursor.
//! * `2`: East Asian wide / fullwidth characters and emoji presentation forms.

use unicode_width::UnicodeWidthChar;

/// Return the display column width (0, 1 or 2) of a single character.
#[inline]
pub fn char_width(c: char) -> u16 {
    if c.is_control() {
        return 1;
    }
    match UnicodeWidthChar::width(c) {
        Some(w) => w.min(2) as u16,
        None => 1,
    }
}

/// Character actually handed to the terminal for `c`.
///
/// Control characters (tab, escape, DEL, C1 controls) would be interpreted by
/// the terminal instead of drawn; they are replaced by a blank of the same
/// measured width.
#[inline]
pub fn display_char(c: char) -> char {
    if c.is_control() { ' ' } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(':'), 1);
    }

    #[test]
    fn wide_cjk() {
        assert_eq!(char_width('界'), 2);
        assert_eq!(char_width('漢'), 2);
    }

    #[test]
    fn fullwidth_form() {
        assert_eq!(char_width('Ａ'), 2);
    }

    #[test]
    fn emoji_basic() {
        assert_eq!(char_width('😀'), 2);
    }

    #[test]
    fn combining_acute_is_zero() {
        assert_eq!(char_width('\u{0301}'), 0);
    }

    #[test]
    fn joiners_and_selectors_are_zero() {
        assert_eq!(char_width('\u{200D}'), 0);
        assert_eq!(char_width('\u{FE0F}'), 0);
    }

    #[test]
    fn control_characters_are_blank_cells() {
        assert_eq!(char_width('\t'), 1);
        assert_eq!(char_width('\u{1b}'), 1);
        assert_eq!(display_char('\t'), ' ');
        assert_eq!(display_char('\u{7f}'), ' ');
        assert_eq!(display_char('x'), 'x');
    }
}
