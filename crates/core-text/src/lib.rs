//! Line store: immutable document split into logical lines.
//!
//! A `Document` is built once from the raw input blob and never mutated.
//! Line terminators `\r\n`, `\n\r`, `\n` and `\r` are all recognized (the
//! leftmost, longest listed alternative wins, so `\n\r` is one terminator).
//! Empty lines are preserved.
//!
//! Trailing terminator rule: when the text ends with a terminator the split
//! yields an empty final line. That line is not counted by `line_count` (so
//! `"a\n"` has one line) but stays addressable through `line_at` and is never
//! rendered.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub mod segment;
pub mod width;

pub use segment::{PlacedCell, layout_cells};
pub use width::char_width;

static LINE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\r\n|\n\r|\n|\r").expect("line terminator pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("line index {index} out of range (document has {len} lines)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: String,
    lines: Vec<String>,
    line_count: usize,
}

impl Document {
    /// Split `text` into lines. Never fails.
    pub fn load(text: impl Into<String>) -> Self {
        let raw = text.into();
        let lines: Vec<String> = LINE_TERMINATOR.split(&raw).map(str::to_string).collect();
        let mut line_count = lines.len();
        if lines.last().is_some_and(|l| l.is_empty()) {
            line_count -= 1;
        }
        Self {
            raw,
            lines,
            line_count,
        }
    }

    /// Number of displayable lines (trailing empty line excluded).
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// Access a split line. Index `line_count` is valid when the input ended
    /// with a terminator (it is the empty trailing line).
    pub fn line_at(&self, index: usize) -> Result<&str, TextError> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(TextError::OutOfRange {
                index,
                len: self.lines.len(),
            })
    }

    /// Displayable lines only.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines[..self.line_count].iter().map(String::as_str)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}
