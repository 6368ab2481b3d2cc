//! Status line composition.
//!
//! Format: `USAGE [exit: ESC/q] [scroll: j,k/C-n,C-p]`, followed by
//! ` :: [file: <name> ]` when the input carries a label.
//!
//! Two stages, so segments can be inspected or reordered without touching
//! string assembly:
//! 1. `compose_status` produces an ordered vector of `StatusSegment` items.
//! 2. `format_status` concatenates them into the displayed text.

/// Fixed key reminder shown on every frame.
pub const USAGE_HINT: &str = "USAGE [exit: ESC/q] [scroll: j,k/C-n,C-p]";

/// What the status line needs to know about the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusContext<'a> {
    /// Name of the input shown after the hint; empty labels are ignored.
    pub label: Option<&'a str>,
}

impl<'a> StatusContext<'a> {
    pub fn with_label(label: Option<&'a str>) -> Self {
        Self { label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Usage,
    File(&'a str),
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut segs = vec![StatusSegment::Usage];
    if let Some(label) = ctx.label.filter(|l| !l.is_empty()) {
        segs.push(StatusSegment::File(label));
    }
    segs
}

pub fn format_status(segs: &[StatusSegment<'_>]) -> String {
    let mut out = String::new();
    for seg in segs {
        match seg {
            StatusSegment::Usage => out.push_str(USAGE_HINT),
            StatusSegment::File(name) => {
                out.push_str(" :: [file: ");
                out.push_str(name);
                out.push_str(" ]");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hint_only_without_label() {
        let segs = compose_status(&StatusContext::default());
        assert_eq!(segs, vec![StatusSegment::Usage]);
        assert_eq!(format_status(&segs), USAGE_HINT);
    }

    #[test]
    fn label_appended() {
        let ctx = StatusContext::with_label(Some("notes.txt"));
        assert_eq!(
            format_status(&compose_status(&ctx)),
            "USAGE [exit: ESC/q] [scroll: j,k/C-n,C-p] :: [file: notes.txt ]"
        );
    }

    #[test]
    fn empty_label_ignored() {
        let ctx = StatusContext::with_label(Some(""));
        assert_eq!(compose_status(&ctx), vec![StatusSegment::Usage]);
    }
}
