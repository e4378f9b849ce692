//! Blank-line run collapsing
//!
//! A blank-line run is a maximal sequence of lines that are empty after
//! trimming. Each run is emitted as exactly one `"\n"`; every other line is
//! emitted with trailing whitespace removed and a single newline appended.

use crate::core::util::{is_blank, trim_end_space};

/// Position inside the current blank-line run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankRun {
    /// Last line had content (counter 0)
    #[default]
    Content,
    /// First blank line of a run (counter 1)
    First,
    /// Second or later blank line of a run (counter >= 2)
    Continued,
}

impl BlankRun {
    /// Advance the state for the next line
    pub fn next(self, blank: bool) -> Self {
        match (self, blank) {
            (_, false) => BlankRun::Content,
            (BlankRun::Content, true) => BlankRun::First,
            (BlankRun::First | BlankRun::Continued, true) => BlankRun::Continued,
        }
    }
}

/// What the collapser does with one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit {
    /// A content line, trailing whitespace removed, newline appended
    Line(String),
    /// The single blank separator for a run
    Blank,
    /// A continued blank line, dropped
    Skip,
}

/// Streaming collapser over lines
#[derive(Debug, Default)]
pub struct Collapser {
    state: BlankRun,
}

impl Collapser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line and decide what to emit for it
    pub fn push(&mut self, line: &str) -> Emit {
        self.state = self.state.next(is_blank(line));
        match self.state {
            BlankRun::Content => {
                let mut out = trim_end_space(line).to_string();
                out.push('\n');
                Emit::Line(out)
            }
            BlankRun::First => Emit::Blank,
            BlankRun::Continued => Emit::Skip,
        }
    }
}

/// Collapse blank-line runs, returning the emitted lines (each ends with `\n`)
pub fn collapse_blank_runs<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut collapser = Collapser::new();
    lines
        .into_iter()
        .filter_map(|line| match collapser.push(line) {
            Emit::Line(out) => Some(out),
            Emit::Blank => Some("\n".to_string()),
            Emit::Skip => None,
        })
        .collect()
}
