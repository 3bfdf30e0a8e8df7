//! Paragraph element
//!
//!     A paragraph is a run of text lines. A blank line always starts a new
//!     paragraph, so a single paragraph never spans a blank line.
//!
//!     A line position may hold a nested paragraph instead of text: this is
//!     how deeper-indented prose hanging off a paragraph is represented. The
//!     nesting can repeat, e.g. an indented example inside an indented note.

use serde::Serialize;
use std::fmt;

/// One line position inside a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParaLine {
    Text(String),
    Nested(Paragraph),
}

/// A block of text lines, possibly holding nested paragraphs.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Paragraph {
    pub lines: Vec<ParaLine>,
}

impl Paragraph {
    pub fn new(lines: Vec<ParaLine>) -> Self {
        Paragraph { lines }
    }

    /// Build a paragraph from plain text lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Paragraph {
            lines: lines.into_iter().map(|l| ParaLine::Text(l.into())).collect(),
        }
    }

    /// The direct text lines, skipping nested paragraphs.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            ParaLine::Text(text) => Some(text.as_str()),
            ParaLine::Nested(_) => None,
        })
    }

    /// Direct text joined with newlines.
    pub fn text(&self) -> String {
        self.text_lines().collect::<Vec<_>>().join("\n")
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} lines)", self.lines.len())
    }
}
