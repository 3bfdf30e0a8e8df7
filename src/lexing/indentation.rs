//! Indentation tracking
//!
//!     This stage turns raw `Break` tokens into semantic structure. Every
//!     line's indentation width is measured against a stack of open widths:
//!     a wider line pushes the stack and emits one `Indent`, a narrower line
//!     pops the stack and emits one `Dedent` per closed level. At this point
//!     indent/dedent could be replaced by open/close braces in a more c-style
//!     syntax with the same effect.
//!
//!     Widths are counted in columns with a fixed tab width of 8. A dedent
//!     that lands between two open widths does not match any level and fails
//!     with a [`LexError`], since the block structure of the document would be
//!     ambiguous.
//!
//!     A run of blank lines collapses into a single `Newline` token carrying
//!     the number of line breaks it spans. Downstream paragraph splitting
//!     relies on that count: more than one break means a paragraph boundary.
//!
//!     The stack is owned by the tracker and every parse constructs a fresh
//!     tracker, so independent parses never share indentation state.

use super::scan::RawToken;
use super::LexError;

/// Columns per tab character when measuring indentation.
pub const TAB_WIDTH: usize = 8;

/// Tokens produced by the indentation tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// One line of content, leading indentation stripped.
    Line(String),
    /// End of line; `breaks` counts the newlines in the run.
    Newline { breaks: usize },
    /// The following lines are one level deeper.
    Indent,
    /// One open level closed.
    Dedent,
}

/// Stateful mapper from raw tokens to line/indent/dedent tokens.
pub struct IndentTracker {
    stack: Vec<usize>,
}

impl IndentTracker {
    pub fn new() -> Self {
        IndentTracker { stack: vec![0] }
    }

    /// Run the tracker over a scanned token stream.
    ///
    /// The stream is expected to start at column zero; preprocessed input
    /// always does. Levels still open at end of input are closed with
    /// trailing `Dedent` tokens.
    pub fn track(mut self, raw: Vec<(RawToken, String)>) -> Result<Vec<Token>, LexError> {
        let mut out = Vec::new();

        for (kind, text) in raw {
            match kind {
                RawToken::Content => out.push(Token::Line(text)),
                RawToken::Break => {
                    let breaks = text.matches('\n').count();
                    out.push(Token::Newline { breaks });

                    // The whitespace after the final newline is the next
                    // line's indentation; intermediate blank-line whitespace
                    // is irrelevant.
                    let tail = text.rsplit('\n').next().unwrap_or("");
                    self.shift_to(indent_width(tail), &mut out)?;
                }
            }
        }

        while self.stack.len() > 1 {
            self.stack.pop();
            out.push(Token::Dedent);
        }

        Ok(out)
    }

    fn shift_to(&mut self, width: usize, out: &mut Vec<Token>) -> Result<(), LexError> {
        let top = self.stack.last().copied().unwrap_or(0);

        if width > top {
            log::trace!("indent to column {width}");
            self.stack.push(width);
            out.push(Token::Indent);
            return Ok(());
        }

        while width < self.stack.last().copied().unwrap_or(0) {
            self.stack.pop();
            out.push(Token::Dedent);
        }

        if width != self.stack.last().copied().unwrap_or(0) {
            return Err(LexError::IndentMismatch { width });
        }

        Ok(())
    }
}

impl Default for IndentTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure indentation in columns: one per space, [`TAB_WIDTH`] per tab.
fn indent_width(whitespace: &str) -> usize {
    whitespace
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}
