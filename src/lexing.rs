//! Lexing pipeline
//!
//!     Lexing runs in three stages, each a plain function over the previous
//!     stage's output:
//!
//!         1. Base tokenization with logos. See [scan](scan). Newline runs and
//!            line content are the only token shapes; a newline run carries
//!            the following line's indentation.
//!
//!         2. Indentation tracking. See [indentation](indentation). Widths are
//!            measured against a stack and become semantic Indent and Dedent
//!            tokens; blank-line runs collapse into one Newline token that
//!            remembers its break count.
//!
//!         3. Line tree construction. See [line_tree](line_tree). Each
//!            Indent/Dedent pair becomes a nested block, producing the tree
//!            the convention grammars consume.
//!
//!     Indentation ultimately maps to open/close block structure, much like
//!     braces in c-style languages. Doing the simple scan first and the
//!     stateful tracking second keeps each stage independently testable.

pub mod indentation;
pub mod line_tree;
pub mod scan;

use std::fmt;

pub use indentation::{IndentTracker, Token, TAB_WIDTH};
pub use line_tree::{build_line_tree, LineNode, SourceLine};
pub use scan::{scan, RawToken};

/// Errors that can occur while lexing.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A dedent landed on a column that matches no open indentation level.
    IndentMismatch { width: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::IndentMismatch { width } => {
                write!(f, "dedent to column {width} matches no indentation level")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Run the full lexing pipeline over preprocessed source text.
pub fn lex(source: &str) -> Result<Vec<LineNode>, LexError> {
    let tokens = IndentTracker::new().track(scan(source))?;
    Ok(build_line_tree(tokens))
}
