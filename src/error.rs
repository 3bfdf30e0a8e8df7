//! Crate-level error type
//!
//!     Each stage defines its own error kind; this enum aggregates them for
//!     the public API. No partial documents accompany an error.

use std::fmt;

use crate::building::DuplicateSectionError;
use crate::lexing::LexError;
use crate::parsing::convention::Style;
use crate::parsing::ParseError;

/// Any failure of a parse or selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Bad indentation structure.
    Lex(LexError),
    /// The grammar could not match the token stream.
    Parse(ParseError),
    /// An alias header collides with its canonical header.
    DuplicateSection(DuplicateSectionError),
    /// Every convention's parse failed during selection.
    AllConventionsFailed { failures: Vec<(Style, Error)> },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "lex error: {err}"),
            Error::Parse(err) => write!(f, "parse error: {err}"),
            Error::DuplicateSection(err) => write!(f, "{err}"),
            Error::AllConventionsFailed { failures } => {
                write!(f, "all conventions failed")?;
                for (style, error) in failures {
                    write!(f, "; {style}: {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::DuplicateSection(err) => Some(err),
            Error::AllConventionsFailed { .. } => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<DuplicateSectionError> for Error {
    fn from(err: DuplicateSectionError) -> Self {
        Error::DuplicateSection(err)
    }
}
