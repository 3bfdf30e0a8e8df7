//! Building
//!
//!     Turns IR parse nodes into the document model and resolves header
//!     synonyms. This is the last stage of a parse; after it the document is
//!     immutable.

pub mod aliases;
pub mod builder;

use std::fmt;

pub use builder::{build_document, build_elements};

/// An alias header and its canonical header are both present.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateSectionError {
    pub alias: String,
    pub canonical: String,
}

impl fmt::Display for DuplicateSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicated section: {}, {}", self.alias, self.canonical)
    }
}

impl std::error::Error for DuplicateSectionError {}
