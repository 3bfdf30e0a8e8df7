//! Convention selection
//!
//!     Tries each convention's parser in a fixed order and settles on the
//!     first one that parses without error. Grammar and indentation failures
//!     move on to the next convention; a duplicate-section error is a content
//!     problem, not a convention mismatch, and aborts selection.

use std::sync::Arc;

use super::parser::Parser;
use crate::ast::elements::Document;
use crate::error::Error;
use crate::parsing::convention::Style;

/// Selection order: colon first, at-sign, underline last.
const ORDER: [Style; 3] = [Style::Colon, Style::AtSign, Style::Underline];

/// A set of parsers, one per convention, tried in order.
pub struct AutoParser {
    parsers: Vec<Parser>,
}

impl AutoParser {
    pub fn new() -> Self {
        AutoParser {
            parsers: ORDER.iter().map(|style| Parser::new(*style)).collect(),
        }
    }

    /// The first parser whose convention accepts the text.
    pub fn select(&self, text: &str) -> Result<&Parser, Error> {
        let mut failures = Vec::new();
        for parser in &self.parsers {
            match parser.parse(text) {
                Ok(_) => {
                    log::debug!("selected {} convention", parser.style());
                    return Ok(parser);
                }
                Err(error @ Error::DuplicateSection(_)) => return Err(error),
                Err(error) => failures.push((parser.style(), error)),
            }
        }
        Err(Error::AllConventionsFailed { failures })
    }

    /// Parse with whichever convention accepts the text.
    ///
    /// The successful parse is served from the selected parser's cache.
    pub fn parse(&self, text: &str) -> Result<(Style, Arc<Document>), Error> {
        let parser = self.select(text)?;
        Ok((parser.style(), parser.parse(text)?))
    }
}

impl Default for AutoParser {
    fn default() -> Self {
        Self::new()
    }
}
