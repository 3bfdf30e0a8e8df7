//! Parser
//!
//!     One parser per convention. A parse runs preprocess → scan → track →
//!     line tree → grammar → build, all synchronous and pure; the only state
//!     is a memoization table keyed by an MD5 digest of the preprocessed
//!     input, so repeated parses of identical text return the same
//!     `Arc<Document>`.
//!
//!     The table is owned by this instance and deliberately not thread-safe;
//!     concurrent callers give each worker its own parser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use md5::{Digest, Md5};

use crate::ast::elements::Document;
use crate::building::build_document;
use crate::error::Error;
use crate::formats::markdown::MarkdownRenderer;
use crate::formats::text::TextRenderer;
use crate::formats::{FormatOptions, Target};
use crate::lexing::lex;
use crate::parsing::convention::{Convention, Preprocessed, Style};
use crate::parsing::parse_document;

type CacheKey = [u8; 16];

/// A docstring parser for one convention.
pub struct Parser {
    style: Style,
    convention: &'static dyn Convention,
    cache: RefCell<HashMap<CacheKey, Arc<Document>>>,
}

impl Parser {
    pub fn new(style: Style) -> Self {
        Parser {
            style,
            convention: style.convention(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn colon() -> Self {
        Parser::new(Style::Colon)
    }

    pub fn underline() -> Self {
        Parser::new(Style::Underline)
    }

    pub fn at_sign() -> Self {
        Parser::new(Style::AtSign)
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Parse raw text into a document.
    ///
    /// Identical input (after preprocessing) returns the cached document,
    /// the very same `Arc`.
    pub fn parse(&self, text: &str) -> Result<Arc<Document>, Error> {
        let preprocessed = self.convention.preprocess(text);
        let key = cache_key(&preprocessed);

        if let Some(doc) = self.cache.borrow().get(&key) {
            log::debug!("{} parse cache hit", self.style);
            return Ok(Arc::clone(doc));
        }

        let doc = Arc::new(self.parse_preprocessed(&preprocessed)?);
        self.cache.borrow_mut().insert(key, Arc::clone(&doc));
        Ok(doc)
    }

    fn parse_preprocessed(&self, preprocessed: &Preprocessed) -> Result<Document, Error> {
        if preprocessed.text == "\n" {
            let mut doc = Document::new();
            if let Some(flag) = preprocessed.api {
                doc.set_flag("API", flag);
            }
            return Ok(doc);
        }

        let nodes = lex(&preprocessed.text)?;
        let sections = parse_document(&nodes, self.convention)?;
        let doc = build_document(sections, preprocessed.api, self.convention)?;
        log::debug!(
            "{} convention parsed {} entries",
            self.style,
            doc.len()
        );
        Ok(doc)
    }

    /// Render a document with this parser's convention.
    pub fn format(&self, doc: &Document, options: &FormatOptions) -> String {
        match options.target {
            Target::Text => {
                TextRenderer::new(self.convention, options.unit()).render(doc, &options.indent)
            }
            Target::Markdown => {
                MarkdownRenderer::new(self.convention, options.unit(), options.heading_level)
                    .render(doc, &options.indent)
            }
        }
    }

    /// Parse then render; parse failures propagate.
    pub fn format_source(&self, text: &str, options: &FormatOptions) -> Result<String, Error> {
        let doc = self.parse(text)?;
        Ok(self.format(&doc, options))
    }
}

fn cache_key(preprocessed: &Preprocessed) -> CacheKey {
    let mut hasher = Md5::new();
    hasher.update(preprocessed.text.as_bytes());
    if let Some(api) = preprocessed.api {
        hasher.update([u8::from(api)]);
    }
    hasher.finalize().into()
}
