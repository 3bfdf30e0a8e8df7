//! # docfmt
//!
//! A parser and formatter for indentation-structured docstring conventions.
//!
//! Three conventions are supported: colon-headed (`Args:` over an indented
//! block), underline-headed (`Args` over a dashed underline, bodies may sit
//! flush), and at-sign-headed (`@Args:`, with an optional leading `@API`
//! marker). All three share one pipeline:
//!
//!     raw text
//!       -> preprocess      wrap the headerless leading text in a synthetic
//!                          leading section (per convention)
//!       -> lex             scan, track indentation into block-open/close
//!                          tokens, fold into a line tree
//!       -> parse           convention grammar over the tree, into IR nodes
//!       -> build           paragraph splitting, field extraction, alias
//!                          resolution, into the document model
//!
//! Rendering walks the model back out as normalized text or markdown and is
//! idempotent under reparsing. Parsing and rendering are pure; the only
//! state is a per-parser memoization table.
//!
//! The quickest way in:
//!
//!     use docfmt::{Parser, FormatOptions};
//!
//!     let parser = Parser::colon();
//!     let doc = parser.parse(source)?;
//!     let text = parser.format(&doc, &FormatOptions::text());
//!
//! or let [`AutoParser`] pick the convention.

pub mod ast;
pub mod building;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;

pub use ast::elements::{
    ChecklistEntry, CodeBlock, Document, Element, Entry, Item, ParaLine, Paragraph, Section,
};
pub use ast::snapshot::snapshot;
pub use building::DuplicateSectionError;
pub use error::Error;
pub use formats::{render_tree, FormatOptions, Target};
pub use lexing::LexError;
pub use parsing::{ParseError, Style, LEADING_SECTION_TITLE};
pub use pipeline::{AutoParser, Parser};
