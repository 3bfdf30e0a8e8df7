//! Convention strategy
//!
//!     One grammar engine serves all three conventions; everything that
//!     differs between them is collected behind the [`Convention`] trait:
//!     the leading-line preprocessor, the section-header matcher, the item
//!     matcher and its field rule, the alias table, the body indentation
//!     rule, and the text/markdown shapes of headers and item lines.
//!
//!     Each convention is a unit struct implementing the trait; the engine
//!     and the renderers hold a `&dyn Convention` and never branch on which
//!     one it is.

use crate::ast::elements::Item;
use crate::lexing::LineNode;
use crate::parsing::classify::ItemFields;

/// Title of the synthetic leading section the preprocessors create for the
/// headerless text at the top of a comment.
pub const LEADING_SECTION_TITLE: &str = "SUMMARY";

/// Indentation unit used when synthesizing indented bodies during
/// preprocessing and when rendering text output.
pub const INDENT_BASE: &str = "    ";

/// The three supported conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `Title:` headers with indented bodies.
    Colon,
    /// `Title` over a dashed underline; bodies may sit flush.
    Underline,
    /// `@Title:` headers, plus an optional leading `@API` marker line.
    AtSign,
}

impl Style {
    pub fn name(self) -> &'static str {
        match self {
            Style::Colon => "colon",
            Style::Underline => "underline",
            Style::AtSign => "at-sign",
        }
    }

    pub(crate) fn convention(self) -> &'static dyn Convention {
        match self {
            Style::Colon => &super::colon::ColonConvention,
            Style::Underline => &super::underline::UnderlineConvention,
            Style::AtSign => &super::at_sign::AtSignConvention,
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of a convention preprocessor.
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed {
    /// Rewritten source: the leading text wrapped in a synthetic section,
    /// right-trimmed, ending in exactly one newline.
    pub text: String,
    /// Document-level flag detected during preprocessing, if the convention
    /// has one.
    pub api: Option<bool>,
}

/// A matched section header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    pub title: String,
    /// Number of document-level lines the header spans (two for the
    /// underline convention).
    pub consumed: usize,
}

/// Per-convention strategy consumed by the grammar engine and renderers.
pub trait Convention: Sync {
    fn name(&self) -> &'static str;

    /// Rewrite raw input so the headerless leading text becomes a synthetic
    /// leading section; guarantees column-zero start and a single trailing
    /// newline.
    fn preprocess(&self, text: &str) -> Preprocessed;

    /// Match a section header at position `at` of the document-level nodes.
    fn match_header(&self, nodes: &[LineNode], at: usize) -> Option<HeaderMatch>;

    /// Match an item header line and extract its fields.
    fn match_item(&self, line: &str) -> Option<ItemFields>;

    /// Whether an item line only counts as an item when a deeper block
    /// immediately follows it.
    fn item_requires_block(&self) -> bool {
        false
    }

    /// Whether section bodies may sit flush with the header instead of being
    /// indented.
    fn flush_bodies(&self) -> bool {
        false
    }

    /// Header synonyms resolved after parsing: `(alias, canonical)` pairs.
    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Lines of a rendered section header, unindented.
    fn header_lines(&self, title: &str) -> Vec<String>;

    /// A rendered item header line, unindented.
    fn item_line(&self, item: &Item) -> String;

    /// Section title as it appears in a markdown heading (the first header
    /// line for every current convention).
    fn markdown_header(&self, title: &str) -> String {
        let mut lines = self.header_lines(title);
        if lines.is_empty() {
            title.to_string()
        } else {
            lines.remove(0)
        }
    }

    /// A rendered markdown item line, name and type in backtick emphasis.
    fn markdown_item_line(&self, item: &Item) -> String;

    /// Whether a checklist entry or item that carried children forces a
    /// blank line before the next element.
    fn gap_after_nested_entries(&self) -> bool {
        true
    }
}

/// Strip the widest common leading whitespace from every line.
///
/// Whitespace-only lines are ignored when computing the margin and come out
/// empty.
pub(crate) fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;

    for line in text.lines() {
        let stripped = line.trim_start_matches([' ', '\t']);
        if stripped.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - stripped.len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }

    let margin = margin.unwrap_or("");
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, ca), cb)| ca == cb)
        .map(|((i, ca), _)| i + ca.len_utf8())
        .last()
        .unwrap_or(0);
    &a[..end]
}
