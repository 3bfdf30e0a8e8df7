//! Element variant
//!
//!     `Element` is the closed wrapper over everything that can appear in a
//!     section body. Both the tree transformer and the renderers match on it
//!     exhaustively, so adding a variant is a compile-time visible change
//!     everywhere it matters.

use super::checklist::ChecklistEntry;
use super::code_block::CodeBlock;
use super::item::Item;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

/// Any element of a section body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    Paragraph(Paragraph),
    Code(CodeBlock),
    Item(Item),
    Checklist(ChecklistEntry),
}

impl Element {
    /// Children of entry-like elements; paragraphs and code blocks have none.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Item(item) => &item.children,
            Element::Checklist(entry) => &entry.children,
            Element::Paragraph(_) | Element::Code(_) => &[],
        }
    }

    /// True for checklist entries and items carrying nested content.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// True for prose-like elements (paragraphs and code blocks).
    pub fn is_prose(&self) -> bool {
        matches!(self, Element::Paragraph(_) | Element::Code(_))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Paragraph(p) => p.fmt(f),
            Element::Code(c) => c.fmt(f),
            Element::Item(i) => i.fmt(f),
            Element::Checklist(e) => e.fmt(f),
        }
    }
}
