//! Parse-node IR
//!
//!     Intermediate nodes between the grammar and the tree transformer. They
//!     record what matched and keep the break counts the transformer needs
//!     for paragraph splitting; everything model-shaped (splitting, field
//!     placement, flattening) happens in `building`.

use super::classify::ItemFields;

/// A captured text line with the break count that followed it.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedLine {
    pub text: String,
    pub breaks: usize,
}

/// A matched production inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNode {
    Paragraph(ParagraphNode),
    Code(CodeNode),
    Item(ItemNode),
    Checklist(ChecklistNode),
}

/// A run of text lines plus the optional trailing nested block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphNode {
    pub lines: Vec<CapturedLine>,
    /// Code blocks and paragraphs from the deeper-indented block following
    /// the run.
    pub nested: Vec<ParseNode>,
}

/// A fenced code block; the body holds paragraph nodes only.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeNode {
    pub lang: Option<String>,
    pub body: Vec<ParseNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemNode {
    pub fields: ItemFields,
    pub children: Vec<ParseNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistNode {
    pub text: String,
    pub children: Vec<ParseNode>,
}

/// A parsed section: title plus its block's nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionNode {
    pub title: String,
    pub children: Vec<ParseNode>,
}
