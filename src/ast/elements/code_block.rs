//! Fenced code block element

use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

/// A fenced code block with an optional language tag.
///
/// The body is parsed with the same paragraph rules as prose, so indented
/// regions inside the fence appear as nested paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub lang: Option<String>,
    pub body: Vec<Paragraph>,
}

impl CodeBlock {
    pub fn new(lang: Option<String>, body: Vec<Paragraph>) -> Self {
        CodeBlock { lang, body }
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodeBlock(lang={})", self.lang.as_deref().unwrap_or("None"))
    }
}
