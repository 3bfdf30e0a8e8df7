//! Grammar engine
//!
//!     One recursive descent over the line tree serves all three conventions;
//!     the strategy object decides what a header or an item looks like. The
//!     productions mirror the shared grammar fragments:
//!
//!         document  := section+
//!         section   := header block
//!         block     := (code | checklist-tree | item-tree | paragraph)+
//!         paragraph := text-line+ [ nested-block of (code | paragraph)+ ]
//!         code      := fence (lang)? body-paragraphs fence
//!
//!     Matching is context-sensitive the way the conventions demand: inside
//!     the nested block trailing a paragraph only code blocks and paragraphs
//!     exist, and inside a code body everything is paragraph text. A
//!     checklist line in those positions is just a line that starts with a
//!     dash.
//!
//!     Section headers are recognized at document level only. Anything else
//!     at that level is a grammar mismatch and fails the parse, which is the
//!     signal convention selection uses to move on.

use super::classify;
use super::convention::Convention;
use super::ir::{
    CapturedLine, ChecklistNode, CodeNode, ItemNode, ParagraphNode, ParseNode, SectionNode,
};
use super::ParseError;
use crate::lexing::{LineNode, SourceLine};

/// Parse document-level nodes into sections.
pub fn parse_document(
    nodes: &[LineNode],
    convention: &dyn Convention,
) -> Result<Vec<SectionNode>, ParseError> {
    let mut sections = Vec::new();
    let mut idx = 0;

    while idx < nodes.len() {
        let header = convention
            .match_header(nodes, idx)
            .ok_or_else(|| ParseError::ExpectedHeader {
                found: describe(nodes.get(idx)),
            })?;
        idx += header.consumed;

        let children = if convention.flush_bodies() {
            // the body runs to the next header pair; it is either entirely
            // flush or exactly one indented block
            let start = idx;
            while idx < nodes.len() && convention.match_header(nodes, idx).is_none() {
                idx += 1;
            }
            let body = &nodes[start..idx];
            match body {
                [] => {
                    return Err(ParseError::EmptySection {
                        title: header.title,
                    })
                }
                [LineNode::Block(inner)] => parse_block(inner, convention)?,
                [LineNode::Block(_), ..] => {
                    return Err(ParseError::FlushAfterIndentedBody {
                        title: header.title,
                    })
                }
                _ => parse_block(body, convention)?,
            }
        } else {
            match nodes.get(idx) {
                Some(LineNode::Block(inner)) => {
                    idx += 1;
                    parse_block(inner, convention)?
                }
                _ => {
                    return Err(ParseError::UnindentedBody {
                        title: header.title,
                    })
                }
            }
        };

        sections.push(SectionNode {
            title: header.title,
            children,
        });
    }

    Ok(sections)
}

/// Parse a full block context: code, checklist trees, item trees, paragraphs.
pub fn parse_block(
    nodes: &[LineNode],
    convention: &dyn Convention,
) -> Result<Vec<ParseNode>, ParseError> {
    let mut items = Vec::new();
    let mut idx = 0;

    while idx < nodes.len() {
        let line = match &nodes[idx] {
            LineNode::Block(_) => return Err(ParseError::UnexpectedBlock),
            LineNode::Line(line) => line,
        };

        if let Some(lang) = classify::match_fence(&line.text) {
            let (code, next) = parse_code(nodes, idx, lang, convention)?;
            items.push(ParseNode::Code(code));
            idx = next;
        } else if let Some(text) = classify::match_checklist(&line.text) {
            idx += 1;
            let children = take_children(nodes, &mut idx, convention)?;
            items.push(ParseNode::Checklist(ChecklistNode { text, children }));
        } else if let Some(fields) = item_at(nodes, idx, convention) {
            idx += 1;
            let children = take_children(nodes, &mut idx, convention)?;
            items.push(ParseNode::Item(ItemNode { fields, children }));
        } else {
            let (node, next) = parse_paragraph(nodes, idx, convention)?;
            items.push(ParseNode::Paragraph(node));
            idx = next;
        }
    }

    Ok(items)
}

/// An item line, honoring the convention's require-a-block rule.
fn item_at(
    nodes: &[LineNode],
    idx: usize,
    convention: &dyn Convention,
) -> Option<classify::ItemFields> {
    let line = nodes[idx].as_line()?;
    let fields = convention.match_item(&line.text)?;
    if convention.item_requires_block() {
        let followed_by_block = matches!(nodes.get(idx + 1), Some(LineNode::Block(_)));
        if line.breaks != 1 || !followed_by_block {
            return None;
        }
    }
    Some(fields)
}

/// The indented block following an entry line, parsed as a full block.
fn take_children(
    nodes: &[LineNode],
    idx: &mut usize,
    convention: &dyn Convention,
) -> Result<Vec<ParseNode>, ParseError> {
    if let Some(LineNode::Block(inner)) = nodes.get(*idx) {
        *idx += 1;
        parse_block(inner, convention)
    } else {
        Ok(Vec::new())
    }
}

/// A paragraph in full context: the first line is taken unconditionally (the
/// caller already rejected the other productions), further lines run until a
/// fence, checklist, item or block boundary.
fn parse_paragraph(
    nodes: &[LineNode],
    start: usize,
    convention: &dyn Convention,
) -> Result<(ParagraphNode, usize), ParseError> {
    let mut lines = Vec::new();
    let mut idx = start;
    if let Some(line) = nodes[idx].as_line() {
        lines.push(captured(line));
        idx += 1;
    }

    while let Some(LineNode::Line(line)) = nodes.get(idx) {
        if classify::match_fence(&line.text).is_some()
            || classify::match_checklist(&line.text).is_some()
            || item_at(nodes, idx, convention).is_some()
        {
            break;
        }
        lines.push(captured(line));
        idx += 1;
    }

    let mut nested = Vec::new();
    if let Some(LineNode::Block(inner)) = nodes.get(idx) {
        nested = parse_nested(inner, convention)?;
        idx += 1;
    }

    Ok((ParagraphNode { lines, nested }, idx))
}

/// The nested block trailing a paragraph: code blocks and paragraphs only.
/// Checklist and item shapes are plain text here.
fn parse_nested(
    nodes: &[LineNode],
    convention: &dyn Convention,
) -> Result<Vec<ParseNode>, ParseError> {
    let mut items = Vec::new();
    let mut idx = 0;

    while idx < nodes.len() {
        let line = match &nodes[idx] {
            LineNode::Block(_) => return Err(ParseError::UnexpectedBlock),
            LineNode::Line(line) => line,
        };

        if let Some(lang) = classify::match_fence(&line.text) {
            let (code, next) = parse_code(nodes, idx, lang, convention)?;
            items.push(ParseNode::Code(code));
            idx = next;
            continue;
        }

        let mut lines = vec![captured(line)];
        idx += 1;
        while let Some(LineNode::Line(next_line)) = nodes.get(idx) {
            if classify::match_fence(&next_line.text).is_some() {
                break;
            }
            lines.push(captured(next_line));
            idx += 1;
        }

        let mut nested = Vec::new();
        if let Some(LineNode::Block(inner)) = nodes.get(idx) {
            nested = parse_nested(inner, convention)?;
            idx += 1;
        }
        items.push(ParseNode::Paragraph(ParagraphNode { lines, nested }));
    }

    Ok(items)
}

/// A fenced code block. The body runs to the first fence line at the fence's
/// own level; deeper fence-looking lines are ordinary body text.
fn parse_code(
    nodes: &[LineNode],
    open_idx: usize,
    lang: Option<String>,
    convention: &dyn Convention,
) -> Result<(CodeNode, usize), ParseError> {
    let mut close = None;
    let mut idx = open_idx + 1;
    while idx < nodes.len() {
        if let LineNode::Line(line) = &nodes[idx] {
            if classify::match_fence(&line.text).is_some() {
                close = Some(idx);
                break;
            }
        }
        idx += 1;
    }
    let close = close.ok_or(ParseError::UnterminatedCode)?;

    let body = parse_code_body(&nodes[open_idx + 1..close], convention)?;
    Ok((CodeNode { lang, body }, close + 1))
}

/// A code body: paragraphs only, nesting included.
fn parse_code_body(
    nodes: &[LineNode],
    convention: &dyn Convention,
) -> Result<Vec<ParseNode>, ParseError> {
    // an entirely indented body arrives as a single block
    let nodes = match nodes {
        [LineNode::Block(inner)] => inner.as_slice(),
        _ => nodes,
    };
    if nodes.is_empty() {
        return Err(ParseError::EmptyCode);
    }
    if matches!(nodes.first(), Some(LineNode::Block(_))) {
        return Err(ParseError::UnexpectedBlock);
    }

    let mut items = Vec::new();
    let mut idx = 0;
    while idx < nodes.len() {
        let line = match &nodes[idx] {
            LineNode::Block(_) => return Err(ParseError::UnexpectedBlock),
            LineNode::Line(line) => line,
        };

        let mut lines = vec![captured(line)];
        idx += 1;
        while let Some(LineNode::Line(next_line)) = nodes.get(idx) {
            lines.push(captured(next_line));
            idx += 1;
        }

        let mut nested = Vec::new();
        if let Some(LineNode::Block(inner)) = nodes.get(idx) {
            nested = parse_code_body(inner, convention)?;
            idx += 1;
        }
        items.push(ParseNode::Paragraph(ParagraphNode { lines, nested }));
    }

    Ok(items)
}

fn captured(line: &SourceLine) -> CapturedLine {
    CapturedLine {
        text: line.text.clone(),
        breaks: line.breaks,
    }
}

fn describe(node: Option<&LineNode>) -> String {
    match node {
        None => "end of input".to_string(),
        Some(LineNode::Block(_)) => "indented block".to_string(),
        Some(LineNode::Line(line)) => {
            let text = &line.text;
            if text.chars().count() > 40 {
                format!("`{}...`", text.chars().take(40).collect::<String>())
            } else {
                format!("`{text}`")
            }
        }
    }
}
