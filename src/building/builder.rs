//! Tree transformer
//!
//!     Converts IR parse nodes into model elements:
//!
//!     - a paragraph run splits into one `Paragraph` per blank-line boundary
//!       (break count above one);
//!     - the nested block trailing a run becomes, per nested paragraph
//!       production, one wrapper paragraph holding the nested paragraphs as
//!       line positions; a nested code block becomes a sibling element;
//!     - because one run can yield several elements, paragraph results are
//!       spliced into the parent sequence rather than kept as a sub-list;
//!     - code bodies go through the same machinery and keep only their
//!       paragraphs.

use std::sync::Arc;

use super::aliases::resolve_aliases;
use super::DuplicateSectionError;
use crate::ast::elements::{
    ChecklistEntry, CodeBlock, Document, Element, Item, ParaLine, Paragraph, Section,
};
use crate::parsing::convention::Convention;
use crate::parsing::ir::{CodeNode, ParagraphNode, ParseNode, SectionNode};

/// Assemble the final document from parsed sections.
pub fn build_document(
    sections: Vec<SectionNode>,
    api: Option<bool>,
    convention: &dyn Convention,
) -> Result<Document, DuplicateSectionError> {
    let mut doc = Document::new();
    for section in sections {
        let elements = build_elements(section.children);
        doc.insert_section(Arc::new(Section::new(section.title, elements)));
    }

    resolve_aliases(&mut doc, convention.aliases())?;

    if let Some(flag) = api {
        doc.set_flag("API", flag);
    }

    Ok(doc)
}

/// Transform a node sequence, splicing multi-paragraph results.
pub fn build_elements(nodes: Vec<ParseNode>) -> Vec<Element> {
    let mut out = Vec::new();
    for node in nodes {
        match node {
            ParseNode::Paragraph(para) => out.extend(build_paragraphs(para)),
            ParseNode::Code(code) => out.push(Element::Code(build_code(code))),
            ParseNode::Item(item) => out.push(Element::Item(Item::new(
                item.fields.name,
                item.fields.ty,
                item.fields.desc,
                build_elements(item.children),
            ))),
            ParseNode::Checklist(entry) => out.push(Element::Checklist(ChecklistEntry::new(
                entry.text,
                build_elements(entry.children),
            ))),
        }
    }
    out
}

/// Split one paragraph run into elements.
fn build_paragraphs(node: ParagraphNode) -> Vec<Element> {
    let mut paras: Vec<Paragraph> = Vec::new();
    let mut fresh = true;

    for line in node.lines {
        if fresh {
            paras.push(Paragraph::default());
        }
        if let Some(last) = paras.last_mut() {
            last.lines.push(ParaLine::Text(line.text));
        }
        fresh = line.breaks > 1;
    }

    let mut out: Vec<Element> = paras.into_iter().map(Element::Paragraph).collect();

    for nested in node.nested {
        match nested {
            ParseNode::Paragraph(inner) => {
                let mut wrapper = Paragraph::default();
                let mut trailing = Vec::new();
                for element in build_paragraphs(inner) {
                    match element {
                        Element::Paragraph(p) => wrapper.lines.push(ParaLine::Nested(p)),
                        other => trailing.push(other),
                    }
                }
                out.push(Element::Paragraph(wrapper));
                out.extend(trailing);
            }
            ParseNode::Code(code) => out.push(Element::Code(build_code(code))),
            // the grammar yields only paragraphs and code here
            ParseNode::Item(_) | ParseNode::Checklist(_) => {}
        }
    }

    out
}

fn build_code(node: CodeNode) -> CodeBlock {
    let body = build_elements(node.body)
        .into_iter()
        .filter_map(|element| match element {
            Element::Paragraph(p) => Some(p),
            _ => None,
        })
        .collect();
    CodeBlock::new(node.lang, body)
}
