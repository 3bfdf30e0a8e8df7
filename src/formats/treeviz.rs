//! Structural tree dump
//!
//!     A diagnostics aid: one element per line, children indented, aliases
//!     skipped. Used in tests to assert on document shape without walking
//!     the model by hand.

use crate::ast::elements::{Document, Element, Entry, ParaLine, Paragraph};

const UNIT: &str = "   ";

/// Render an indented dump of the document's structure.
pub fn render_tree(doc: &Document) -> String {
    let mut out: Vec<String> = Vec::new();

    for (key, entry) in doc.iter() {
        match entry {
            Entry::Flag(value) => {
                out.push(key.to_string());
                out.push(format!("{UNIT}{value}"));
            }
            Entry::Section(section) => {
                if key != section.title {
                    continue;
                }
                out.push(String::new());
                out.push(format!("Section(title={})", section.title));
                for element in &section.elements {
                    element_lines(element, UNIT, &mut out);
                }
            }
        }
    }

    format!("{}\n", out.join("\n"))
}

fn element_lines(element: &Element, indent: &str, out: &mut Vec<String>) {
    let deeper = format!("{indent}{UNIT}");
    match element {
        Element::Paragraph(para) => paragraph_lines(para, indent, out),
        Element::Code(code) => {
            out.push(format!(
                "{indent}Code(lang={})",
                code.lang.as_deref().unwrap_or("None")
            ));
            for para in &code.body {
                paragraph_lines(para, &deeper, out);
            }
        }
        Element::Item(item) => {
            out.push(format!(
                "{indent}Item(name={}, type={}, desc={})",
                item.name,
                item.ty.as_deref().unwrap_or("None"),
                item.desc
            ));
            for child in &item.children {
                element_lines(child, &deeper, out);
            }
        }
        Element::Checklist(entry) => {
            out.push(format!("{indent}Checklist(text={})", entry.text));
            for child in &entry.children {
                element_lines(child, &deeper, out);
            }
        }
    }
}

fn paragraph_lines(para: &Paragraph, indent: &str, out: &mut Vec<String>) {
    out.push(format!("{indent}Paragraph(lines={})", para.lines.len()));
    let deeper = format!("{indent}{UNIT}");
    for line in &para.lines {
        match line {
            ParaLine::Text(text) => out.push(format!("{deeper}{text}")),
            ParaLine::Nested(inner) => paragraph_lines(inner, &deeper, out),
        }
    }
}
