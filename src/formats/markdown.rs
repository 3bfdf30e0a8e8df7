//! Markdown renderer
//!
//!     The same walk as the text renderer with markdown decoration: the
//!     leading line and section titles become headings of the requested
//!     level, item names and types gain backtick emphasis, and lines that
//!     belong to paragraphs, checklist entries, items or code bodies get two
//!     trailing spaces so their line breaks survive markdown rendering.
//!     Fence lines stay undecorated.

use crate::ast::elements::{Document, Element, Entry, ParaLine, Paragraph, Section};
use crate::parsing::at_sign::API_MARKER;
use crate::parsing::convention::{Convention, LEADING_SECTION_TITLE};

pub(crate) struct MarkdownRenderer<'a> {
    convention: &'a dyn Convention,
    unit: &'a str,
    heading_level: usize,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(convention: &'a dyn Convention, unit: &'a str, heading_level: usize) -> Self {
        MarkdownRenderer {
            convention,
            unit,
            heading_level,
        }
    }

    pub fn render(&self, doc: &Document, base: &str) -> String {
        let mut lines: Vec<String> = Vec::new();

        for (key, entry) in doc.iter() {
            let Entry::Section(section) = entry else {
                continue;
            };
            if key != section.title {
                continue;
            }
            let leading_blank = section.title != LEADING_SECTION_TITLE;
            lines.extend(self.section_lines(section, base, leading_blank));
        }

        if doc.flag("API") == Some(true) {
            lines.insert(0, API_MARKER.to_string());
            if lines.len() > 1 {
                let prefixed = format!("{base}{}", lines[1]);
                lines[1] = prefixed;
            }
        }

        format!("{}\n", lines.join("\n"))
    }

    fn heading(&self) -> String {
        "#".repeat(self.heading_level.max(1))
    }

    fn section_lines(&self, section: &Section, indent: &str, leading_blank: bool) -> Vec<String> {
        let mut out: Vec<String> = if leading_blank {
            vec![String::new()]
        } else {
            Vec::new()
        };

        let mut elements = section.elements.clone();
        let body_indent;

        if section.title == LEADING_SECTION_TITLE {
            if let Some(Element::Paragraph(first)) = elements.first() {
                if let Some(ParaLine::Text(first_line)) = first.lines.first() {
                    out.push(format!("{} {first_line}", self.heading()));
                    let rest = Paragraph::new(first.lines[1..].to_vec());
                    elements[0] = Element::Paragraph(rest);
                }
            }
            body_indent = indent.to_string();
        } else {
            out.push(format!(
                "{indent}{} {}",
                self.heading(),
                self.convention.markdown_header(&section.title)
            ));
            body_indent = if self.convention.flush_bodies() {
                indent.to_string()
            } else {
                format!("{indent}{}", self.unit)
            };
        }

        for (i, element) in elements.iter().enumerate() {
            let blank = i != 0
                && (element.is_prose()
                    || (self.convention.gap_after_nested_entries()
                        && elements[i - 1].has_children()));
            out.extend(self.element_lines(element, &body_indent, blank));
        }

        out
    }

    fn element_lines(&self, element: &Element, indent: &str, leading_blank: bool) -> Vec<String> {
        match element {
            Element::Paragraph(para) => self.paragraph_lines(para, indent, leading_blank),
            Element::Code(code) => {
                let mut out = lead(leading_blank);
                out.push(format!("{indent}```{}", code.lang.as_deref().unwrap_or("")));
                for (i, para) in code.body.iter().enumerate() {
                    out.extend(self.paragraph_lines(para, indent, i > 0));
                }
                out.push(format!("{indent}```"));
                out
            }
            Element::Checklist(entry) => {
                let mut out = lead(leading_blank);
                out.push(format!("{indent}- {}  ", entry.text));
                self.child_lines(&entry.children, indent, &mut out);
                out
            }
            Element::Item(item) => {
                let mut out = lead(leading_blank);
                out.push(format!(
                    "{indent}{}  ",
                    self.convention.markdown_item_line(item)
                ));
                self.child_lines(&item.children, indent, &mut out);
                out
            }
        }
    }

    fn child_lines(&self, children: &[Element], indent: &str, out: &mut Vec<String>) {
        let child_indent = format!("{indent}{}", self.unit);
        for (i, child) in children.iter().enumerate() {
            out.extend(self.element_lines(child, &child_indent, i != 0));
        }
    }

    fn paragraph_lines(&self, para: &Paragraph, indent: &str, leading_blank: bool) -> Vec<String> {
        let mut out = lead(leading_blank);
        for (i, line) in para.lines.iter().enumerate() {
            match line {
                ParaLine::Text(text) => out.push(format!("{indent}{text}  ")),
                ParaLine::Nested(inner) => {
                    if i == 0 && leading_blank && out.len() == 1 {
                        out.clear();
                    }
                    let deeper = format!("{indent}{}", self.unit);
                    out.extend(self.paragraph_lines(inner, &deeper, i > 0));
                }
            }
        }
        out
    }
}

fn lead(leading_blank: bool) -> Vec<String> {
    if leading_blank {
        vec![String::new()]
    } else {
        Vec::new()
    }
}
