//! At-sign-headed convention
//!
//!     Sections are `@Title:` lines with indented bodies. Item headers follow
//!     the colon-headed shape, plus a type-only form `(name): description`.
//!     A literal `@API` line before everything else is consumed during
//!     preprocessing and stored as a document-level flag. This convention has
//!     no header synonyms.

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::ItemFields;
use super::convention::{
    dedent, Convention, HeaderMatch, Preprocessed, INDENT_BASE, LEADING_SECTION_TITLE,
};
use crate::ast::elements::Item;
use crate::lexing::LineNode;

/// The literal marker line recorded as the document's `API` flag.
pub const API_MARKER: &str = "@API";

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@([A-Za-z_]\w*):[ \t]*$").expect("header regex"));

static STOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@[A-Za-z_]\w*[ \t]*:").expect("stop regex"));

static ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_*][\w.*]*)(?:[ \t]*\(([^)]+)\))?:[ \t]*(\S.*)$").expect("item regex")
});

static ITEM_TYPE_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\([ \t]*([A-Za-z_*][\w.*]*)[ \t]*\):[ \t]*(\S.*)$").expect("type-only regex")
});

/// The at-sign-headed convention strategy.
pub struct AtSignConvention;

impl Convention for AtSignConvention {
    fn name(&self) -> &'static str {
        "at-sign"
    }

    fn preprocess(&self, text: &str) -> Preprocessed {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Preprocessed {
                text: "\n".to_string(),
                api: Some(false),
            };
        }

        let mut first_line = lines.remove(0);
        let rest = dedent(&lines.join("\n"));
        let mut lines: Vec<&str> = rest.lines().collect();

        let api = first_line == API_MARKER;
        if first_line.is_empty() || api {
            first_line = if lines.is_empty() { "" } else { lines.remove(0) };
        }

        let mut out: Vec<String> = vec![
            format!("@{LEADING_SECTION_TITLE}:"),
            format!("{INDENT_BASE}{first_line}"),
        ];

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim_end();
            if STOP.is_match(trimmed) {
                out.extend(lines[i..].iter().map(|l| l.to_string()));
                break;
            }
            out.push(if trimmed.is_empty() {
                String::new()
            } else {
                format!("{INDENT_BASE}{trimmed}")
            });
        }

        Preprocessed {
            text: format!("{}\n", out.join("\n").trim_end()),
            api: Some(api),
        }
    }

    fn match_header(&self, nodes: &[LineNode], at: usize) -> Option<HeaderMatch> {
        let line = nodes.get(at)?.as_line()?;
        HEADER.captures(&line.text).map(|caps| HeaderMatch {
            title: caps[1].to_string(),
            consumed: 1,
        })
    }

    fn match_item(&self, line: &str) -> Option<ItemFields> {
        if let Some(caps) = ITEM.captures(line) {
            return Some(ItemFields {
                name: caps[1].to_string(),
                ty: caps.get(2).map(|m| m.as_str().to_string()),
                desc: caps[3].to_string(),
            });
        }
        // type-only form: the parenthesized word becomes the name
        ITEM_TYPE_ONLY.captures(line).map(|caps| ItemFields {
            name: caps[1].to_string(),
            ty: None,
            desc: caps[2].to_string(),
        })
    }

    fn header_lines(&self, title: &str) -> Vec<String> {
        vec![format!("@{title}:")]
    }

    fn item_line(&self, item: &Item) -> String {
        match &item.ty {
            Some(ty) => format!("{} ({}): {}", item.name, ty, item.desc),
            None => format!("{}: {}", item.name, item.desc),
        }
    }

    fn markdown_item_line(&self, item: &Item) -> String {
        match &item.ty {
            Some(ty) => format!("`{}` (`{}`): {}", item.name, ty, item.desc),
            None => format!("`{}`: {}", item.name, item.desc),
        }
    }
}
