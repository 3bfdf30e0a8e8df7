//! Underline-headed convention
//!
//!     Sections are a title line over a run of dashes at least as long as the
//!     title. Bodies may sit flush with the header; an indented body is
//!     allowed but must then be the whole body. Item headers are a bare name
//!     or `name : type` alone on a line, and only count as items when a
//!     deeper-indented block follows immediately; the description always
//!     lives in that block, never on the header line.

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::ItemFields;
use super::convention::{dedent, Convention, HeaderMatch, Preprocessed, LEADING_SECTION_TITLE};
use crate::ast::elements::Item;
use crate::building::aliases::STANDARD_ALIASES;
use crate::lexing::LineNode;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z][\w ]*)$").expect("title regex"));

static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-+)[ \t]*$").expect("underline regex"));

static ITEM_WITH_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_*][\w.*]*)[ \t]*:[ \t]*([A-Za-z_][\w ,\[\]]*)$").expect("item regex")
});

static ITEM_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_*][\w.*]*)$").expect("bare item regex"));

/// The underline-headed convention strategy.
pub struct UnderlineConvention;

impl Convention for UnderlineConvention {
    fn name(&self) -> &'static str {
        "underline"
    }

    fn preprocess(&self, text: &str) -> Preprocessed {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Preprocessed {
                text: "\n".to_string(),
                api: None,
            };
        }

        let first_line = lines.remove(0);
        let rest = dedent(&lines.join("\n"));

        let mut out: Vec<String> = vec![
            LEADING_SECTION_TITLE.to_string(),
            "-".repeat(LEADING_SECTION_TITLE.len()),
            first_line.to_string(),
        ];
        out.extend(rest.lines().map(|l| l.to_string()));

        Preprocessed {
            text: format!("{}\n", out.join("\n").trim_end()),
            api: None,
        }
    }

    fn match_header(&self, nodes: &[LineNode], at: usize) -> Option<HeaderMatch> {
        let title_line = nodes.get(at)?.as_line()?;
        // the underline must sit on the very next line
        if title_line.breaks != 1 {
            return None;
        }
        let title = TITLE.captures(&title_line.text)?[1].trim_end().to_string();

        let underline = nodes.get(at + 1)?.as_line()?;
        let dashes = UNDERLINE.captures(&underline.text)?[1].len();
        if dashes < title.len() {
            return None;
        }

        Some(HeaderMatch { title, consumed: 2 })
    }

    fn match_item(&self, line: &str) -> Option<ItemFields> {
        if let Some(caps) = ITEM_WITH_TYPE.captures(line) {
            return Some(ItemFields {
                name: caps[1].to_string(),
                ty: Some(caps[2].trim_end().to_string()),
                desc: String::new(),
            });
        }
        ITEM_BARE.captures(line).map(|caps| ItemFields {
            name: caps[1].to_string(),
            ty: None,
            desc: String::new(),
        })
    }

    fn item_requires_block(&self) -> bool {
        true
    }

    fn flush_bodies(&self) -> bool {
        true
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        STANDARD_ALIASES
    }

    fn header_lines(&self, title: &str) -> Vec<String> {
        vec![title.to_string(), "-".repeat(title.len())]
    }

    fn item_line(&self, item: &Item) -> String {
        match &item.ty {
            Some(ty) => format!("{} : {}", item.name, ty),
            None => item.name.clone(),
        }
    }

    fn markdown_item_line(&self, item: &Item) -> String {
        match &item.ty {
            Some(ty) => format!("`{}` : `{}`", item.name, ty),
            None => format!("`{}`", item.name),
        }
    }

    fn gap_after_nested_entries(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::lex;

    #[test]
    fn test_header_requires_underline() {
        let nodes = lex("Example\n-------\n").unwrap();
        let header = UnderlineConvention.match_header(&nodes, 0).unwrap();
        assert_eq!(header.title, "Example");
        assert_eq!(header.consumed, 2);

        let nodes = lex("Example\nno dashes\n").unwrap();
        assert!(UnderlineConvention.match_header(&nodes, 0).is_none());
    }

    #[test]
    fn test_short_underline_rejected() {
        let nodes = lex("Example\n---\n").unwrap();
        assert!(UnderlineConvention.match_header(&nodes, 0).is_none());
    }

    #[test]
    fn test_blank_line_breaks_header() {
        let nodes = lex("Example\n\n-------\n").unwrap();
        assert!(UnderlineConvention.match_header(&nodes, 0).is_none());
    }

    #[test]
    fn test_item_shapes() {
        let fields = UnderlineConvention.match_item("param1 : int").unwrap();
        assert_eq!(fields.name, "param1");
        assert_eq!(fields.ty.as_deref(), Some("int"));
        assert_eq!(fields.desc, "");

        let fields = UnderlineConvention.match_item("param1: int").unwrap();
        assert_eq!(fields.ty.as_deref(), Some("int"));

        let fields = UnderlineConvention.match_item("bool").unwrap();
        assert_eq!(fields.name, "bool");
        assert_eq!(fields.ty, None);
    }

    #[test]
    fn test_item_name_is_space_free() {
        assert!(UnderlineConvention.match_item("Long description").is_none());
        assert!(UnderlineConvention.match_item("list of str : int").is_none());
    }

    #[test]
    fn test_type_may_contain_spaces() {
        let fields = UnderlineConvention.match_item("x : list of str").unwrap();
        assert_eq!(fields.ty.as_deref(), Some("list of str"));
    }

    #[test]
    fn test_preprocess_synthesizes_underlined_leading_section() {
        let pre = UnderlineConvention.preprocess("First line\n\n    Args\n    ----\n");
        assert_eq!(pre.text, "SUMMARY\n-------\nFirst line\n\nArgs\n----\n");
    }
}
