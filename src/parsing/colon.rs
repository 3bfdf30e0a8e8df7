//! Colon-headed convention
//!
//!     Sections are `Title:` lines at column zero, titles starting uppercase,
//!     with a mandatory indented body. Item headers carry the description on
//!     the line: `name: description` or `name (type): description`.
//!
//!     Preprocessing wraps the headerless leading text: the first raw line
//!     and every following line up to the first header-looking line are
//!     indented under a synthetic leading section.

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::ItemFields;
use super::convention::{
    dedent, Convention, HeaderMatch, Preprocessed, INDENT_BASE, LEADING_SECTION_TITLE,
};
use crate::ast::elements::Item;
use crate::building::aliases::STANDARD_ALIASES;
use crate::lexing::LineNode;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z][\w ]*):[ \t]*$").expect("header regex"));

/// A header-looking line ends the leading section during preprocessing. Note
/// the stricter shape: no spaces in the title, mirroring the leading-section
/// wrapper rather than the section grammar.
static STOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]\w*[ \t]*:").expect("stop regex"));

static ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_*][\w.*]*)(?:[ \t]*\(([^)]+)\))?:[ \t]*(\S.*)$").expect("item regex")
});

/// The colon-headed convention strategy.
pub struct ColonConvention;

impl Convention for ColonConvention {
    fn name(&self) -> &'static str {
        "colon"
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
        let lines: Vec<&str> = rest.lines().collect();

        let mut out: Vec<String> = vec![
            format!("{LEADING_SECTION_TITLE}:"),
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
            api: None,
        }
    }

    fn match_header(&self, nodes: &[LineNode], at: usize) -> Option<HeaderMatch> {
        let line = nodes.get(at)?.as_line()?;
        HEADER.captures(&line.text).map(|caps| HeaderMatch {
            title: caps[1].trim_end().to_string(),
            consumed: 1,
        })
    }

    fn match_item(&self, line: &str) -> Option<ItemFields> {
        ITEM.captures(line).map(|caps| ItemFields {
            name: caps[1].to_string(),
            ty: caps.get(2).map(|m| m.as_str().to_string()),
            desc: caps[3].to_string(),
        })
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        STANDARD_ALIASES
    }

    fn header_lines(&self, title: &str) -> Vec<String> {
        vec![format!("{title}:")]
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
