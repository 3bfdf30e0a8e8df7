//! Shared line classification
//!
//!     The production fragments common to all three conventions: checklist
//!     markers and code fences. Header and item shapes are convention-owned
//!     and live on the strategy.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fields extracted from an item header line.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub ty: Option<String>,
    pub desc: String,
}

static CHECKLIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*] (.+)$").expect("checklist regex"));

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^`{3,}[ \t]*(\w+)?[ \t]*$").expect("fence regex"));

/// Match a checklist marker line; returns the entry text with the marker and
/// its following space stripped.
pub fn match_checklist(line: &str) -> Option<String> {
    CHECKLIST
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Match a fence line: three or more backticks, optionally a bare language
/// tag, nothing else. Returns the language tag if present.
///
/// A backtick line with trailing content beyond the tag is not a fence and
/// falls through to paragraph text.
pub fn match_fence(line: &str) -> Option<Option<String>> {
    FENCE
        .captures(line)
        .map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
}
