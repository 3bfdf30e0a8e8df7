//! Checklist entry element

use super::element::Element;
use serde::Serialize;
use std::fmt;

/// A dash- or asterisk-marked entry, with any deeper-indented content as
/// children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistEntry {
    pub text: String,
    pub children: Vec<Element>,
}

impl ChecklistEntry {
    pub fn new(text: String, children: Vec<Element>) -> Self {
        ChecklistEntry { text, children }
    }
}

impl fmt::Display for ChecklistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChecklistEntry({})", self.text)
    }
}
