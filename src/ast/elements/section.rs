//! Section element

use super::element::Element;
use serde::Serialize;
use std::fmt;

/// A titled run of elements. The first section of every document is the
/// synthetic leading section, whose title never appears in the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub elements: Vec<Element>,
}

impl Section {
    pub fn new(title: String, elements: Vec<Element>) -> Self {
        Section { title, elements }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section({}, {} elements)", self.title, self.elements.len())
    }
}
