//! Named item element
//!
//!     A named, optionally typed entry such as a parameter or return value.
//!     The description sits on the header line in the colon-headed and
//!     at-sign-headed conventions; the underline-headed convention leaves it
//!     empty and carries narrative text as the first child paragraph instead.

use super::element::Element;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub desc: String,
    pub children: Vec<Element>,
}

impl Item {
    pub fn new(name: String, ty: Option<String>, desc: String, children: Vec<Element>) -> Self {
        Item {
            name,
            ty,
            desc,
            children,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item(name={}, type={})",
            self.name,
            self.ty.as_deref().unwrap_or("None")
        )
    }
}
