//! Document model
//!
//!     The canonical in-memory form shared by parsing and rendering. Built
//!     once per parse, never mutated afterwards; renderers clone what they
//!     need to restructure.

pub mod elements;
pub mod snapshot;

pub use elements::{
    ChecklistEntry, CodeBlock, Document, Element, Entry, Item, ParaLine, Paragraph, Section,
};
