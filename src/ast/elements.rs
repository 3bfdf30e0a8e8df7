//! Model elements
//!
//!     One file per element, smallest first. `Element` is the closed variant
//!     the transformer and renderers match on.

pub mod checklist;
pub mod code_block;
pub mod document;
pub mod element;
pub mod item;
pub mod paragraph;
pub mod section;

pub use checklist::ChecklistEntry;
pub use code_block::CodeBlock;
pub use document::{Document, Entry};
pub use element::Element;
pub use item::Item;
pub use paragraph::{ParaLine, Paragraph};
pub use section::Section;
