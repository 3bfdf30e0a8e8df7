//! Pipeline
//!
//!     The public entry points: per-convention [`Parser`]s with their
//!     memoization cache, and [`AutoParser`] for convention selection.

pub mod auto;
pub mod parser;

pub use auto::AutoParser;
pub use parser::Parser;
