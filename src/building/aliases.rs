//! Header synonym resolution
//!
//!     Recognized synonyms map to one canonical section after parsing: the
//!     canonical title gains a redirect entry pointing at the alias's own
//!     section, so both titles resolve to the same object. Finding the
//!     canonical title already present alongside an alias is a duplicate.
//!
//!     The table is scanned in declaration order, so two aliases of the same
//!     canonical title collide deterministically on the second one.

use super::DuplicateSectionError;
use crate::ast::elements::Document;

/// `(alias, canonical)` pairs shared by the colon-headed and
/// underline-headed conventions. The at-sign convention resolves none.
pub const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("Args", "Parameters"),
    ("Arguments", "Parameters"),
    ("Keyword Args", "Keyword Arguments"),
    ("Return", "Returns"),
    ("Warnings", "Warning"),
    ("Yield", "Yields"),
];

/// Add a redirect entry for every alias present in the document.
pub fn resolve_aliases(
    doc: &mut Document,
    table: &[(&str, &str)],
) -> Result<(), DuplicateSectionError> {
    for (alias, canonical) in table {
        let Some(section) = doc.section(alias).cloned() else {
            continue;
        };
        if doc.get(canonical).is_some() {
            return Err(DuplicateSectionError {
                alias: (*alias).to_string(),
                canonical: (*canonical).to_string(),
            });
        }
        doc.insert_redirect((*canonical).to_string(), section);
    }
    Ok(())
}
