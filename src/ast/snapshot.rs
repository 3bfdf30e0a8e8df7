//! JSON snapshot of a document
//!
//!     Produces a `serde_json::Value` rendition of a parsed document for
//!     tooling interop and structural test assertions. Alias redirects are
//!     recorded as `alias_of` markers rather than repeating the section body.

use super::elements::{Document, Entry};
use serde_json::{json, Value};

/// Render a document as a JSON value.
pub fn snapshot(doc: &Document) -> Value {
    let entries: Vec<Value> = doc
        .iter()
        .map(|(key, entry)| match entry {
            Entry::Flag(value) => json!({ "key": key, "flag": value }),
            Entry::Section(section) if key != section.title => {
                json!({ "key": key, "alias_of": section.title })
            }
            Entry::Section(section) => json!({
                "key": key,
                "section": serde_json::to_value(section.as_ref()).unwrap_or(Value::Null),
            }),
        })
        .collect();

    json!({ "entries": entries })
}
