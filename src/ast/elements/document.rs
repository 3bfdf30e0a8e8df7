//! Document
//!
//!     A document is an ordered mapping from title to entry, in source order,
//!     which is also rendering order. Three kinds of entries share the map:
//!
//!     - canonical sections, keyed by their own title;
//!     - alias redirects, keyed by a canonical title but pointing at the same
//!       `Arc<Section>` as the alias-titled entry (the key differs from the
//!       section's title, which is how iteration recognizes and skips them);
//!     - document-level flags, e.g. the at-sign convention's `API` marker.
//!
//!     Documents are immutable once parsing returns them; the mutating
//!     methods exist for the builder.

use super::section::Section;
use std::fmt;
use std::sync::Arc;

/// One entry of the ordered document mapping.
#[derive(Debug, Clone)]
pub enum Entry {
    Section(Arc<Section>),
    Flag(bool),
}

/// The parsed document: ordered entries preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    entries: Vec<(String, Entry)>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Insert a section under its own title, replacing in place on a repeated
    /// title.
    pub fn insert_section(&mut self, section: Arc<Section>) {
        let key = section.title.clone();
        self.insert_entry(key, Entry::Section(section));
    }

    /// Insert a redirect: `key` differs from the section's own title but
    /// resolves to the very same section.
    pub fn insert_redirect(&mut self, key: String, section: Arc<Section>) {
        self.insert_entry(key, Entry::Section(section));
    }

    /// Set a document-level flag entry.
    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.insert_entry(key.to_string(), Entry::Flag(value));
    }

    fn insert_entry(&mut self, key: String, entry: Entry) {
        if let Some(existing) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = entry;
        } else {
            self.entries.push((key, entry));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Look up a section by title or alias.
    pub fn section(&self, key: &str) -> Option<&Arc<Section>> {
        match self.get(key) {
            Some(Entry::Section(section)) => Some(section),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(Entry::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    /// Number of entries, counting redirects and flags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Canonical sections only: skips redirects (key differs from the
    /// section's title) and flags, so no section appears twice.
    pub fn sections(&self) -> impl Iterator<Item = &Arc<Section>> {
        self.entries.iter().filter_map(|(key, entry)| match entry {
            Entry::Section(section) if *key == section.title => Some(section),
            _ => None,
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} entries)", self.entries.len())
    }
}
