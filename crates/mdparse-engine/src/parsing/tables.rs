//! Reference and note side-tables.
//!
//! Both tables are built once per document from the preformatted text and
//! then consulted read-only by every content parse, including the re-parses
//! the raw block resolver performs.

use std::collections::HashMap;

use crate::element::{Element, Link};

/// Normalizes a label for matching: case-folded, inner whitespace collapsed.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Link reference definitions keyed by normalized label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    entries: HashMap<String, Link>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a definition. The first definition of a label wins.
    pub fn insert(&mut self, link: Link) {
        let key = normalize_label(&link.label);
        self.entries.entry(key).or_insert(link);
    }

    pub fn get(&self, label: &str) -> Option<&Link> {
        self.entries.get(&normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Link> for References {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut refs = References::new();
        for link in iter {
            refs.insert(link);
        }
        refs
    }
}

/// Note definitions keyed by normalized label.
///
/// Each body is kept exactly as the block grammar produced it, a list of
/// raw blocks. The raw block resolver resolves each body at most once and
/// shares the result between all references to the note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    entries: HashMap<String, Vec<Element>>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, body: Vec<Element>) {
        self.entries
            .entry(normalize_label(label))
            .or_insert(body);
    }

    pub fn get(&self, label: &str) -> Option<&[Element]> {
        self.entries.get(&normalize_label(label)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
