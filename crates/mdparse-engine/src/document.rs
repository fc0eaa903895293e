//! # Document Construction
//!
//! [`Document::build`] runs the whole pipeline over one markdown string:
//!
//! 1. [`preformat_text`] expands tabs and appends a blank line.
//! 2. The grammar extracts link references.
//! 3. The grammar extracts notes, with the references available.
//! 4. The grammar parses the content, with both tables available.
//! 5. [`RawBlockResolver`] replaces every raw placeholder and attaches note
//!    bodies to note references.
//! 6. The resolved sequence is wrapped in a synthetic `List` root.
//!
//! The reference and note tables are dropped once the tree is built. Each
//! referenced note body is resolved once and shared by its references.

use std::collections::HashSet;
use std::sync::Arc;

use crate::element::{Content, Element, ElementKind, NoteRef};
use crate::extensions::Extensions;
use crate::parsing::{Grammar, MarkdownGrammar};
use crate::preformat::preformat_text;
use crate::render::{Format, format_tree};
use crate::resolve::RawBlockResolver;
use crate::traverse::{Visitor, traverse_list};

/// A fully resolved document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Builds a document with the bundled [`MarkdownGrammar`].
    pub fn build(markdown: &str, extensions: Extensions) -> Self {
        Self::build_with(&MarkdownGrammar, markdown, extensions)
    }

    /// Builds a document with any grammar.
    pub fn build_with<G: Grammar + ?Sized>(grammar: &G, markdown: &str, extensions: Extensions) -> Self {
        let text = preformat_text(markdown);
        log::debug!(
            "preformatted {} bytes into {} bytes",
            markdown.len(),
            text.len()
        );

        let references = grammar.references(&text, extensions);
        log::debug!("extracted {} references", references.len());

        let notes = grammar.notes(&text, extensions, &references);
        log::debug!("extracted {} notes", notes.len());

        let mut content = grammar.parse(&text, extensions, &references, &notes);
        log::debug!("parsed {} top-level blocks", content.len());

        let resolved =
            RawBlockResolver::new(grammar, extensions, &references, &notes).resolve(&mut content);
        log::debug!("resolved {resolved} raw blocks");

        let document = Self {
            root: Element::with_children(Content::List, content),
        };
        debug_assert!(!document.contains_raw(), "raw block survived resolution");
        document
    }

    /// The synthetic `List` root.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The resolved top-level sequence.
    pub fn children(&self) -> &[Element] {
        self.root.children()
    }

    /// Walks the top-level sequence; top-level elements are at depth 0.
    pub fn traverse<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        traverse_list(self.children(), visitor);
    }

    /// Whether any raw placeholder is left. Each shared note body is
    /// searched once.
    pub fn contains_raw(&self) -> bool {
        let mut found = false;
        let mut seen_notes = HashSet::new();
        self.traverse(&mut |el: &Element, _depth: usize| {
            found |= el.kind() == ElementKind::Raw;
            let first_visit = match el.content() {
                Content::NoteRef(NoteRef {
                    body: Some(body), ..
                }) => seen_notes.insert(Arc::as_ptr(body)),
                _ => true,
            };
            !found && first_visit
        });
        found
    }

    pub fn render(&self, format: Format) -> String {
        format_tree(&self.root, format)
    }

    /// Releases the tree, children before parents.
    ///
    /// Equivalent to dropping the document; provided for callers that want
    /// the release to be explicit.
    pub fn destroy(self) {
        drop(self);
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}
