//! The bundled markdown grammar.
//!
//! [`Grammar`] is the seam between the document pipeline and whatever turns
//! text into elements. The pipeline calls it in a fixed order: references,
//! then notes (which may use the references), then content. Content parsing
//! may leave [`Content::Raw`] placeholders behind; it must be pure, because
//! the raw block resolver calls it again on fragments of those placeholders.

pub mod blocks;
pub mod inline;
pub mod tables;

#[cfg(test)]
mod tests;

use crate::element::{Content, Element};
use crate::extensions::Extensions;

use blocks::BlockBuilder;
pub use tables::{Notes, References};

/// Read-only state shared by every block and inline parse of one document.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub extensions: Extensions,
    pub references: &'a References,
    pub notes: &'a Notes,
}

impl<'a> ParseContext<'a> {
    pub fn new(extensions: Extensions, references: &'a References, notes: &'a Notes) -> Self {
        Self {
            extensions,
            references,
            notes,
        }
    }
}

/// Front-matter extraction and content parsing.
pub trait Grammar {
    /// Collects link reference definitions.
    fn references(&self, text: &str, extensions: Extensions) -> References;

    /// Collects note definitions. Bodies may refer to `references`.
    fn notes(&self, text: &str, extensions: Extensions, references: &References) -> Notes;

    /// Parses `text` into a sequence of top-level elements.
    fn parse(
        &self,
        text: &str,
        extensions: Extensions,
        references: &References,
        notes: &Notes,
    ) -> Vec<Element>;
}

/// Markdown with the classic extension set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownGrammar;

impl Grammar for MarkdownGrammar {
    fn references(&self, text: &str, extensions: Extensions) -> References {
        let none = References::new();
        let notes = Notes::new();
        let ctx = ParseContext::new(extensions, &none, &notes);
        BlockBuilder::new(text, &ctx)
            .finish()
            .iter()
            .filter_map(|el| match el.content() {
                Content::Reference(link) => Some(link.clone()),
                _ => None,
            })
            .collect()
    }

    fn notes(&self, text: &str, extensions: Extensions, references: &References) -> Notes {
        let mut notes = Notes::new();
        if !extensions.contains(Extensions::NOTES) {
            return notes;
        }
        let empty = Notes::new();
        let ctx = ParseContext::new(extensions, references, &empty);
        for mut el in BlockBuilder::new(text, &ctx).finish() {
            if let Content::Note(Some(label)) = &el.content {
                let label = label.clone();
                notes.insert(&label, std::mem::take(&mut el.children));
            }
        }
        notes
    }

    fn parse(
        &self,
        text: &str,
        extensions: Extensions,
        references: &References,
        notes: &Notes,
    ) -> Vec<Element> {
        let ctx = ParseContext::new(extensions, references, notes);
        BlockBuilder::new(text, &ctx).finish()
    }
}
