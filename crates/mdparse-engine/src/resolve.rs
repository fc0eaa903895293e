//! Replaces raw placeholders with parsed content and attaches note bodies.

use std::collections::HashMap;
use std::sync::Arc;

use crate::element::{CHUNK_DELIMITER, Content, Element, NoteBody};
use crate::extensions::Extensions;
use crate::parsing::tables::normalize_label;
use crate::parsing::{Grammar, Notes, References};

/// Resolves every [`Content::Raw`] node in a tree.
///
/// A raw node's text is split on [`CHUNK_DELIMITER`]; each chunk is parsed on
/// its own and the results are appended, in order, as the node's children.
/// The node itself becomes a [`Content::List`]. Resolution then continues into
/// the children, so raw nodes produced by a re-parse are resolved too.
///
/// Note references are filled in afterwards. Each referenced note body is
/// resolved once and shared by all of its references. A reference met while
/// its own note is still being expanded (a note that refers back to itself,
/// directly or through other notes) is left as literal `[^label]` text.
///
/// The walk keeps its own stacks, so neither tree depth nor the length of a
/// chain of notes is limited by the call stack.
pub struct RawBlockResolver<'a, G: Grammar + ?Sized> {
    grammar: &'a G,
    extensions: Extensions,
    references: &'a References,
    notes: &'a Notes,
    /// Finished note bodies by normalized label.
    bodies: HashMap<String, NoteBody>,
}

impl<'a, G: Grammar + ?Sized> RawBlockResolver<'a, G> {
    pub fn new(
        grammar: &'a G,
        extensions: Extensions,
        references: &'a References,
        notes: &'a Notes,
    ) -> Self {
        Self {
            grammar,
            extensions,
            references,
            notes,
            bodies: HashMap::new(),
        }
    }

    /// Resolves a sibling sequence, returning how many raw nodes were
    /// replaced, including those inside note bodies.
    pub fn resolve(&mut self, elements: &mut [Element]) -> usize {
        let mut wanted = Vec::new();
        let mut resolved = self.resolve_raw(elements, &mut wanted);
        resolved += self.resolve_notes(wanted);
        self.attach_notes(elements);
        resolved
    }

    /// Pre-order walk: a node, then its children, then its next sibling.
    ///
    /// Labels of note references whose body is not finished yet are pushed
    /// onto `wanted`.
    fn resolve_raw(&self, elements: &mut [Element], wanted: &mut Vec<String>) -> usize {
        let mut resolved = 0;
        let mut stack = vec![elements];
        while let Some(siblings) = stack.pop() {
            let Some((element, rest)) = siblings.split_first_mut() else {
                continue;
            };
            stack.push(rest);

            if element.is_raw() {
                if let Content::Raw(text) = element.replace_content(Content::List) {
                    self.splice_chunks(element, &text);
                    resolved += 1;
                }
            }
            if let Content::NoteRef(note) = element.content() {
                let label = normalize_label(&note.label);
                if note.body.is_none() && !self.bodies.contains_key(&label) {
                    wanted.push(label);
                }
            }
            stack.push(&mut element.children);
        }
        resolved
    }

    fn splice_chunks(&self, element: &mut Element, text: &str) {
        // Empty chunks (leading, trailing or doubled delimiters) are skipped.
        for chunk in text.split(CHUNK_DELIMITER).filter(|c| !c.is_empty()) {
            let parsed = self
                .grammar
                .parse(chunk, self.extensions, self.references, self.notes);
            log::trace!("raw chunk of {} bytes -> {} elements", chunk.len(), parsed.len());
            element.append_children(parsed);
        }
    }

    /// Resolves the bodies of `wanted` notes and of every note they refer to,
    /// dependencies first.
    fn resolve_notes(&mut self, mut wanted: Vec<String>) -> usize {
        let notes = self.notes;
        let mut resolved = 0;
        // Bodies whose raw blocks are done but whose own references wait on
        // the notes stacked above them.
        let mut expanding: HashMap<String, Vec<Element>> = HashMap::new();

        while let Some(label) = wanted.last().cloned() {
            if self.bodies.contains_key(&label) {
                wanted.pop();
            } else if let Some(mut body) = expanding.remove(&label) {
                wanted.pop();
                self.attach_notes(&mut body);
                self.bodies.insert(label, Arc::new(body));
            } else if let Some(raw) = notes.get(&label) {
                let mut body = raw.to_vec();
                let mut needs = Vec::new();
                resolved += self.resolve_raw(&mut body, &mut needs);
                log::trace!("note {label:?} refers to {} unfinished notes", needs.len());
                wanted.extend(
                    needs
                        .into_iter()
                        .filter(|need| *need != label && !expanding.contains_key(need)),
                );
                expanding.insert(label, body);
            } else {
                wanted.pop();
            }
        }
        resolved
    }

    /// Gives every open note reference its finished body, or turns it back
    /// into text when there is none.
    fn attach_notes(&self, elements: &mut [Element]) {
        let mut stack = vec![elements];
        while let Some(siblings) = stack.pop() {
            let Some((element, rest)) = siblings.split_first_mut() else {
                continue;
            };
            stack.push(rest);

            let mut literal = None;
            if let Content::NoteRef(note) = &mut element.content {
                if note.body.is_none() {
                    match self.bodies.get(&normalize_label(&note.label)) {
                        Some(body) => note.body = Some(Arc::clone(body)),
                        None => literal = Some(format!("[^{}]", note.label)),
                    }
                }
            }
            if let Some(text) = literal {
                element.replace_content(Content::Str(text));
            }
            stack.push(&mut element.children);
        }
    }
}
