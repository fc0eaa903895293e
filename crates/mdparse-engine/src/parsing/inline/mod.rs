//! # Inline Parsing
//!
//! Turns the text of a paragraph, heading or link label into inline
//! elements: text runs, spaces and breaks, emphasis, code spans, links,
//! images, autolinks, raw HTML, note references and smart punctuation.
//!
//! The parser works directly on the string with a [`cursor::Cursor`];
//! delimiter rules live in [`kinds`], one type per construct.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inlines;
