//! Markdown parsing into an owned document tree, with HTML output.
//!
//! ```
//! use mdparse_engine::{Extensions, Format, format_extended_markdown};
//!
//! let html = format_extended_markdown("Hello *world*", Extensions::SMART, Format::Html);
//! assert_eq!(html, "<p>Hello <em>world</em></p>");
//! ```

pub mod document;
pub mod element;
pub mod extensions;
pub mod parsing;
pub mod preformat;
pub mod render;
pub mod resolve;
mod teardown;
pub mod traverse;

// Re-export key types for easier usage
pub use document::Document;
pub use element::{Content, Element, ElementKind, Link, NoteBody, NoteRef};
pub use extensions::{Extension, Extensions, UnknownExtension};
pub use parsing::{Grammar, MarkdownGrammar, Notes, References};
pub use render::{Format, Renderer, UnknownFormat, format_tree};
pub use traverse::{Visitor, traverse as traverse_tree};

/// Parses markdown with no extensions enabled.
pub fn parse_markdown(markdown: &str) -> Document {
    parse_extended_markdown(markdown, Extensions::empty())
}

pub fn parse_extended_markdown(markdown: &str, extensions: Extensions) -> Document {
    Document::build(markdown, extensions)
}

/// Parses and renders markdown with no extensions enabled.
pub fn format_markdown(markdown: &str, format: Format) -> String {
    format_extended_markdown(markdown, Extensions::empty(), format)
}

/// Parses, renders and releases a document in one call.
pub fn format_extended_markdown(markdown: &str, extensions: Extensions, format: Format) -> String {
    let document = parse_extended_markdown(markdown, extensions);
    let output = document.render(format);
    document.destroy();
    output
}
