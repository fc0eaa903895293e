pub mod block_quote;
pub mod code_fence;
pub mod definition;
pub mod heading;
pub mod html_block;
pub mod list;
pub mod rule;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use definition::{NoteDefinition, ReferenceDefinition};
pub use heading::Heading;
pub use html_block::{HtmlBlock, HtmlOpen};
pub use list::{ListKind, ListMarker};
pub use rule::HorizontalRule;

/// Strips up to three leading spaces. Returns `None` for indented lines.
pub fn strip_nonindent_space(line: &str) -> Option<&str> {
    let n = line.bytes().take_while(|b| *b == b' ').count();
    (n <= 3).then(|| &line[n..])
}

/// Strips one level of indentation (four spaces or a tab), if present.
pub fn strip_indent(line: &str) -> Option<&str> {
    line.strip_prefix("    ").or_else(|| line.strip_prefix('\t'))
}

pub fn strip_optional_indent(line: &str) -> &str {
    strip_indent(line).unwrap_or(line)
}
