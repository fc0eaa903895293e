use super::strip_nonindent_space;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` marker (and a single following space) from a line.
    ///
    /// Returns `None` when the line does not open with the marker. Nested
    /// markers are left in place for the re-parse of the quote body.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = strip_nonindent_space(line)?.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
