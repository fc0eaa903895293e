//! Reference (`[label]: url "title"`) and note (`[^label]: text`) definitions.

use crate::element::Link;

use super::strip_nonindent_space;

pub struct ReferenceDefinition;

impl ReferenceDefinition {
    /// Parses a single-line link reference definition.
    ///
    /// With notes enabled, labels starting with `^` belong to note
    /// definitions and are rejected here.
    pub fn parse(line: &str, notes_enabled: bool) -> Option<Link> {
        let t = strip_nonindent_space(line)?.strip_prefix('[')?;
        let close = t.find(']')?;
        let label = &t[..close];
        if label.trim().is_empty() || (notes_enabled && label.starts_with('^')) {
            return None;
        }
        let rest = t[close + 1..].strip_prefix(':')?.trim_start();

        let (url, rest) = if let Some(inner) = rest.strip_prefix('<') {
            let end = inner.find('>')?;
            (&inner[..end], &inner[end + 1..])
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            (&rest[..end], &rest[end..])
        };
        if url.is_empty() {
            return None;
        }

        let title = Self::title(rest.trim())?;
        Some(Link::new(url, title).with_label(label))
    }

    /// An optional `"title"`, `'title'` or `(title)`; anything else is junk.
    fn title(rest: &str) -> Option<&str> {
        if rest.is_empty() {
            return Some("");
        }
        let mut chars = rest.chars();
        let open = chars.next()?;
        let close = match open {
            '"' => '"',
            '\'' => '\'',
            '(' => ')',
            _ => return None,
        };
        let inner = rest[1..].strip_suffix(close)?;
        Some(inner)
    }
}

pub struct NoteDefinition;

impl NoteDefinition {
    pub const OPEN: &'static str = "[^";

    /// Parses `[^label]: text`, returning the label and the first line of text.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let t = strip_nonindent_space(line)?.strip_prefix(Self::OPEN)?;
        let close = t.find(']')?;
        let label = &t[..close];
        if label.is_empty() || label.contains(char::is_whitespace) {
            return None;
        }
        let rest = t[close + 1..].strip_prefix(':')?;
        Some((label, rest.trim_start_matches([' ', '\t'])))
    }
}
