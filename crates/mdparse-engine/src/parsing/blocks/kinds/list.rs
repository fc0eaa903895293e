use super::{HorizontalRule, strip_nonindent_space};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

/// List item markers: `*`, `+`, `-` bullets and `1.` style enumerators.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['*', '+', '-'];
    pub const ENUMERATOR_SUFFIX: char = '.';

    /// Parses a list marker, returning the list kind and the item text that
    /// follows the marker and its spacing.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        Self::bullet(line)
            .map(|rest| (ListKind::Bullet, rest))
            .or_else(|| Self::enumerator(line).map(|rest| (ListKind::Ordered, rest)))
    }

    pub fn bullet(line: &str) -> Option<&str> {
        if HorizontalRule::matches(line) {
            return None;
        }
        let t = strip_nonindent_space(line)?;
        let rest = t.strip_prefix(Self::BULLETS)?;
        Self::after_spacing(rest)
    }

    pub fn enumerator(line: &str) -> Option<&str> {
        let t = strip_nonindent_space(line)?;
        let digits = t.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = t[digits..].strip_prefix(Self::ENUMERATOR_SUFFIX)?;
        Self::after_spacing(rest)
    }

    /// At least one space must separate the marker from the item text.
    fn after_spacing(rest: &str) -> Option<&str> {
        let trimmed = rest.trim_start_matches([' ', '\t']);
        (trimmed.len() < rest.len()).then_some(trimmed)
    }

    /// Whether a line opens a list item, allowing one extra level of indent.
    pub fn starts_item(line: &str) -> bool {
        let candidate = super::strip_indent(line).unwrap_or(line);
        Self::parse(candidate).is_some()
    }
}
