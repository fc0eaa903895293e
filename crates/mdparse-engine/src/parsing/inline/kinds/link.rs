use crate::parsing::inline::cursor::Cursor;

/// Byte index of the `]` matching the `[` that opens `s`.
///
/// Nested brackets must balance; backslash-escaped brackets are skipped.
pub fn matching_bracket(s: &str) -> Option<usize> {
    if !s.starts_with('[') {
        return None;
    }
    let mut depth = 0usize;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Skips spaces and at most one newline, as allowed between link parts.
fn skip_spnl(cur: &mut Cursor<'_>) {
    cur.eat_while(|c| c == ' ');
    if cur.peek() == Some('\n') {
        cur.bump();
        cur.eat_while(|c| c == ' ');
    }
}

/// The second label of `[text][label]`, possibly empty.
///
/// Returns the label and the bytes consumed from the start of `s`.
pub fn reference_label(s: &str) -> Option<(&str, usize)> {
    let mut cur = Cursor::new(s);
    skip_spnl(&mut cur);
    let close = matching_bracket(cur.rest())?;
    let label = &cur.rest()[1..close];
    Some((label, cur.pos() + close + 1))
}

/// The `(url "title")` part of an inline link.
pub struct LinkSource;

impl LinkSource {
    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';

    /// Parses a link source at the start of `s`.
    ///
    /// Returns the URL, the title (empty when absent) and the bytes consumed
    /// including the closing parenthesis.
    pub fn parse(s: &str) -> Option<(&str, &str, usize)> {
        let mut cur = Cursor::new(s);
        if cur.bump() != Some(Self::OPEN) {
            return None;
        }
        skip_spnl(&mut cur);

        let url = if cur.peek() == Some('<') {
            cur.bump();
            let url = cur.eat_while(|c| c != '>' && c != '\n');
            if cur.bump() != Some('>') {
                return None;
            }
            url
        } else {
            Self::bare_url(&mut cur)
        };

        skip_spnl(&mut cur);
        let title = match cur.peek() {
            Some(q @ ('"' | '\'')) => Self::title(&mut cur, q)?,
            _ => "",
        };
        cur.eat_while(|c| c == ' ');

        if cur.bump() != Some(Self::CLOSE) {
            return None;
        }
        Some((url, title, cur.pos()))
    }

    /// A URL without angle brackets; parentheses inside it must balance.
    fn bare_url<'a>(cur: &mut Cursor<'a>) -> &'a str {
        let start = cur.pos();
        let mut depth = 0usize;
        while let Some(c) = cur.peek() {
            match c {
                c if c.is_whitespace() => break,
                '(' => depth += 1,
                ')' if depth == 0 => break,
                ')' => depth -= 1,
                _ => {}
            }
            cur.bump();
        }
        &cur.s[start..cur.pos()]
    }

    /// A quoted title ends at the quote that is followed by `)` or a newline.
    fn title<'a>(cur: &mut Cursor<'a>, quote: char) -> Option<&'a str> {
        cur.bump();
        let body = cur.rest();
        let end = body.char_indices().find_map(|(i, c)| {
            let after = body[i + c.len_utf8()..].trim_start_matches(' ');
            (c == quote && (after.starts_with(Self::CLOSE) || after.starts_with('\n'))).then_some(i)
        })?;
        cur.bump_n(end + quote.len_utf8());
        Some(&body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_nest_and_skip_escapes() {
        assert_eq!(matching_bracket("[a]b"), Some(2));
        assert_eq!(matching_bracket("[a [b] c]"), Some(8));
        assert_eq!(matching_bracket(r"[a \] b]"), Some(7));
        assert_eq!(matching_bracket("[open"), None);
        assert_eq!(matching_bracket("x]"), None);
    }

    #[test]
    fn plain_source() {
        assert_eq!(LinkSource::parse("(/url) x"), Some(("/url", "", 6)));
    }

    #[test]
    fn source_with_titles() {
        assert_eq!(
            LinkSource::parse("(/url \"The \"best\" title\")"),
            Some(("/url", "The \"best\" title", 25))
        );
        assert_eq!(LinkSource::parse("(/u 'T')"), Some(("/u", "T", 8)));
    }

    #[test]
    fn angle_and_balanced_urls() {
        assert_eq!(LinkSource::parse("(<a b>)"), Some(("a b", "", 7)));
        assert_eq!(LinkSource::parse("(/wiki/A_(b))"), Some(("/wiki/A_(b)", "", 13)));
    }

    #[test]
    fn rejects_unclosed_source() {
        assert_eq!(LinkSource::parse("(/url"), None);
        assert_eq!(LinkSource::parse("/url)"), None);
    }

    #[test]
    fn second_labels() {
        assert_eq!(reference_label("[id] rest"), Some(("id", 4)));
        assert_eq!(reference_label(" []"), Some(("", 3)));
        assert_eq!(reference_label("\n [x]"), Some(("x", 5)));
        assert_eq!(reference_label("(x)"), None);
    }
}
