use std::collections::HashSet;

use crate::element::{Content, Element, Link, NoteRef};
use crate::extensions::Extensions;
use crate::parsing::ParseContext;

use super::cursor::Cursor;
use super::kinds::{
    Autolink, CodeSpan, Delim, InlineHtml, LinkSource, matching_bracket, reference_label,
};

/// Characters a backslash turns into literal text.
const ESCAPABLE: &str = "-\\`|*_{}[]()#+.!><";

/// Parses a run of inline markup into a flat sequence of inline elements.
///
/// Leading and trailing whitespace elements are dropped.
pub fn parse_inlines(text: &str, ctx: &ParseContext<'_>) -> Vec<Element> {
    let mut out = InlineParser::new(text, ctx).parse();
    while out
        .last()
        .is_some_and(|e| matches!(e.content(), Content::Space | Content::LineBreak))
    {
        out.pop();
    }
    let leading = out
        .iter()
        .take_while(|e| matches!(e.content(), Content::Space | Content::LineBreak))
        .count();
    out.drain(..leading);
    out
}

/// Recursive-descent inline parser over a single text run.
///
/// Paired delimiters are parsed by speculatively reading a nested sequence up
/// to the matching closer. An opener that finds no closer is remembered so
/// the same attempt is never repeated.
struct InlineParser<'s, 'c> {
    src: &'s str,
    ctx: &'c ParseContext<'c>,
    failed: HashSet<(usize, Delim)>,
}

impl<'s, 'c> InlineParser<'s, 'c> {
    fn new(src: &'s str, ctx: &'c ParseContext<'c>) -> Self {
        Self {
            src,
            ctx,
            failed: HashSet::new(),
        }
    }

    fn enabled(&self, ext: Extensions) -> bool {
        self.ctx.extensions.contains(ext)
    }

    fn parse(&mut self) -> Vec<Element> {
        let mut cur = Cursor::new(self.src);
        self.sequence(&mut cur, None).unwrap_or_default()
    }

    /// Reads inlines until `closer` (consumed) or end of input.
    ///
    /// With a closer, running out of input or closing an empty sequence is a
    /// failure.
    fn sequence(&mut self, cur: &mut Cursor<'s>, closer: Option<Delim>) -> Option<Vec<Element>> {
        let mut out = Vec::new();
        let mut text = String::new();

        while !cur.eof() {
            if let Some(delim) = closer {
                if let Delim::Emph(c) = delim {
                    if doubled(cur, c) {
                        if let Some(strong) = self.delimited(cur, Delim::Strong(c)) {
                            flush(&mut text, &mut out);
                            out.push(strong);
                            continue;
                        }
                    }
                }
                if closes(cur, delim) {
                    flush(&mut text, &mut out);
                    if out.is_empty() {
                        return None;
                    }
                    cur.bump_n(delim.open().len());
                    return Some(out);
                }
            }

            if cur.peek() == Some('\\') {
                if let Some(c) = cur.peek_nth(1).filter(|c| ESCAPABLE.contains(*c)) {
                    cur.bump_n(1 + c.len_utf8());
                    text.push(c);
                    continue;
                }
            }

            if let Some(el) = self.inline(cur) {
                flush(&mut text, &mut out);
                out.push(el);
                continue;
            }

            if let Some(c) = cur.bump() {
                text.push(c);
            }
        }

        if closer.is_some() {
            return None;
        }
        flush(&mut text, &mut out);
        Some(out)
    }

    /// Attempts one non-text inline at the cursor, advancing past it on success.
    fn inline(&mut self, cur: &mut Cursor<'s>) -> Option<Element> {
        match cur.peek()? {
            ' ' | '\n' => Some(whitespace(cur)),
            '`' => {
                let (code, used) = CodeSpan::parse(cur.rest())?;
                let el = Element::new(Content::Code(code.to_string()));
                cur.bump_n(used);
                Some(el)
            }
            c @ ('*' | '_') => self.emphasis(cur, c),
            '~' if self.enabled(Extensions::STRIKE) && cur.starts_with(Delim::STRIKE) => {
                if !opens(cur, Delim::STRIKE.len()) {
                    return None;
                }
                self.delimited(cur, Delim::Strike)
            }
            '[' => {
                if self.enabled(Extensions::NOTES) && cur.starts_with("[^") {
                    if let Some(note) = self.note_reference(cur) {
                        return Some(note);
                    }
                }
                self.link(cur)
            }
            '!' if cur.peek_nth(1) == Some('[') => self.image(cur),
            '^' if self.enabled(Extensions::NOTES) && cur.peek_nth(1) == Some('[') => {
                self.inline_note(cur)
            }
            '<' => self.angle(cur),
            '&' => {
                let entity = InlineHtml::entity(cur.rest())?;
                cur.bump_n(entity.len());
                Some(Element::new(Content::Html(entity.to_string())))
            }
            '.' | '-' | '\'' | '"' if self.enabled(Extensions::SMART) => self.smart(cur),
            _ => None,
        }
    }

    /// Parses `delim`'s content and closer, the cursor sitting on its opener.
    fn delimited(&mut self, cur: &mut Cursor<'s>, delim: Delim) -> Option<Element> {
        let start = cur.pos();
        if self.failed.contains(&(start, delim)) {
            return None;
        }
        let mut inner = cur.clone();
        inner.bump_n(delim.open().len());
        match self.sequence(&mut inner, Some(delim)) {
            Some(children) => {
                *cur = inner;
                Some(Element::with_children(delim.content(), children))
            }
            None => {
                self.failed.insert((start, delim));
                None
            }
        }
    }

    fn emphasis(&mut self, cur: &mut Cursor<'s>, c: char) -> Option<Element> {
        // Intraword underscores stay literal.
        if c == '_' && cur.prev().is_some_and(char::is_alphanumeric) {
            return None;
        }
        if doubled(cur, c) && opens(cur, 2) {
            if let Some(strong) = self.delimited(cur, Delim::Strong(c)) {
                return Some(strong);
            }
        }
        if opens(cur, 1) && cur.peek_nth(1) != Some(c) {
            return self.delimited(cur, Delim::Emph(c));
        }
        None
    }

    /// `[text](url "title")`, `[text][label]`, `[text][]` or `[label]`.
    fn link(&mut self, cur: &mut Cursor<'s>) -> Option<Element> {
        let rest = cur.rest();
        let close = matching_bracket(rest)?;
        let label = &rest[1..close];
        let after = &rest[close + 1..];

        let (link, used) = if let Some((url, title, used)) = LinkSource::parse(after) {
            (Link::new(url, title), used)
        } else if let Some(found) = reference_label(after).and_then(|(second, used)| {
            let key = if second.is_empty() { label } else { second };
            self.ctx.references.get(key).map(|l| (l.clone(), used))
        }) {
            found
        } else {
            (self.ctx.references.get(label)?.clone(), 0)
        };

        cur.bump_n(close + 1 + used);
        let children = parse_inlines(label, self.ctx);
        Some(Element::with_children(
            Content::Link(link.with_label(label)),
            children,
        ))
    }

    fn image(&mut self, cur: &mut Cursor<'s>) -> Option<Element> {
        let mut inner = cur.clone();
        inner.bump();
        let mut link = self.link(&mut inner)?;
        let Content::Link(target) = link.replace_content(Content::List) else {
            return None;
        };
        link.replace_content(Content::Image(target));
        *cur = inner;
        Some(link)
    }

    /// `[^label]` naming a defined note. The body is attached during raw
    /// block resolution.
    fn note_reference(&mut self, cur: &mut Cursor<'s>) -> Option<Element> {
        let close = matching_bracket(cur.rest())?;
        let label = &cur.rest()[2..close];
        self.ctx.notes.get(label)?;
        cur.bump_n(close + 1);
        Some(Element::new(Content::NoteRef(NoteRef::new(label))))
    }

    /// `^[inline note text]`.
    fn inline_note(&mut self, cur: &mut Cursor<'s>) -> Option<Element> {
        let rest = &cur.rest()[1..];
        let close = matching_bracket(rest)?;
        let body = parse_inlines(&rest[1..close], self.ctx);
        if body.is_empty() {
            return None;
        }
        cur.bump_n(1 + close + 1);
        Some(Element::with_children(
            Content::Note(None),
            vec![Element::with_children(Content::Para, body)],
        ))
    }

    /// Autolinks and raw inline HTML.
    fn angle(&mut self, cur: &mut Cursor<'s>) -> Option<Element> {
        if let Some((url, text, used)) = Autolink::parse(cur.rest()) {
            let el = Element::with_children(
                Content::Link(Link::new(url, "")),
                vec![Element::str(text)],
            );
            cur.bump_n(used);
            return Some(el);
        }
        let tag = InlineHtml::tag(cur.rest())?;
        cur.bump_n(tag.len());
        if self.enabled(Extensions::FILTER_HTML) {
            Some(Element::new(Content::List))
        } else {
            Some(Element::new(Content::Html(tag.to_string())))
        }
    }

    /// Ellipses, dashes and quotes.
    fn smart(&mut self, cur: &mut Cursor<'s>) -> Option<Element> {
        for (pat, content) in [
            ("...", Content::Ellipsis),
            (". . .", Content::Ellipsis),
            ("---", Content::EmDash),
            ("--", Content::EmDash),
        ] {
            if cur.starts_with(pat) {
                cur.bump_n(pat.len());
                return Some(Element::new(content));
            }
        }
        match cur.peek()? {
            '-' if cur.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                cur.bump();
                Some(Element::new(Content::EnDash))
            }
            '\'' => {
                if single_quote_opens(cur) {
                    if let Some(quoted) = self.delimited(cur, Delim::SingleQuote) {
                        return Some(quoted);
                    }
                }
                cur.bump();
                Some(Element::new(Content::Apostrophe))
            }
            '"' if opens(cur, 1) => self.delimited(cur, Delim::DoubleQuote),
            _ => None,
        }
    }
}

fn flush(text: &mut String, out: &mut Vec<Element>) {
    if !text.is_empty() {
        out.push(Element::str(std::mem::take(text)));
    }
}

fn doubled(cur: &Cursor<'_>, c: char) -> bool {
    cur.peek() == Some(c) && cur.peek_nth(1) == Some(c)
}

/// An opener `len` bytes long must be followed by non-whitespace.
fn opens(cur: &Cursor<'_>, len: usize) -> bool {
    cur.rest()[len..]
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace())
}

fn closes(cur: &Cursor<'_>, delim: Delim) -> bool {
    if !cur.starts_with(&delim.open()) {
        return false;
    }
    let after = cur.rest()[delim.open().len()..].chars().next();
    let before_ok = !delim.flanking_close() || cur.prev().is_some_and(|c| !c.is_whitespace());
    match delim {
        Delim::Emph('_') | Delim::Strong('_') | Delim::SingleQuote => {
            before_ok && !after.is_some_and(char::is_alphanumeric)
        }
        _ => before_ok,
    }
}

/// A single quote opens a quotation unless it is an apostrophe.
fn single_quote_opens(cur: &Cursor<'_>) -> bool {
    if cur.prev().is_some_and(char::is_alphanumeric) || !opens(cur, 1) {
        return false;
    }
    let after = &cur.rest()[1..];
    let contraction = ["s", "t", "m", "ve", "ll", "re"].iter().any(|suffix| {
        after.starts_with(suffix)
            && !after[suffix.len()..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric)
    });
    !contraction
}

/// A run of spaces and newlines: a hard break when two or more spaces end a
/// line, otherwise a single space.
fn whitespace(cur: &mut Cursor<'_>) -> Element {
    let run = cur.eat_while(|c| c == ' ' || c == '\n');
    match run.find('\n') {
        Some(nl) if nl >= 2 => Element::new(Content::LineBreak),
        _ => Element::new(Content::Space),
    }
}
