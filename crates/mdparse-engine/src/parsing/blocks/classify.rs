use crate::extensions::Extensions;

use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Heading, HorizontalRule, HtmlBlock, HtmlOpen, ListKind,
    ListMarker, strip_indent,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Line text without its terminating newline.
    pub text: &'a str,
    /// Whether the line is blank (spaces and tabs only).
    pub is_blank: bool,
    /// Text after one level of indentation, for indented lines.
    pub indented: Option<&'a str>,
    /// Text after a `>` marker, for block quote lines.
    pub quote: Option<&'a str>,
    /// List kind and item text, for lines opening a list item.
    pub list: Option<(ListKind, &'a str)>,
    pub rule: bool,
    pub atx: Option<(u8, &'a str)>,
    /// Level, if this line could underline a setext heading.
    pub setext: Option<u8>,
    /// Fence signature; only populated when fenced code is enabled.
    pub fence: Option<FenceSig>,
    pub html: Option<HtmlOpen>,
}

/// Splits text into lines, dropping `\n` (and a preceding `\r`).
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n').map(|line| {
        let line = line.strip_suffix('\n').unwrap_or(line);
        line.strip_suffix('\r').unwrap_or(line)
    })
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier {
    pub extensions: Extensions,
}

impl MarkdownLineClassifier {
    pub fn new(extensions: Extensions) -> Self {
        Self { extensions }
    }

    pub fn classify<'a>(&self, text: &'a str) -> LineClass<'a> {
        let is_blank = text.chars().all(|c| c == ' ' || c == '\t');
        if is_blank {
            return LineClass {
                text,
                is_blank,
                indented: None,
                quote: None,
                list: None,
                rule: false,
                atx: None,
                setext: None,
                fence: None,
                html: None,
            };
        }

        LineClass {
            text,
            is_blank,
            indented: strip_indent(text),
            quote: BlockQuote::strip_prefix(text),
            list: ListMarker::parse(text),
            rule: HorizontalRule::matches(text),
            atx: Heading::atx(text),
            setext: Heading::setext_level(text),
            fence: if self.extensions.contains(Extensions::FENCED_CODE) {
                CodeFence::sig(text)
            } else {
                None
            },
            html: HtmlBlock::opens(text),
        }
    }

    pub fn classify_all<'a>(&self, text: &'a str) -> Vec<LineClass<'a>> {
        split_lines(text).map(|line| self.classify(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_drops_terminators() {
        let lines: Vec<_> = split_lines("a\r\nb\n\nc").collect();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
        assert_eq!(split_lines("x\n\n").count(), 2);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn blank_lines_have_no_other_facts() {
        let c = MarkdownLineClassifier::new(Extensions::all()).classify("    ");
        assert!(c.is_blank);
        assert!(c.indented.is_none());
    }

    #[test]
    fn fences_only_with_extension() {
        let plain = MarkdownLineClassifier::new(Extensions::empty()).classify("```");
        let fenced = MarkdownLineClassifier::new(Extensions::FENCED_CODE).classify("```");
        assert!(plain.fence.is_none());
        assert!(fenced.fence.is_some());
    }

    #[test]
    fn classifies_block_openers() {
        let cls = MarkdownLineClassifier::new(Extensions::empty());
        assert_eq!(cls.classify("> q").quote, Some("q"));
        assert_eq!(cls.classify("    code").indented, Some("code"));
        assert_eq!(cls.classify("## h").atx, Some((2, "h")));
        assert!(cls.classify("* * *").rule);
        assert_eq!(cls.classify("1. x").list, Some((ListKind::Ordered, "x")));
    }
}
