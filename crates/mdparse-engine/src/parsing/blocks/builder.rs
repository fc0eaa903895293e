use crate::element::{CHUNK_DELIMITER, Content, Element};
use crate::extensions::Extensions;
use crate::parsing::ParseContext;
use crate::parsing::inline::parse_inlines;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{
        CodeFence, HtmlBlock, HtmlOpen, ListKind, ListMarker, NoteDefinition,
        ReferenceDefinition, strip_optional_indent,
    },
};

/// Phase 2 of block parsing: walks classified lines and emits elements.
///
/// Container bodies (block quotes, list items, note definitions) are not
/// parsed here. Their de-prefixed text is packed into a [`Content::Raw`]
/// child and left for the raw block resolver.
pub struct BlockBuilder<'a, 'c> {
    lines: Vec<LineClass<'a>>,
    pos: usize,
    ctx: &'c ParseContext<'c>,
}

impl<'a, 'c> BlockBuilder<'a, 'c> {
    pub fn new(text: &'a str, ctx: &'c ParseContext<'c>) -> Self {
        Self {
            lines: MarkdownLineClassifier::new(ctx.extensions).classify_all(text),
            pos: 0,
            ctx,
        }
    }

    pub fn finish(mut self) -> Vec<Element> {
        let mut out = Vec::new();
        loop {
            self.skip_blank_lines();
            if self.at_end() {
                break;
            }
            out.push(self.block());
        }
        out
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn line(&self) -> &LineClass<'a> {
        &self.lines[self.pos]
    }

    fn enabled(&self, ext: Extensions) -> bool {
        self.ctx.extensions.contains(ext)
    }

    fn skip_blank_lines(&mut self) -> usize {
        let start = self.pos;
        while !self.at_end() && self.line().is_blank {
            self.pos += 1;
        }
        self.pos - start
    }

    fn block(&mut self) -> Element {
        let line = self.line().clone();

        if line.quote.is_some() {
            return self.block_quote();
        }
        if line.fence.is_some() {
            return self.fenced_code();
        }
        if line.indented.is_some() {
            return self.verbatim();
        }
        if self.enabled(Extensions::NOTES) {
            if let Some((label, first)) = NoteDefinition::parse(line.text) {
                return self.note_definition(label, first);
            }
        }
        if let Some(link) = ReferenceDefinition::parse(line.text, self.enabled(Extensions::NOTES)) {
            self.pos += 1;
            return Element::new(Content::Reference(link));
        }
        if line.rule {
            self.pos += 1;
            return Element::new(Content::HorizontalRule);
        }
        if let Some((level, text)) = line.atx {
            self.pos += 1;
            return Element::with_children(Content::Heading(level), self.inlines(text));
        }
        if let Some(level) = self.setext_underline_follows() {
            self.pos += 2;
            return Element::with_children(Content::Heading(level), self.inlines(line.text.trim()));
        }
        if let Some((kind, _)) = line.list {
            return self.list(kind);
        }
        if let Some(open) = line.html {
            return self.html_block(open);
        }
        self.paragraph()
    }

    fn inlines(&self, text: &str) -> Vec<Element> {
        parse_inlines(text, self.ctx)
    }

    /// Level of the setext heading formed by the current line and the next.
    fn setext_underline_follows(&self) -> Option<u8> {
        let next = self.lines.get(self.pos + 1)?;
        if self.line().is_blank {
            return None;
        }
        next.setext
    }

    fn block_quote(&mut self) -> Element {
        let mut body = String::new();
        while let Some(rest) = self.lines.get(self.pos).and_then(|l| l.quote) {
            body.push_str(rest);
            body.push('\n');
            self.pos += 1;
            // Lazy continuation lines.
            while !self.at_end() && !self.line().is_blank && self.line().quote.is_none() {
                body.push_str(self.line().text);
                body.push('\n');
                self.pos += 1;
            }
            while !self.at_end() && self.line().is_blank {
                body.push('\n');
                self.pos += 1;
            }
        }
        body.push('\n');
        Element::with_children(Content::BlockQuote, vec![Element::raw(body)])
    }

    fn verbatim(&mut self) -> Element {
        let mut text = String::new();
        loop {
            let save = self.pos;
            let blanks = self.skip_blank_lines();
            if !self.lines.get(self.pos).is_some_and(|l| l.indented.is_some()) {
                self.pos = save;
                break;
            }
            text.extend(std::iter::repeat_n('\n', blanks));
            while let Some(code) = self
                .lines
                .get(self.pos)
                .filter(|l| !l.is_blank)
                .and_then(|l| l.indented)
            {
                text.push_str(code);
                text.push('\n');
                self.pos += 1;
            }
        }
        Element::new(Content::Verbatim(text))
    }

    fn fenced_code(&mut self) -> Element {
        let Some(open) = self.line().fence else {
            return self.paragraph();
        };
        self.pos += 1;
        let mut text = String::new();
        while !self.at_end() {
            let line = self.line().text;
            self.pos += 1;
            if CodeFence::closes(open, line) {
                break;
            }
            text.push_str(line);
            text.push('\n');
        }
        Element::new(Content::Verbatim(text))
    }

    fn note_definition(&mut self, label: &str, first: &str) -> Element {
        self.pos += 1;
        let mut blocks = Vec::new();
        let mut block = format!("{first}\n");
        loop {
            while !self.at_end() && !self.line().is_blank {
                block.push_str(strip_optional_indent(self.line().text));
                block.push('\n');
                self.pos += 1;
            }
            let blanks = self.skip_blank_lines();
            block.extend(std::iter::repeat_n('\n', blanks));
            block.push('\n');
            blocks.push(Element::raw(std::mem::take(&mut block)));

            match self.lines.get(self.pos) {
                Some(next) if next.indented.is_some() => {}
                _ => break,
            }
        }
        Element::with_children(Content::Note(Some(label.to_string())), blocks)
    }

    fn list(&mut self, kind: ListKind) -> Element {
        let mut items = Vec::new();
        let mut tight = true;
        loop {
            let (raw, blank_continuation) = self.list_item();
            tight &= !blank_continuation;
            items.push(raw);

            let save = self.pos;
            let blanks = self.skip_blank_lines();
            if !self.at_end() && self.line().list.is_some() {
                tight &= blanks == 0;
                continue;
            }
            if tight {
                self.pos = save;
            }
            break;
        }

        let items = items
            .into_iter()
            .map(|mut raw| {
                if !tight {
                    raw.push_str("\n\n");
                }
                Element::with_children(Content::ListItem, vec![Element::raw(raw)])
            })
            .collect();
        let content = match kind {
            ListKind::Bullet => Content::BulletList,
            ListKind::Ordered => Content::OrderedList,
        };
        Element::with_children(content, items)
    }

    /// Collects one item's raw text, returning it together with whether any
    /// continuation block was separated from the item by blank lines.
    ///
    /// An indented continuation that directly follows the item's text is
    /// joined with [`CHUNK_DELIMITER`] so the two parse independently.
    fn list_item(&mut self) -> (String, bool) {
        let first = self.line().list.map(|(_, rest)| rest).unwrap_or_default();
        self.pos += 1;
        let mut raw = format!("{first}\n");
        self.list_block_lines(&mut raw);

        let mut blank_continuation = false;
        loop {
            let save = self.pos;
            let blanks = self.skip_blank_lines();
            let continues = self
                .lines
                .get(self.pos)
                .is_some_and(|l| !l.is_blank && l.indented.is_some());
            if !continues {
                self.pos = save;
                break;
            }
            if blanks == 0 {
                raw.push(CHUNK_DELIMITER);
            } else {
                blank_continuation = true;
                raw.extend(std::iter::repeat_n('\n', blanks));
            }
            while let Some(inner) = self
                .lines
                .get(self.pos)
                .filter(|l| !l.is_blank)
                .and_then(|l| l.indented)
            {
                raw.push_str(inner);
                raw.push('\n');
                self.pos += 1;
                self.list_block_lines(&mut raw);
            }
        }
        (raw, blank_continuation)
    }

    fn list_block_lines(&mut self, raw: &mut String) {
        while let Some(line) = self.lines.get(self.pos) {
            if line.is_blank || line.rule || ListMarker::starts_item(line.text) {
                break;
            }
            raw.push_str(strip_optional_indent(line.text));
            raw.push('\n');
            self.pos += 1;
        }
    }

    fn html_block(&mut self, open: HtmlOpen) -> Element {
        let terminator = match open {
            HtmlOpen::Comment => Some(HtmlBlock::COMMENT_CLOSE),
            HtmlOpen::Style => Some(HtmlBlock::STYLE_CLOSE),
            HtmlOpen::Block => None,
        };

        let mut lines = Vec::new();
        while !self.at_end() {
            let (text, is_blank) = (self.line().text, self.line().is_blank);
            if terminator.is_none() && is_blank {
                break;
            }
            lines.push(text);
            self.pos += 1;
            if terminator.is_some_and(|t| text.to_ascii_lowercase().contains(t)) {
                break;
            }
        }

        let filtered = match open {
            HtmlOpen::Style => self.enabled(Extensions::FILTER_STYLES),
            HtmlOpen::Block | HtmlOpen::Comment => self.enabled(Extensions::FILTER_HTML),
        };
        if filtered {
            Element::new(Content::List)
        } else {
            Element::new(Content::HtmlBlock(lines.join("\n")))
        }
    }

    fn paragraph(&mut self) -> Element {
        let mut lines = vec![self.line().text];
        self.pos += 1;
        while !self.at_end() {
            let line = self.line();
            if line.is_blank
                || line.quote.is_some()
                || line.atx.is_some()
                || line.fence.is_some()
                || self.setext_underline_follows().is_some()
            {
                break;
            }
            lines.push(line.text);
            self.pos += 1;
        }

        let followed_by_blank = !self.at_end() && self.line().is_blank;
        let text = lines.join("\n");
        let children = self.inlines(text.trim());
        let content = if followed_by_blank {
            Content::Para
        } else {
            Content::Plain
        };
        Element::with_children(content, children)
    }
}
